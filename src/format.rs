//! Clipboard Formatting
//!
//! Serializes the current list into the shareable text block shown in the
//! preview pane and written to the clipboard. Both renderings must agree on
//! which fields appear, so presence rules live here and in the item badges
//! only.

use crate::models::Item;

/// Format the whole list for the clipboard.
///
/// Items are rendered in input order (most recently added first, as fetched).
pub fn format_for_clipboard(items: &[Item]) -> String {
    if items.is_empty() {
        return "Liste Shopy Mom : (vide)".to_string();
    }

    let lines: Vec<String> = items.iter().map(format_line).collect();
    format!("Shopy Mom 🛍️\n\n{}", lines.join("\n"))
}

/// One line per item: `• ref — name (Couleur: … • Taille: … • Autre: … • xN)`
///
/// Absent optional fields are omitted entirely; the quantity marker is always
/// the last detail.
fn format_line(item: &Item) -> String {
    let mut line = format!("• {}", item.reference);
    if let Some(name) = &item.name {
        line.push_str(" — ");
        line.push_str(name);
    }

    let mut details: Vec<String> = Vec::new();
    if let Some(color) = &item.color {
        details.push(format!("Couleur: {color}"));
    }
    if let Some(size) = &item.size {
        details.push(format!("Taille: {size}"));
    }
    if let Some(other) = &item.other {
        details.push(format!("Autre: {other}"));
    }
    details.push(format!("x{}", item.quantity));

    format!("{} ({})", line, details.join(" • "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_item(
        reference: &str,
        name: Option<&str>,
        color: Option<&str>,
        size: Option<&str>,
        other: Option<&str>,
        quantity: i64,
    ) -> Item {
        Item {
            id: Uuid::nil(),
            list_code: "shopmom-x".to_string(),
            reference: reference.to_string(),
            name: name.map(str::to_string),
            color: color.map(str::to_string),
            size: size.map(str::to_string),
            quantity,
            other: other.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_list_has_fixed_message() {
        assert_eq!(format_for_clipboard(&[]), "Liste Shopy Mom : (vide)");
    }

    #[test]
    fn line_omits_absent_fields() {
        let item = make_item("999", Some("Robe"), None, Some("M"), None, 2);
        let text = format_for_clipboard(&[item]);
        let line = text.lines().last().unwrap();
        assert_eq!(line, "• 999 — Robe (Taille: M • x2)");
    }

    #[test]
    fn line_with_every_field() {
        let item = make_item(
            "12345678",
            Some("Robe noire"),
            Some("Noir"),
            Some("38"),
            Some("2ème choix"),
            1,
        );
        let text = format_for_clipboard(&[item]);
        let line = text.lines().last().unwrap();
        assert_eq!(
            line,
            "• 12345678 — Robe noire (Couleur: Noir • Taille: 38 • Autre: 2ème choix • x1)"
        );
    }

    #[test]
    fn bare_reference_still_carries_quantity() {
        let item = make_item("777777", None, None, None, None, 3);
        let text = format_for_clipboard(&[item]);
        assert_eq!(text.lines().last().unwrap(), "• 777777 (x3)");
    }

    #[test]
    fn output_is_header_blank_then_one_line_per_item() {
        let items = vec![
            make_item("111111", Some("Premier"), None, None, None, 1),
            make_item("222222", None, Some("Rouge"), None, None, 2),
            make_item("333333", None, None, None, Some("matière"), 1),
        ];
        let text = format_for_clipboard(&items);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), items.len() + 2);
        assert_eq!(lines[0], "Shopy Mom 🛍️");
        assert_eq!(lines[1], "");
        // Input order is preserved
        assert!(lines[2].starts_with("• 111111"));
        assert!(lines[3].starts_with("• 222222"));
        assert!(lines[4].starts_with("• 333333"));
    }
}
