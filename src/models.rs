//! Frontend Models
//!
//! Data structures matching the remote `items` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::refs::normalize_reference;

/// A stored wishlist row, as returned by the store.
///
/// `ref` is reserved in Rust, so the catalog reference travels under that
/// wire name but lives in `reference` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub list_code: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub name: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: i64,
    pub other: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. `id` and `created_at` are assigned by the store.
///
/// Absent optional fields serialize as explicit `null` so the row always
/// carries every column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub list_code: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub name: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: i64,
    pub other: Option<String>,
}

/// Validation failures caught before any store call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyReference,
    InvalidQuantity,
}

impl NewItem {
    /// Build an insert payload from raw form input.
    ///
    /// Normalizes the reference, rejects an empty reference or a quantity
    /// below 1, and drops whitespace-only optional fields to `None`.
    pub fn build(
        list_code: &str,
        reference_input: &str,
        name: &str,
        color: &str,
        size: &str,
        other: &str,
        quantity: i64,
    ) -> Result<NewItem, FormError> {
        let reference = normalize_reference(reference_input);
        if reference.is_empty() {
            return Err(FormError::EmptyReference);
        }
        if quantity < 1 {
            return Err(FormError::InvalidQuantity);
        }
        Ok(NewItem {
            list_code: list_code.to_string(),
            reference,
            name: clean(name),
            color: clean(color),
            size: clean(size),
            quantity,
            other: clean(other),
        })
    }
}

fn clean(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_normalizes_and_trims() {
        let payload = NewItem::build(
            "shopmom-x",
            "  https://shop.example/p/12345678.html ",
            " Robe noire ",
            "",
            "  M ",
            "   ",
            2,
        )
        .unwrap();

        assert_eq!(payload.list_code, "shopmom-x");
        assert_eq!(payload.reference, "12345678");
        assert_eq!(payload.name.as_deref(), Some("Robe noire"));
        assert_eq!(payload.color, None);
        assert_eq!(payload.size.as_deref(), Some("M"));
        assert_eq!(payload.other, None);
        assert_eq!(payload.quantity, 2);
    }

    #[test]
    fn build_rejects_empty_reference() {
        let result = NewItem::build("shopmom-x", "   ", "Robe", "", "", "", 1);
        assert_eq!(result, Err(FormError::EmptyReference));
    }

    #[test]
    fn build_rejects_zero_quantity() {
        let result = NewItem::build("shopmom-x", "999", "", "", "", "", 0);
        assert_eq!(result, Err(FormError::InvalidQuantity));
    }

    #[test]
    fn absent_fields_serialize_as_null() {
        let payload = NewItem::build("shopmom-x", "999", "Robe", "", "M", "", 2).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["ref"], "999");
        assert_eq!(json["name"], "Robe");
        assert!(json["color"].is_null());
        assert_eq!(json["size"], "M");
        assert!(json["other"].is_null());
        assert_eq!(json["quantity"], 2);
        // Columns are present even when null, never omitted
        assert!(json.as_object().unwrap().contains_key("color"));
        assert!(json.as_object().unwrap().contains_key("other"));
    }
}
