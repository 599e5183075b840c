//! Reference Normalization
//!
//! Turns a pasted reference or product link into a canonical catalog
//! reference.

/// Normalize a raw reference-or-link input.
///
/// Trims whitespace. For http(s) links, extracts the first run of six or
/// more digits found anywhere in the URL; links without such a run are kept
/// verbatim as the reference. Anything else passes through trimmed.
pub fn normalize_reference(input: &str) -> String {
    let s = input.trim();
    if s.is_empty() {
        return String::new();
    }

    if s.starts_with("http://") || s.starts_with("https://") {
        if let Some(run) = first_digit_run(s, 6) {
            return run.to_string();
        }
    }

    s.to_string()
}

/// First run of at least `min_len` consecutive ASCII digits, if any
fn first_digit_run(s: &str, min_len: usize) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i - start >= min_len {
                return Some(&s[start..i]);
            }
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_reference_passes_through_trimmed() {
        assert_eq!(normalize_reference("  12345678  "), "12345678");
        assert_eq!(normalize_reference("sw2207269271"), "sw2207269271");
        assert_eq!(normalize_reference("999"), "999");
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(normalize_reference(""), "");
        assert_eq!(normalize_reference("   "), "");
    }

    #[test]
    fn link_with_long_digit_run_extracts_id() {
        assert_eq!(
            normalize_reference("https://shop.example/p/12345678.html"),
            "12345678"
        );
        assert_eq!(
            normalize_reference("http://shop.example/robe-p-2207269271.html?src=home"),
            "2207269271"
        );
    }

    #[test]
    fn link_extracts_first_run_when_several() {
        assert_eq!(
            normalize_reference("https://shop.example/123456/item-789012345"),
            "123456"
        );
    }

    #[test]
    fn short_runs_do_not_count() {
        // 12345 is five digits, not enough; the link stays verbatim
        assert_eq!(
            normalize_reference("https://shop.example/p/12345.html"),
            "https://shop.example/p/12345.html"
        );
    }

    #[test]
    fn link_without_digits_is_kept_verbatim() {
        assert_eq!(
            normalize_reference("  https://shop.example/nouveautes  "),
            "https://shop.example/nouveautes"
        );
    }

    #[test]
    fn non_url_with_digits_is_not_extracted() {
        // Extraction only applies to links
        assert_eq!(
            normalize_reference("ref 12345678 peut-être"),
            "ref 12345678 peut-être"
        );
    }
}
