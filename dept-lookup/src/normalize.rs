pub const KEYWORD_DELIMITER: char = '|';

/// Trims and lower-cases text for substring comparison. Scripts without case
/// (CJK, kana) pass through unchanged.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(KEYWORD_DELIMITER)
        .filter_map(|segment| {
            let term = normalize_text(segment);
            if term.is_empty() { None } else { Some(term) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_empty_terms_and_keeps_order() {
        assert_eq!(
            split_keywords(" 休學 || 復學 |  | Drop "),
            vec!["休學".to_string(), "復學".to_string(), "drop".to_string()]
        );
    }

    #[test]
    fn split_of_blank_field_is_empty() {
        assert!(split_keywords("   ").is_empty());
        assert!(split_keywords("").is_empty());
    }

    #[test]
    fn normalize_folds_non_ascii_case() {
        assert_eq!(normalize_text("  ÉCOLE 教務處 "), "école 教務處");
    }
}
