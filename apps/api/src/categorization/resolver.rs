//! Category Resolver: reduces raw backend text to exactly one category.

/// Category returned when the backend output contains no usable label.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Picks the first non-empty, trimmed entry of a comma-separated label list.
///
/// The backend is not a contract, so the result is not checked against the
/// known categories. Unknown labels pass through and fall back at assignment.
pub fn resolve_category(raw: &str) -> &str {
    raw.split(',')
        .map(str::trim)
        .find(|token| !token.is_empty())
        .unwrap_or(FALLBACK_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category_is_returned_trimmed() {
        assert_eq!(resolve_category("  Hardware Issues \n"), "Hardware Issues");
    }

    #[test]
    fn test_first_of_multiple_categories_wins() {
        assert_eq!(
            resolve_category("Hardware Issues, Networking & Security"),
            "Hardware Issues"
        );
    }

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(resolve_category(""), "Uncategorized");
    }

    #[test]
    fn test_whitespace_only_input_falls_back() {
        assert_eq!(resolve_category(" \t\n "), "Uncategorized");
    }

    #[test]
    fn test_leading_empty_tokens_are_skipped() {
        assert_eq!(resolve_category(" , ,Legal & Compliance"), "Legal & Compliance");
        assert_eq!(resolve_category(",,,"), "Uncategorized");
    }

    #[test]
    fn test_unknown_label_passes_through() {
        assert_eq!(resolve_category("Gardening, Cooking"), "Gardening");
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        assert_eq!(
            resolve_category("AI &  Machine Learning"),
            "AI &  Machine Learning"
        );
    }
}
