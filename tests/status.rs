#[cfg(test)]
mod tests {
    use fieldsy_admin::libs::status::{display_text, status_matches, StatusCategory, StatusTone};

    #[test]
    fn test_category_from_known_statuses() {
        assert_eq!(StatusCategory::from_raw("CONFIRMED"), StatusCategory::Confirmed);
        assert_eq!(StatusCategory::from_raw("COMPLETED"), StatusCategory::Completed);
        assert_eq!(StatusCategory::from_raw("CANCELLED"), StatusCategory::Cancelled);
        assert_eq!(StatusCategory::from_raw("PENDING"), StatusCategory::Pending);
    }

    #[test]
    fn test_category_is_case_and_whitespace_insensitive() {
        assert_eq!(StatusCategory::from_raw("confirmed"), StatusCategory::Confirmed);
        assert_eq!(StatusCategory::from_raw("  Pending  "), StatusCategory::Pending);
        assert_eq!(StatusCategory::from_raw("cAnCeLlEd"), StatusCategory::Cancelled);
    }

    #[test]
    fn test_category_unknown_fallback() {
        assert_eq!(StatusCategory::from_raw("REFUNDED"), StatusCategory::Unknown);
        assert_eq!(StatusCategory::from_raw(""), StatusCategory::Unknown);
        assert_eq!(StatusCategory::from_raw("???"), StatusCategory::Unknown);
    }

    #[test]
    fn test_tone_mapping() {
        assert_eq!(StatusCategory::Confirmed.tone(), StatusTone::Positive);
        assert_eq!(StatusCategory::Completed.tone(), StatusTone::Positive);
        assert_eq!(StatusCategory::Cancelled.tone(), StatusTone::Negative);
        assert_eq!(StatusCategory::Pending.tone(), StatusTone::Warning);
        assert_eq!(StatusCategory::Unknown.tone(), StatusTone::Neutral);
    }

    #[test]
    fn test_display_text_title_cases_raw_value() {
        assert_eq!(display_text("CONFIRMED"), "Confirmed");
        assert_eq!(display_text("pending"), "Pending");
        assert_eq!(display_text("Cancelled"), "Cancelled");
        // Unknown statuses are still rendered from the raw value, not hidden.
        assert_eq!(display_text("REFUNDED"), "Refunded");
    }

    #[test]
    fn test_display_text_degenerate_inputs() {
        assert_eq!(display_text(""), "");
        assert_eq!(display_text("x"), "X");
    }

    #[test]
    fn test_status_matches_exact_but_case_insensitive() {
        assert!(status_matches("CONFIRMED", "confirmed"));
        assert!(status_matches("  CONFIRMED ", "Confirmed"));
        assert!(!status_matches("CONFIRMED", "CONFIRM"));
        assert!(!status_matches("CONFIRMED", "COMPLETED"));
    }
}
