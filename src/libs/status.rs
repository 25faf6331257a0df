//! Status normalization shared by filters and table badges.
//!
//! Backend records carry free-form status strings (`"CONFIRMED"`,
//! `"cancelled"`, ...). Both the exact-match filter predicate and the table
//! rendering go through this module, so filtering by a status and displaying
//! that status can never disagree on what a raw value means.

use std::fmt::{Display, Formatter};

/// Stable visual category a raw status string maps into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Confirmed,
    Completed,
    Cancelled,
    Pending,
    Unknown,
}

/// Visual tone used when rendering a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Negative,
    Warning,
    Neutral,
}

impl StatusCategory {
    /// Maps a raw backend status string to its category, case-insensitively.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "CONFIRMED" => StatusCategory::Confirmed,
            "COMPLETED" => StatusCategory::Completed,
            "CANCELLED" => StatusCategory::Cancelled,
            "PENDING" => StatusCategory::Pending,
            _ => StatusCategory::Unknown,
        }
    }

    /// The badge tone for this category.
    pub fn tone(&self) -> StatusTone {
        match self {
            StatusCategory::Confirmed | StatusCategory::Completed => StatusTone::Positive,
            StatusCategory::Cancelled => StatusTone::Negative,
            StatusCategory::Pending => StatusTone::Warning,
            StatusCategory::Unknown => StatusTone::Neutral,
        }
    }
}

impl Display for StatusCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StatusCategory::Confirmed => "Confirmed",
            StatusCategory::Completed => "Completed",
            StatusCategory::Cancelled => "Cancelled",
            StatusCategory::Pending => "Pending",
            StatusCategory::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Badge text for a raw status value: first letter upper, remainder lower.
///
/// The displayed text is derived from the raw input, not the category name,
/// so unknown statuses still render readably (`"REFUNDED"` → `"Refunded"`).
pub fn display_text(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Case-insensitive status equality used by the exact-match filter predicate.
pub fn status_matches(raw: &str, selected: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(selected.trim())
}
