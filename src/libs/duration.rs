//! Booking duration arithmetic over wall-clock time strings.
//!
//! The backend stores booking slots as plain time-of-day strings, either in
//! 24-hour form (`"13:30"`) or 12-hour form with an AM/PM suffix (`"1:30PM"`,
//! case-insensitive, optional space before the suffix). This module turns a
//! start/end pair into a human-readable elapsed duration for table display.
//!
//! ## Behavior
//!
//! - Parsing never fails loudly: any input that cannot be read as a time of
//!   day degrades to the literal string `"N/A"` in the computed output.
//! - A booking that ends before it starts is treated as a single overnight
//!   span and gets exactly one 24-hour correction. Multi-day bookings are not
//!   supported by the backend and no further correction is attempted.
//! - Formatting follows the marketplace convention: `"0min"`, `"45min"`,
//!   `"2hr"` for exact hours, `"2hr 15min"` otherwise.
//!
//! ## Examples
//!
//! ```rust
//! use fieldsy_admin::libs::duration::compute_duration;
//!
//! assert_eq!(compute_duration("13:00", "14:30"), "1hr 30min");
//! assert_eq!(compute_duration("1:00PM", "2:00PM"), "1hr");
//! assert_eq!(compute_duration("23:30", "00:30"), "1hr");
//! assert_eq!(compute_duration("", "10:00"), "N/A");
//! ```

/// Placeholder rendered when a time pair cannot be parsed.
pub const NOT_AVAILABLE: &str = "N/A";

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Parses a time-of-day string into minutes since midnight.
///
/// Accepts `H:MM`/`HH:MM` 24-hour strings and `H:MM AM`/`H:MMPM` 12-hour
/// strings. The meridiem suffix is detected case-insensitively; hour 12 maps
/// to 0 for AM and stays 12 for PM, other PM hours gain 12. A missing minutes
/// component defaults to zero, a present but non-numeric component yields
/// `None`.
pub fn parse_time_of_day(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_ascii_uppercase();
    let (clock, meridiem) = if let Some(stripped) = upper.strip_suffix("AM") {
        (stripped.trim_end(), Some(false))
    } else if let Some(stripped) = upper.strip_suffix("PM") {
        (stripped.trim_end(), Some(true))
    } else {
        (upper.as_str(), None)
    };

    let mut parts = clock.splitn(2, ':');
    let hour: i32 = parts.next()?.trim().parse().ok()?;
    let minute: i32 = match parts.next() {
        Some(component) => component.trim().parse().ok()?,
        None => 0,
    };

    let hour = match meridiem {
        Some(false) if hour == 12 => 0,
        Some(true) if hour != 12 => hour + 12,
        _ => hour,
    };

    Some(hour * 60 + minute)
}

/// Formats non-negative elapsed minutes using the marketplace convention.
pub fn format_minutes(elapsed: i32) -> String {
    if elapsed <= 0 {
        "0min".to_string()
    } else if elapsed < 60 {
        format!("{}min", elapsed)
    } else if elapsed % 60 == 0 {
        format!("{}hr", elapsed / 60)
    } else {
        format!("{}hr {}min", elapsed / 60, elapsed % 60)
    }
}

/// Computes the elapsed duration between two time-of-day strings.
///
/// Returns `"N/A"` when either input is empty or unparseable. When the end
/// falls before the start the span is assumed to cross midnight once and a
/// single day is added.
pub fn compute_duration(start: &str, end: &str) -> String {
    let (start_minutes, end_minutes) = match (parse_time_of_day(start), parse_time_of_day(end)) {
        (Some(start_minutes), Some(end_minutes)) => (start_minutes, end_minutes),
        _ => return NOT_AVAILABLE.to_string(),
    };

    let mut elapsed = end_minutes - start_minutes;
    if elapsed < 0 {
        // Overnight booking: wrap exactly once.
        elapsed += MINUTES_PER_DAY;
    }

    format_minutes(elapsed)
}
