//! Client-side record filtering for listing commands.
//!
//! Each record kind has its own filter struct with exactly the predicates
//! that make sense for it, all implementing [`RecordFilter`]. A record is
//! kept only when every active predicate passes; predicates short-circuit in
//! declaration order (free-text search, exact status match, date bucket,
//! numeric bucket, free-text field match).
//!
//! Inactive predicates never exclude anything: an empty search string, a
//! `None` status selection and the `All` buckets are all neutral, so a filter
//! in its default state returns the input unchanged (in input order).
//!
//! Date buckets compare against an injected `today` instead of reading the
//! clock, keeping the pipeline a pure function of its inputs.

use crate::libs::records::{Booking, Claim, Field, Payment, Review, User};
use crate::libs::status::status_matches;
use chrono::{Datelike, Duration, NaiveDate};

/// Sentinel filter value meaning "no constraint".
pub const ALL: &str = "All";

/// Assumed capacity when a field does not declare a max-dogs value.
///
/// Carried over from the original dashboard: unlabeled fields are large,
/// so they land in the `6+` bucket rather than silently disappearing.
pub const DEFAULT_MAX_DOGS: u32 = 10;

/// Turns a CLI filter argument into an exact-match selection.
///
/// The `All` sentinel and blank input both mean "no constraint" and yield
/// `None`; anything else is trimmed and kept.
pub fn selection(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-insensitive substring search over a record's declared fields.
///
/// A blank term matches everything; otherwise any haystack entry containing
/// the lowercased term is a hit.
pub fn search_matches(term: &str, haystack: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    haystack.iter().any(|entry| entry.to_lowercase().contains(&term))
}

/// Calendar bucket a record date is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
    LastMonth,
}

impl DateRange {
    /// Parses a CLI argument; accepts spaced, hyphenated and short spellings.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().replace(' ', "-").as_str() {
            "" | "all" => Some(DateRange::All),
            "today" => Some(DateRange::Today),
            "this-week" | "week" => Some(DateRange::ThisWeek),
            "this-month" | "month" => Some(DateRange::ThisMonth),
            "last-month" => Some(DateRange::LastMonth),
            _ => None,
        }
    }

    /// Whether a record day falls inside this bucket relative to `today`.
    ///
    /// A record with no date is excluded by every bucket except `All`.
    /// Weeks start on Sunday; `ThisWeek` has no upper bound, matching the
    /// original dashboard behavior for future-dated bookings.
    pub fn contains(&self, day: Option<NaiveDate>, today: NaiveDate) -> bool {
        if *self == DateRange::All {
            return true;
        }
        let day = match day {
            Some(day) => day,
            None => return false,
        };
        match self {
            DateRange::All => true,
            DateRange::Today => day == today,
            DateRange::ThisWeek => {
                let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
                day >= week_start
            }
            DateRange::ThisMonth => day.month() == today.month() && day.year() == today.year(),
            DateRange::LastMonth => {
                let (year, month) = match today.month() {
                    1 => (today.year() - 1, 12),
                    m => (today.year(), m - 1),
                };
                day.month() == month && day.year() == year
            }
        }
    }
}

/// Capacity bucket a field's max-dogs value is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DogsRange {
    #[default]
    All,
    OneToFive,
    SixPlus,
}

impl DogsRange {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "all" => Some(DogsRange::All),
            "1-5" => Some(DogsRange::OneToFive),
            "6+" => Some(DogsRange::SixPlus),
            _ => None,
        }
    }

    pub fn contains(&self, max_dogs: Option<u32>) -> bool {
        let max_dogs = max_dogs.unwrap_or(DEFAULT_MAX_DOGS);
        match self {
            DogsRange::All => true,
            DogsRange::OneToFive => (1..=5).contains(&max_dogs),
            DogsRange::SixPlus => max_dogs >= 6,
        }
    }
}

/// A set of predicates over one record kind.
pub trait RecordFilter {
    type Record;

    /// Whether any predicate is constraining the result set.
    fn is_active(&self) -> bool;

    /// Tests one record against every active predicate.
    fn matches(&self, record: &Self::Record, today: NaiveDate) -> bool;
}

/// Applies a filter to a collection, preserving input order.
pub fn filter_records<F>(records: &[F::Record], filter: &F, today: NaiveDate) -> Vec<F::Record>
where
    F: RecordFilter,
    F::Record: Clone,
{
    records.iter().filter(|record| filter.matches(record, today)).cloned().collect()
}

/// Filters applicable to booking listings.
#[derive(Debug, Clone, Default)]
pub struct BookingFilters {
    pub search: String,
    pub status: Option<String>,
    pub date_range: DateRange,
}

impl BookingFilters {
    /// Restores every predicate to its neutral default ("Clear All").
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl RecordFilter for BookingFilters {
    type Record = Booking;

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_some() || self.date_range != DateRange::All
    }

    fn matches(&self, booking: &Booking, today: NaiveDate) -> bool {
        if !search_matches(&self.search, &booking.search_haystack()) {
            return false;
        }
        if let Some(status) = &self.status {
            if !status_matches(&booking.status, status) {
                return false;
            }
        }
        self.date_range.contains(booking.day(), today)
    }
}

/// Filters applicable to field listings.
#[derive(Debug, Clone, Default)]
pub struct FieldFilters {
    pub search: String,
    pub status: Option<String>,
    pub max_dogs: DogsRange,
    pub location: String,
}

impl FieldFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl RecordFilter for FieldFilters {
    type Record = Field;

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.status.is_some()
            || self.max_dogs != DogsRange::All
            || !self.location.trim().is_empty()
    }

    fn matches(&self, field: &Field, _today: NaiveDate) -> bool {
        if !search_matches(&self.search, &field.search_haystack()) {
            return false;
        }
        if let Some(status) = &self.status {
            if !status_matches(&field.status, status) {
                return false;
            }
        }
        if !self.max_dogs.contains(field.max_dogs) {
            return false;
        }
        let location = self.location.trim();
        if !location.is_empty() {
            return match &field.city {
                Some(city) => city.to_lowercase().contains(&location.to_lowercase()),
                None => false,
            };
        }
        true
    }
}

/// Filters applicable to user listings.
#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    pub search: String,
    pub role: Option<String>,
    pub status: Option<String>,
    pub joined: DateRange,
}

impl UserFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl RecordFilter for UserFilters {
    type Record = User;

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.role.is_some() || self.status.is_some() || self.joined != DateRange::All
    }

    fn matches(&self, user: &User, today: NaiveDate) -> bool {
        if !search_matches(&self.search, &user.search_haystack()) {
            return false;
        }
        if let Some(role) = &self.role {
            if !status_matches(&user.role, role) {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if !status_matches(&user.status, status) {
                return false;
            }
        }
        self.joined.contains(user.day(), today)
    }
}

/// Filters applicable to claim listings.
#[derive(Debug, Clone, Default)]
pub struct ClaimFilters {
    pub search: String,
    pub status: Option<String>,
    pub date_range: DateRange,
}

impl ClaimFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl RecordFilter for ClaimFilters {
    type Record = Claim;

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_some() || self.date_range != DateRange::All
    }

    fn matches(&self, claim: &Claim, today: NaiveDate) -> bool {
        if !search_matches(&self.search, &claim.search_haystack()) {
            return false;
        }
        if let Some(status) = &self.status {
            if !status_matches(&claim.status, status) {
                return false;
            }
        }
        self.date_range.contains(claim.day(), today)
    }
}

/// Filters applicable to payment listings.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilters {
    pub search: String,
    pub status: Option<String>,
    pub date_range: DateRange,
}

impl PaymentFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl RecordFilter for PaymentFilters {
    type Record = Payment;

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.status.is_some() || self.date_range != DateRange::All
    }

    fn matches(&self, payment: &Payment, today: NaiveDate) -> bool {
        if !search_matches(&self.search, &payment.search_haystack()) {
            return false;
        }
        if let Some(status) = &self.status {
            if !status_matches(&payment.status, status) {
                return false;
            }
        }
        self.date_range.contains(payment.day(), today)
    }
}

/// Filters applicable to review listings.
#[derive(Debug, Clone, Default)]
pub struct ReviewFilters {
    pub search: String,
    pub date_range: DateRange,
}

impl ReviewFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl RecordFilter for ReviewFilters {
    type Record = Review;

    fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || self.date_range != DateRange::All
    }

    fn matches(&self, review: &Review, today: NaiveDate) -> bool {
        if !search_matches(&self.search, &review.search_haystack()) {
            return false;
        }
        self.date_range.contains(review.day(), today)
    }
}
