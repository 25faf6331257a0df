//! Typed record schemas for the backend listing endpoints.
//!
//! Every listing endpoint returns a pagination envelope wrapping one record
//! kind. Rather than passing loosely-typed JSON maps around, each kind gets
//! an explicit schema here with a declared set of searchable fields, so a
//! filter key can only ever be applied to a record kind it is meaningful for.
//!
//! Records are immutable snapshots: they are deserialized once per fetch and
//! never mutated client-side. Missing optional fields deserialize to `None`
//! and are treated as non-matching by predicates that target them.

use crate::libs::duration::compute_duration;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Pagination envelope returned by all backend list endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u64,
}

/// Embedded reference to a user (customer or field owner).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Embedded reference to a field inside a booking or claim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<PersonRef>,
}

/// A field booking made by a dog owner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    // Older backend revisions called this field "dogs".
    #[serde(default, alias = "dogs")]
    pub number_of_dogs: Option<u32>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub field: Option<FieldRef>,
    #[serde(default)]
    pub user: Option<PersonRef>,
}

impl Booking {
    /// The booking date truncated to a calendar day, when present.
    pub fn day(&self) -> Option<NaiveDate> {
        self.date.map(|d| d.date_naive())
    }

    /// Elapsed slot duration, or `"N/A"` when the times are missing or bad.
    pub fn duration(&self) -> String {
        compute_duration(self.start_time.as_deref().unwrap_or(""), self.end_time.as_deref().unwrap_or(""))
    }

    /// Fields the free-text search matches against.
    pub fn search_haystack(&self) -> Vec<&str> {
        let mut haystack = vec![self.id.as_str()];
        if let Some(field) = &self.field {
            haystack.extend(field.name.as_deref());
        }
        if let Some(user) = &self.user {
            haystack.extend(user.name.as_deref());
            haystack.extend(user.email.as_deref());
        }
        haystack
    }
}

/// A dog field listed on the marketplace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub max_dogs: Option<u32>,
    #[serde(default)]
    pub price_per_hour: Option<f64>,
    #[serde(default)]
    pub owner: Option<PersonRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Field {
    pub fn day(&self) -> Option<NaiveDate> {
        self.created_at.map(|d| d.date_naive())
    }

    pub fn search_haystack(&self) -> Vec<&str> {
        let mut haystack = vec![self.id.as_str()];
        haystack.extend(self.name.as_deref());
        if let Some(owner) = &self.owner {
            haystack.extend(owner.name.as_deref());
            haystack.extend(owner.email.as_deref());
        }
        haystack
    }
}

/// A marketplace account, either a dog owner or a field owner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn day(&self) -> Option<NaiveDate> {
        self.created_at.map(|d| d.date_naive())
    }

    pub fn search_haystack(&self) -> Vec<&str> {
        let mut haystack = vec![self.id.as_str()];
        haystack.extend(self.name.as_deref());
        haystack.extend(self.email.as_deref());
        haystack
    }
}

/// An ownership claim filed against an unclaimed field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub field: Option<FieldRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Claim {
    pub fn day(&self) -> Option<NaiveDate> {
        self.created_at.map(|d| d.date_naive())
    }

    pub fn search_haystack(&self) -> Vec<&str> {
        let mut haystack = vec![self.id.as_str()];
        haystack.extend(self.email.as_deref());
        if let Some(field) = &self.field {
            haystack.extend(field.name.as_deref());
        }
        haystack
    }
}

/// A payment captured for a booking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub user: Option<PersonRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn day(&self) -> Option<NaiveDate> {
        self.created_at.map(|d| d.date_naive())
    }

    pub fn search_haystack(&self) -> Vec<&str> {
        let mut haystack = vec![self.id.as_str()];
        haystack.extend(self.booking_id.as_deref());
        if let Some(user) = &self.user {
            haystack.extend(user.name.as_deref());
            haystack.extend(user.email.as_deref());
        }
        haystack
    }
}

/// A review left on a field by a customer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub field: Option<FieldRef>,
    #[serde(default)]
    pub user: Option<PersonRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    pub fn day(&self) -> Option<NaiveDate> {
        self.created_at.map(|d| d.date_naive())
    }

    pub fn search_haystack(&self) -> Vec<&str> {
        let mut haystack = vec![self.id.as_str()];
        haystack.extend(self.comment.as_deref());
        if let Some(field) = &self.field {
            haystack.extend(field.name.as_deref());
        }
        if let Some(user) = &self.user {
            haystack.extend(user.name.as_deref());
        }
        haystack
    }
}
