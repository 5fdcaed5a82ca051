//! URL mapping entity, the only persisted record.

use chrono::{DateTime, Utc};

/// A short code bound to its original long URL.
///
/// Mappings are append-only: once stored, neither the code nor the URL
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    /// Surrogate key assigned by the store, never reused.
    pub id: i64,
    pub short_code: String,
    /// Stored exactly as submitted.
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewUrlMapping {
    /// Attaches the store-assigned id, producing the persisted form.
    pub fn with_id(self, id: i64) -> UrlMapping {
        UrlMapping::new(id, self.short_code, self.long_url, self.created_at)
    }
}
