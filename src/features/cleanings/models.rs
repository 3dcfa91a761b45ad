use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cleaning log record
///
/// `machine` holds the legacy display name; newer records also carry
/// `machine_id`/`machine_name`. `payment_rate` is the rate captured at the
/// time of the cleaning and never changes afterwards.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cleaning {
    pub id: String,
    pub cleaner_id: String,
    pub cleaner_name: String,
    pub machine: String,
    pub machine_id: Option<String>,
    pub machine_name: Option<String>,
    pub payment_rate: Option<f64>,
    pub timestamp: String,
}

impl Cleaning {
    /// Parsed record timestamp, when the stored string is valid RFC 3339
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Cleaning creation DTO; the store assigns id and timestamp
#[derive(Debug, Clone, Deserialize)]
pub struct CleaningData {
    pub cleaner_id: String,
    pub cleaner_name: String,
    pub machine: String,
    pub machine_id: Option<String>,
    pub machine_name: Option<String>,
    pub payment_rate: Option<f64>,
}

/// Query filter for cleaning records
///
/// Equality filters are pushed into the store query; the date range is
/// applied after retrieval. All set fields compose with AND semantics.
#[derive(Debug, Default, Clone)]
pub struct CleaningFilter {
    pub machine_id: Option<String>,
    pub cleaner_id: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
