use serde::{Deserialize, Serialize};

/// Aggregated statistics for one machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineStats {
    pub machine_id: String,
    pub machine_name: String,
    pub total_cleanings: usize,
    pub total_earnings: f64,
    /// Timestamp of the most recent cleaning, absent when none exist
    pub last_cleaning: Option<String>,
    /// De-duplicated ids of cleaners who have serviced this machine
    pub assigned_cleaners: Vec<String>,
}

/// Aggregated statistics for one cleaner
///
/// `machine_name` reflects the cleaner's *current* assignment, not the
/// historical machine references on their cleanings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerStats {
    pub cleaner_id: String,
    pub cleaner_name: String,
    pub machine_id: Option<String>,
    pub machine_name: String,
    pub total_cleanings: usize,
    pub total_earnings: f64,
    pub payment_rate: f64,
}
