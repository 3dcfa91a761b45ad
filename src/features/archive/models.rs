use crate::features::cleanings::models::Cleaning;
use serde::{Deserialize, Serialize};

/// Immutable payment-history entry
///
/// `logs` embeds a full copy of the cleaning records archived by the
/// reset, not references; the records themselves are deleted in the same
/// transaction. `machine_id` is set only when the reset was scoped to one
/// machine. Entries are never updated or deleted.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArchiveEntry {
    pub id: String,
    pub paid_by: String,
    pub timestamp: String,
    pub logs: Vec<Cleaning>,
    pub total_amount: f64,
    pub machine_id: Option<String>,
}
