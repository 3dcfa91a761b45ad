use serde::{Deserialize, Serialize};

/// Outcome of a notification attempt
///
/// Surfaced to the user as a secondary, non-blocking message alongside the
/// result of the triggering action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Sent,
    Failed,
}
