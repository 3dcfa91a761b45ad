use serde::{Deserialize, Serialize};

/// Structured outcome of a user-initiated action
///
/// Validation failures (duplicate machine name, non-positive payment rate,
/// inactive machine assignment) are reported through this type rather than
/// through `AppError`, so callers always receive exactly one terminal
/// message per action. Store and network failures still surface as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = ()> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful outcome carrying `data`
    pub fn ok<S: Into<String>>(message: S, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed outcome; `data` is always absent
    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful outcome with no payload
    pub fn ok_empty<S: Into<String>>(message: S) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }
}
