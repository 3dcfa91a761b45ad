// Feature-oriented module structure
pub mod features;
pub mod shared;

pub use shared::errors::{AppError, AppResult};
pub use shared::response::ApiResponse;

/// Default payment rate in SEK, used as the last fallback whenever a
/// cleaning record, a cleaner profile, and the settings store all lack
/// an explicit rate.
pub const DEFAULT_PAYMENT_RATE: f64 = 100.0;
