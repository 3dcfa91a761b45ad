/// Global settings
///
/// A single settings record holds the default payment rate, used only as
/// the last fallback when neither a cleaning record nor a cleaner profile
/// carries its own rate.
pub mod repository;
