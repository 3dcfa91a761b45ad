/// Statistics
///
/// Pure aggregation over machines, cleanings, and cleaner profiles already
/// fetched into memory; the engine performs no writes. The service layer
/// fetches and degrades per-cleaner failures to placeholders so a single
/// bad row never sinks the whole batch.
pub mod engine;
pub mod models;
pub mod service;

pub use models::{CleanerStats, MachineStats};
