/// Cleaning log records
///
/// One record per cleaner-services-machine event. Records denormalize the
/// cleaner name, machine name, and payment rate at the time of the
/// cleaning; these snapshots preserve historical truth and are never
/// re-synced to live profiles. Records are destroyed only by the
/// archive-and-reset workflow.
pub mod models;
pub mod repository;
pub mod service;

pub use models::{Cleaning, CleaningData, CleaningFilter};
