/// Cleaner profile management
///
/// Profiles are keyed by the external identity provider's uid. Machine
/// assignment is validated against an existing, active machine at
/// assignment time only; a machine deactivated afterwards does not
/// invalidate the reference.
pub mod models;
pub mod repository;
pub mod service;

pub use models::{CleanerProfile, CreateCleanerData, CreateProfileData};
