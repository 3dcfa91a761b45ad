/// Machine management
///
/// Machines are created by privileged admins, soft-deactivated rather
/// than deleted, and referenced by cleaner profiles and cleaning records.
pub mod models;
pub mod repository;

pub use models::{CreateMachineData, Machine, UpdateMachineData};
