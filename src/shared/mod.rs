/// Shared infrastructure modules
///
/// Cross-cutting concerns used by every feature module: the unified error
/// type, the structured action-result type, database access, and
/// environment configuration.
pub mod config;
pub mod database;
pub mod errors;
pub mod response;
