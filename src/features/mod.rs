/// Feature modules
///
/// Each feature module is a self-contained unit holding the models,
/// repository functions, and services for one part of the system.
pub mod archive;
pub mod auth;
pub mod cleaners;
pub mod cleanings;
pub mod machines;
pub mod notifications;
pub mod settings;
pub mod stats;
