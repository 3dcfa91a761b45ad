/// Payment archive
///
/// The archive-and-reset workflow is the system's only multi-step write
/// transaction: it snapshots the outstanding cleanings, writes one
/// immutable archive entry embedding the snapshot, and deletes the
/// snapped records — all inside a single database transaction.
pub mod models;
pub mod repository;
pub mod service;

pub use models::ArchiveEntry;
