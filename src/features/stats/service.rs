use crate::features::cleaners::models::CleanerProfile;
use crate::features::cleaners::repository as cleaner_repository;
use crate::features::cleanings::models::CleaningFilter;
use crate::features::cleanings::repository as cleaning_repository;
use crate::features::machines::repository as machine_repository;
use crate::features::stats::engine;
use crate::features::stats::models::{CleanerStats, MachineStats};
use crate::shared::errors::AppResult;
use crate::DEFAULT_PAYMENT_RATE;
use rusqlite::Connection;

/// Fetch and compute per-machine statistics for the admin dashboard
pub fn get_machine_stats(conn: &Connection) -> AppResult<Vec<MachineStats>> {
    let machines = machine_repository::get_all(conn)?;
    let cleanings = cleaning_repository::get_all(conn, &CleaningFilter::default())?;

    Ok(engine::compute_machine_stats(&machines, &cleanings))
}

/// Fetch and compute statistics for one cleaner
///
/// # Returns
/// The stats, or `None` when no profile exists for the uid
pub fn get_cleaner_stats(conn: &Connection, cleaner_id: &str) -> AppResult<Option<CleanerStats>> {
    let cleaner = match cleaner_repository::get_profile(conn, cleaner_id)? {
        Some(cleaner) => cleaner,
        None => return Ok(None),
    };

    let cleanings = cleaning_repository::get_by_cleaner(conn, cleaner_id)?;
    let machines = machine_repository::get_all(conn)?;

    Ok(Some(engine::compute_cleaner_stats(
        &cleaner, &cleanings, &machines,
    )))
}

/// Zeroed placeholder used when one cleaner's stats cannot be computed
fn placeholder_stats(cleaner: &CleanerProfile) -> CleanerStats {
    CleanerStats {
        cleaner_id: cleaner.uid.clone(),
        cleaner_name: cleaner.name.clone(),
        machine_id: cleaner.assigned_machine_id.clone(),
        machine_name: if cleaner.assigned_machine_id.is_some() {
            "Unknown Machine".to_string()
        } else {
            "No Machine Assigned".to_string()
        },
        total_cleanings: 0,
        total_earnings: 0.0,
        payment_rate: cleaner.payment_rate.unwrap_or(DEFAULT_PAYMENT_RATE),
    }
}

/// Statistics for every cleaner
///
/// A failure while computing one cleaner's stats degrades that cleaner to
/// a zeroed placeholder; the batch always returns partial results rather
/// than an aggregate failure.
pub fn get_all_cleaner_stats(conn: &Connection) -> AppResult<Vec<CleanerStats>> {
    let cleaners = cleaner_repository::get_all_cleaners(conn)?;
    let machines = machine_repository::get_all(conn)?;

    let stats = cleaners
        .iter()
        .map(|cleaner| {
            match cleaning_repository::get_by_cleaner(conn, &cleaner.uid) {
                Ok(cleanings) => engine::compute_cleaner_stats(cleaner, &cleanings, &machines),
                Err(e) => {
                    log::warn!("stats lookup failed for cleaner {}: {e}", cleaner.uid);
                    placeholder_stats(cleaner)
                }
            }
        })
        .collect();

    Ok(stats)
}
