use crate::features::archive::models::ArchiveEntry;
use crate::features::archive::repository;
use crate::features::cleanings::models::CleaningFilter;
use crate::features::cleanings::repository as cleaning_repository;
use crate::features::notifications::dispatcher::EmailDispatcher;
use crate::features::notifications::models::NotificationStatus;
use crate::shared::errors::AppResult;
use crate::shared::response::ApiResponse;
use crate::DEFAULT_PAYMENT_RATE;
use chrono::Utc;
use rusqlite::{params, Connection};
use serde::Serialize;
use uuid::Uuid;

/// Result of a processed payment, with its notification outcome
#[derive(Debug, Serialize)]
pub struct PaymentOutcome {
    pub entry: ArchiveEntry,
    pub notification: NotificationStatus,
}

/// Archive the outstanding cleanings and clear them from the active log
///
/// Steps, inside one transaction:
/// 1. snapshot the cleaning records, scoped to `machine_id` when given
///    (records without a machine id are excluded by a machine scope);
/// 2. zero matches: a failed response with no side effects;
/// 3. total = Σ of each record's own rate, else `rate_per_cleaning`,
///    else the global default;
/// 4. persist one archive entry embedding the full snapshot;
/// 5. delete exactly the snapped records.
///
/// An empty payer name is a validation outcome reported through the
/// response, like every other pre-write validation. The archive write
/// commits together with the deletions or not at all, so a failure can
/// never leave records deleted-but-not-archived, nor the same records
/// live after they were archived.
///
/// # Arguments
/// * `conn` - database connection
/// * `paid_by` - payer display name; any non-empty string is accepted
/// * `rate_per_cleaning` - fallback rate for records without their own
/// * `machine_id` - optional machine scope
///
/// # Returns
/// Response carrying the created archive entry; a failed response when
/// the payer name is empty or nothing was outstanding
pub fn archive_and_reset(
    conn: &mut Connection,
    paid_by: &str,
    rate_per_cleaning: Option<f64>,
    machine_id: Option<&str>,
) -> AppResult<ApiResponse<ArchiveEntry>> {
    if paid_by.trim().is_empty() {
        return Ok(ApiResponse::failure("Payer name must not be empty"));
    }

    let tx = conn.transaction()?;

    let filter = CleaningFilter {
        machine_id: machine_id.map(str::to_string),
        ..Default::default()
    };
    let logs = cleaning_repository::get_all(&tx, &filter)?;

    if logs.is_empty() {
        return Ok(ApiResponse::failure("No cleanings to archive"));
    }

    let total_amount: f64 = logs
        .iter()
        .map(|log| {
            log.payment_rate
                .or(rate_per_cleaning)
                .unwrap_or(DEFAULT_PAYMENT_RATE)
        })
        .sum();

    let entry = ArchiveEntry {
        id: Uuid::new_v4().to_string(),
        paid_by: paid_by.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        logs,
        total_amount,
        machine_id: machine_id.map(str::to_string),
    };

    // Archive first, then delete the snapped records
    repository::add_entry(&tx, &entry)?;
    for log in &entry.logs {
        tx.execute("DELETE FROM cleanings WHERE id = ?1", params![log.id])?;
    }

    tx.commit()?;

    log::info!(
        "archived {} cleanings, total {} SEK, paid by {paid_by}",
        entry.logs.len(),
        entry.total_amount
    );

    Ok(ApiResponse::ok("Cleanings archived and reset", entry))
}

/// Process a payment: archive-and-reset, then notify
///
/// The notification fires only after the reset committed, and its failure
/// never affects the archived data.
pub async fn process_payment(
    conn: &mut Connection,
    dispatcher: &EmailDispatcher,
    paid_by: &str,
    rate_per_cleaning: Option<f64>,
    machine_id: Option<&str>,
) -> AppResult<ApiResponse<PaymentOutcome>> {
    let response = archive_and_reset(conn, paid_by, rate_per_cleaning, machine_id)?;
    let entry = match response.data {
        Some(entry) => entry,
        None => return Ok(ApiResponse::failure(response.message)),
    };

    let mut cleaners: Vec<String> = Vec::new();
    for log in &entry.logs {
        if !cleaners.contains(&log.cleaner_name) {
            cleaners.push(log.cleaner_name.clone());
        }
    }

    let notification = dispatcher
        .notify_payment_processed(paid_by, entry.total_amount, entry.logs.len(), &cleaners)
        .await;

    Ok(ApiResponse::ok(
        response.message,
        PaymentOutcome {
            entry,
            notification,
        },
    ))
}
