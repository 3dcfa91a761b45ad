use crate::features::cleaners::repository as cleaner_repository;
use crate::features::cleanings::models::{Cleaning, CleaningData};
use crate::features::cleanings::repository;
use crate::features::machines::repository as machine_repository;
use crate::features::notifications::dispatcher::EmailDispatcher;
use crate::features::notifications::models::NotificationStatus;
use crate::shared::errors::{AppError, AppResult};
use crate::DEFAULT_PAYMENT_RATE;
use rusqlite::Connection;
use serde::Serialize;

/// Display name used for cleanings logged without a machine assignment
const UNASSIGNED_MACHINE_NAME: &str = "Machine #1";

/// A logged cleaning together with its notification outcome
///
/// The notification is secondary: the cleaning is stored regardless of
/// whether the email went out.
#[derive(Debug, Serialize)]
pub struct LoggedCleaning {
    pub cleaning: Cleaning,
    pub notification: NotificationStatus,
}

/// A cleaner's current machine assignment as shown on their dashboard
#[derive(Debug, Clone, Serialize)]
pub struct CleanerMachineInfo {
    pub has_assignment: bool,
    pub machine_id: Option<String>,
    pub machine_name: String,
    pub machine_location: Option<String>,
    pub payment_rate: f64,
}

/// Log a cleaning for a cleaner
///
/// Looks up the cleaner's profile to snapshot their current machine and
/// rate into the record, stores the record, then fires the notification
/// email. The notification result never affects the stored cleaning.
///
/// # Arguments
/// * `conn` - database connection
/// * `dispatcher` - notification dispatcher
/// * `cleaner_id` - uid of the cleaner
/// * `cleaner_name` - display name to snapshot
pub async fn log_cleaning(
    conn: &Connection,
    dispatcher: &EmailDispatcher,
    cleaner_id: &str,
    cleaner_name: &str,
) -> AppResult<LoggedCleaning> {
    let profile = cleaner_repository::get_profile(conn, cleaner_id)?
        .ok_or_else(|| AppError::not_found("cleaner profile"))?;

    let payment_rate = profile.payment_rate.unwrap_or(DEFAULT_PAYMENT_RATE);

    let mut machine_name = UNASSIGNED_MACHINE_NAME.to_string();
    let mut machine_location = None;
    if let Some(machine_id) = &profile.assigned_machine_id {
        if let Some(machine) = machine_repository::get(conn, machine_id)? {
            machine_name = machine.name;
            machine_location = Some(machine.location);
        }
    }

    let cleaning = repository::add(
        conn,
        CleaningData {
            cleaner_id: cleaner_id.to_string(),
            cleaner_name: cleaner_name.to_string(),
            machine: machine_name.clone(),
            machine_id: profile.assigned_machine_id.clone(),
            machine_name: Some(machine_name.clone()),
            payment_rate: Some(payment_rate),
        },
    )?;

    log::info!(
        "cleaning logged: cleaner={cleaner_id} machine={machine_name} rate={payment_rate}"
    );

    let notification = dispatcher
        .notify_cleaning_logged(
            cleaner_name,
            &machine_name,
            machine_location.as_deref().unwrap_or("Unknown Location"),
            payment_rate,
        )
        .await;

    Ok(LoggedCleaning {
        cleaning,
        notification,
    })
}

/// Current machine info for a cleaner's dashboard
///
/// Reports the cleaner's *current* assignment. A stale reference (machine
/// deactivated or even deleted after assignment) is not an error; the name
/// degrades to "Unknown Machine" only when the machine row is gone.
pub fn get_cleaner_machine_info(
    conn: &Connection,
    cleaner_id: &str,
) -> AppResult<CleanerMachineInfo> {
    let profile = cleaner_repository::get_profile(conn, cleaner_id)?
        .ok_or_else(|| AppError::not_found("cleaner profile"))?;

    let machine_id = match &profile.assigned_machine_id {
        Some(id) => id.clone(),
        None => {
            return Ok(CleanerMachineInfo {
                has_assignment: false,
                machine_id: None,
                machine_name: "No machine assigned".to_string(),
                machine_location: None,
                payment_rate: DEFAULT_PAYMENT_RATE,
            });
        }
    };

    let (machine_name, machine_location) = match machine_repository::get(conn, &machine_id)? {
        Some(machine) => (machine.name, Some(machine.location)),
        None => ("Unknown Machine".to_string(), None),
    };

    Ok(CleanerMachineInfo {
        has_assignment: true,
        machine_id: Some(machine_id),
        machine_name,
        machine_location,
        payment_rate: profile.payment_rate.unwrap_or(DEFAULT_PAYMENT_RATE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::models::Role;
    use crate::features::cleaners::models::CreateProfileData;
    use crate::features::machines::models::CreateMachineData;
    use crate::features::notifications::dispatcher::EmailDispatcher;
    use crate::shared::config::environment::EmailConfig;
    use crate::shared::database::connection::create_tables;

    fn create_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    // Dispatcher pointed at a closed local port; sends fail fast and the
    // failure must stay non-fatal
    fn unreachable_dispatcher() -> EmailDispatcher {
        EmailDispatcher::with_config(EmailConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "key_test".to_string(),
            to_email: "contact@example.se".to_string(),
            endpoint: "http://127.0.0.1:1/api/v1.0/email/send".to_string(),
        })
        .unwrap()
    }

    fn create_machine(conn: &Connection) -> String {
        machine_repository::create(
            conn,
            CreateMachineData {
                name: "Uppsala #1".to_string(),
                location: "Gränby Centrum".to_string(),
                city: "Uppsala".to_string(),
            },
            "admin-uid",
        )
        .unwrap()
        .data
        .unwrap()
    }

    fn create_cleaner(conn: &Connection, machine_id: Option<String>, rate: Option<f64>) {
        cleaner_repository::create_profile(
            conn,
            "uid-1",
            CreateProfileData {
                name: "Anna".to_string(),
                email: "anna@example.se".to_string(),
                role: Role::Cleaner,
                created_by: None,
                assigned_machine_id: machine_id,
                payment_rate: rate,
            },
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_log_cleaning_snapshots_machine_and_rate() {
        let conn = create_test_db();
        let machine_id = create_machine(&conn);
        create_cleaner(&conn, Some(machine_id.clone()), Some(120.0));

        let logged = log_cleaning(&conn, &unreachable_dispatcher(), "uid-1", "Anna")
            .await
            .unwrap();

        assert_eq!(logged.cleaning.machine_id, Some(machine_id));
        assert_eq!(logged.cleaning.machine_name.as_deref(), Some("Uppsala #1"));
        assert_eq!(logged.cleaning.payment_rate, Some(120.0));
        // Email endpoint is unreachable, yet the cleaning was stored
        assert_eq!(logged.notification, NotificationStatus::Failed);
        assert_eq!(repository::get_by_cleaner(&conn, "uid-1").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_log_cleaning_without_assignment_uses_defaults() {
        let conn = create_test_db();
        create_cleaner(&conn, None, None);

        let logged = log_cleaning(&conn, &unreachable_dispatcher(), "uid-1", "Anna")
            .await
            .unwrap();

        assert_eq!(logged.cleaning.machine, UNASSIGNED_MACHINE_NAME);
        assert_eq!(logged.cleaning.machine_id, None);
        assert_eq!(logged.cleaning.payment_rate, Some(DEFAULT_PAYMENT_RATE));
    }

    #[tokio::test]
    async fn test_log_cleaning_unknown_cleaner_fails() {
        let conn = create_test_db();

        let result = log_cleaning(&conn, &unreachable_dispatcher(), "ghost", "Ghost").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(repository::get_by_cleaner(&conn, "ghost").unwrap().is_empty());
    }

    #[test]
    fn test_machine_info_with_assignment() {
        let conn = create_test_db();
        let machine_id = create_machine(&conn);
        create_cleaner(&conn, Some(machine_id.clone()), Some(140.0));

        let info = get_cleaner_machine_info(&conn, "uid-1").unwrap();
        assert!(info.has_assignment);
        assert_eq!(info.machine_id, Some(machine_id));
        assert_eq!(info.machine_name, "Uppsala #1");
        assert_eq!(info.machine_location.as_deref(), Some("Gränby Centrum"));
        assert_eq!(info.payment_rate, 140.0);
    }

    #[test]
    fn test_machine_info_survives_deactivated_machine() {
        let conn = create_test_db();
        let machine_id = create_machine(&conn);
        create_cleaner(&conn, Some(machine_id.clone()), None);

        machine_repository::toggle_status(&conn, &machine_id, false).unwrap();

        // Stale-but-present reference is not an error
        let info = get_cleaner_machine_info(&conn, "uid-1").unwrap();
        assert!(info.has_assignment);
        assert_eq!(info.machine_name, "Uppsala #1");
    }

    #[test]
    fn test_machine_info_without_assignment() {
        let conn = create_test_db();
        create_cleaner(&conn, None, None);

        let info = get_cleaner_machine_info(&conn, "uid-1").unwrap();
        assert!(!info.has_assignment);
        assert_eq!(info.machine_name, "No machine assigned");
        assert_eq!(info.payment_rate, DEFAULT_PAYMENT_RATE);
    }

    #[test]
    fn test_machine_info_dangling_reference_degrades() {
        let conn = create_test_db();
        create_cleaner(&conn, Some("deleted-machine".to_string()), None);

        let info = get_cleaner_machine_info(&conn, "uid-1").unwrap();
        assert!(info.has_assignment);
        assert_eq!(info.machine_name, "Unknown Machine");
    }
}
