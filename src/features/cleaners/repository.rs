use crate::features::auth::models::Role;
use crate::features::cleaners::models::{CleanerProfile, CreateProfileData};
use crate::shared::errors::{AppError, AppResult};
use chrono::Utc;
use rusqlite::{params, Connection, Row};

fn profile_from_row(row: &Row) -> rusqlite::Result<CleanerProfile> {
    let role_str: String = row.get(3)?;
    Ok(CleanerProfile {
        uid: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        // Unknown role strings degrade to Cleaner rather than failing the row
        role: Role::parse(&role_str).unwrap_or(Role::Cleaner),
        is_active: row.get(4)?,
        created_at: row.get(5)?,
        created_by: row.get(6)?,
        assigned_machine_id: row.get(7)?,
        payment_rate: row.get(8)?,
    })
}

const PROFILE_COLUMNS: &str =
    "uid, name, email, role, is_active, created_at, created_by, assigned_machine_id, payment_rate";

/// Create a user profile
///
/// # Arguments
/// * `conn` - database connection
/// * `uid` - id assigned by the external identity provider
/// * `data` - profile creation DTO
pub fn create_profile(conn: &Connection, uid: &str, data: CreateProfileData) -> AppResult<()> {
    let now = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO users (uid, name, email, role, is_active, created_at, created_by,
                            assigned_machine_id, payment_rate)
         VALUES (?1, ?2, ?3, ?4, 1, ?5, ?6, ?7, ?8)",
        params![
            uid,
            data.name,
            data.email,
            data.role.as_str(),
            now,
            data.created_by,
            data.assigned_machine_id,
            data.payment_rate,
        ],
    )?;

    Ok(())
}

/// Fetch a profile by uid
///
/// # Returns
/// The profile, or `None` when it does not exist
pub fn get_profile(conn: &Connection, uid: &str) -> AppResult<Option<CleanerProfile>> {
    match conn.query_row(
        &format!("SELECT {PROFILE_COLUMNS} FROM users WHERE uid = ?1"),
        params![uid],
        profile_from_row,
    ) {
        Ok(profile) => Ok(Some(profile)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Fetch a profile by email
pub fn get_by_email(conn: &Connection, email: &str) -> AppResult<Option<CleanerProfile>> {
    match conn.query_row(
        &format!("SELECT {PROFILE_COLUMNS} FROM users WHERE email = ?1"),
        params![email],
        profile_from_row,
    ) {
        Ok(profile) => Ok(Some(profile)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List every profile with the cleaner role
pub fn get_all_cleaners(conn: &Connection) -> AppResult<Vec<CleanerProfile>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PROFILE_COLUMNS} FROM users WHERE role = 'cleaner'"
    ))?;

    let cleaners = stmt.query_map([], profile_from_row)?;

    cleaners.collect::<Result<Vec<_>, _>>().map_err(|e| e.into())
}

/// List cleaners assigned to one machine
pub fn get_by_machine(conn: &Connection, machine_id: &str) -> AppResult<Vec<CleanerProfile>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PROFILE_COLUMNS} FROM users
         WHERE role = 'cleaner' AND assigned_machine_id = ?1"
    ))?;

    let cleaners = stmt.query_map(params![machine_id], profile_from_row)?;

    cleaners.collect::<Result<Vec<_>, _>>().map_err(|e| e.into())
}

/// Flip a cleaner's active flag
pub fn update_status(conn: &Connection, uid: &str, is_active: bool) -> AppResult<()> {
    let affected = conn.execute(
        "UPDATE users SET is_active = ?1 WHERE uid = ?2",
        params![is_active, uid],
    )?;

    if affected == 0 {
        return Err(AppError::not_found("cleaner"));
    }

    Ok(())
}

/// Set the assigned machine (and optionally the rate) without validation
///
/// Service-level callers validate the machine first; see
/// `service::update_machine_assignment`.
pub fn update_machine_assignment(
    conn: &Connection,
    uid: &str,
    assigned_machine_id: Option<&str>,
    payment_rate: Option<f64>,
) -> AppResult<()> {
    let affected = if let Some(rate) = payment_rate {
        conn.execute(
            "UPDATE users SET assigned_machine_id = ?1, payment_rate = ?2 WHERE uid = ?3",
            params![assigned_machine_id, rate, uid],
        )?
    } else {
        conn.execute(
            "UPDATE users SET assigned_machine_id = ?1 WHERE uid = ?2",
            params![assigned_machine_id, uid],
        )?
    };

    if affected == 0 {
        return Err(AppError::not_found("cleaner"));
    }

    Ok(())
}

/// Overwrite a cleaner's payment rate
pub fn update_payment_rate(conn: &Connection, uid: &str, payment_rate: f64) -> AppResult<()> {
    let affected = conn.execute(
        "UPDATE users SET payment_rate = ?1 WHERE uid = ?2",
        params![payment_rate, uid],
    )?;

    if affected == 0 {
        return Err(AppError::not_found("cleaner"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::connection::create_tables;

    fn create_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    fn cleaner_data(name: &str, email: &str) -> CreateProfileData {
        CreateProfileData {
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Cleaner,
            created_by: Some("admin-uid".to_string()),
            assigned_machine_id: None,
            payment_rate: None,
        }
    }

    #[test]
    fn test_create_and_fetch_profile() {
        let conn = create_test_db();

        create_profile(&conn, "uid-1", cleaner_data("Anna", "anna@example.se")).unwrap();

        let profile = get_profile(&conn, "uid-1").unwrap().unwrap();
        assert_eq!(profile.name, "Anna");
        assert_eq!(profile.role, Role::Cleaner);
        assert!(profile.is_active);
        assert!(profile.payment_rate.is_none());

        let by_email = get_by_email(&conn, "anna@example.se").unwrap().unwrap();
        assert_eq!(by_email.uid, "uid-1");

        assert!(get_profile(&conn, "uid-missing").unwrap().is_none());
    }

    #[test]
    fn test_get_all_cleaners_excludes_admins() {
        let conn = create_test_db();

        create_profile(&conn, "uid-1", cleaner_data("Anna", "anna@example.se")).unwrap();
        create_profile(
            &conn,
            "uid-2",
            CreateProfileData {
                name: "Boss".to_string(),
                email: "boss@example.se".to_string(),
                role: Role::Admin,
                created_by: None,
                assigned_machine_id: None,
                payment_rate: None,
            },
        )
        .unwrap();

        let cleaners = get_all_cleaners(&conn).unwrap();
        assert_eq!(cleaners.len(), 1);
        assert_eq!(cleaners[0].uid, "uid-1");
    }

    #[test]
    fn test_get_by_machine() {
        let conn = create_test_db();

        let mut assigned = cleaner_data("Anna", "anna@example.se");
        assigned.assigned_machine_id = Some("machine-1".to_string());
        create_profile(&conn, "uid-1", assigned).unwrap();
        create_profile(&conn, "uid-2", cleaner_data("Erik", "erik@example.se")).unwrap();

        let cleaners = get_by_machine(&conn, "machine-1").unwrap();
        assert_eq!(cleaners.len(), 1);
        assert_eq!(cleaners[0].uid, "uid-1");
    }

    #[test]
    fn test_update_status_and_rate() {
        let conn = create_test_db();
        create_profile(&conn, "uid-1", cleaner_data("Anna", "anna@example.se")).unwrap();

        update_status(&conn, "uid-1", false).unwrap();
        assert!(!get_profile(&conn, "uid-1").unwrap().unwrap().is_active);

        update_payment_rate(&conn, "uid-1", 150.0).unwrap();
        assert_eq!(
            get_profile(&conn, "uid-1").unwrap().unwrap().payment_rate,
            Some(150.0)
        );

        assert!(matches!(
            update_status(&conn, "uid-missing", true),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_assignment_keeps_rate_when_absent() {
        let conn = create_test_db();
        let mut data = cleaner_data("Anna", "anna@example.se");
        data.payment_rate = Some(120.0);
        create_profile(&conn, "uid-1", data).unwrap();

        update_machine_assignment(&conn, "uid-1", Some("machine-2"), None).unwrap();

        let profile = get_profile(&conn, "uid-1").unwrap().unwrap();
        assert_eq!(profile.assigned_machine_id.as_deref(), Some("machine-2"));
        assert_eq!(profile.payment_rate, Some(120.0));

        // Clearing the assignment leaves the rate in place
        update_machine_assignment(&conn, "uid-1", None, None).unwrap();
        let profile = get_profile(&conn, "uid-1").unwrap().unwrap();
        assert_eq!(profile.assigned_machine_id, None);
        assert_eq!(profile.payment_rate, Some(120.0));
    }

    #[test]
    fn test_unknown_role_degrades_to_cleaner() {
        let conn = create_test_db();
        conn.execute(
            "INSERT INTO users (uid, name, email, role, is_active, created_at)
             VALUES ('uid-x', 'X', 'x@example.se', 'janitor', 1, '2024-01-01T00:00:00+01:00')",
            [],
        )
        .unwrap();

        let profile = get_profile(&conn, "uid-x").unwrap().unwrap();
        assert_eq!(profile.role, Role::Cleaner);
    }
}
