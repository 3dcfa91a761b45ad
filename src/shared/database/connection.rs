use crate::shared::errors::AppResult;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Initialize the database connection from the environment
///
/// # Returns
/// An open connection with all tables created, or an error
///
/// # Processing
/// 1. Resolve the database file path (`CLEANTRACK_DB_PATH` or a default
///    name in the working directory)
/// 2. Open the connection
/// 3. Create missing tables
pub fn initialize_database() -> AppResult<Connection> {
    let database_path = get_database_path();
    open_database(&database_path)
}

/// Open a database at an explicit path and create missing tables
///
/// # Arguments
/// * `path` - database file path
pub fn open_database(path: &Path) -> AppResult<Connection> {
    let conn = Connection::open(path)?;
    create_tables(&conn)?;

    log::info!("database initialized: {:?}", path);

    Ok(conn)
}

/// Resolve the database file path
///
/// `CLEANTRACK_DB_PATH` wins when set; otherwise an environment-dependent
/// file name in the current working directory.
pub fn get_database_path() -> PathBuf {
    match std::env::var("CLEANTRACK_DB_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from(get_database_filename()),
    }
}

/// Environment-dependent database file name
///
/// # File name rules
/// - development: "dev_cleantrack.db"
/// - production: "cleantrack.db"
fn get_database_filename() -> &'static str {
    if is_production_environment() {
        "cleantrack.db"
    } else {
        "dev_cleantrack.db"
    }
}

/// Whether we are running in a production environment
///
/// # Decision logic
/// 1. Runtime environment variable `ENVIRONMENT`
/// 2. Fallback: release builds count as production
fn is_production_environment() -> bool {
    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        return env_var == "production";
    }

    !cfg!(debug_assertions)
}

/// Create the application tables if they do not exist
///
/// Five logical collections: machines, users (cleaner profiles), cleanings,
/// payment_history (archive entries) and the settings singleton. Document
/// ids are caller-generated UUID strings; archive `logs` snapshots are
/// stored as a JSON column.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS machines (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            location TEXT NOT NULL,
            city TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            created_by TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            uid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            role TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            created_by TEXT,
            assigned_machine_id TEXT,
            payment_rate REAL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS cleanings (
            id TEXT PRIMARY KEY,
            cleaner_id TEXT NOT NULL,
            cleaner_name TEXT NOT NULL,
            machine TEXT NOT NULL,
            machine_id TEXT,
            machine_name TEXT,
            payment_rate REAL,
            timestamp TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS payment_history (
            id TEXT PRIMARY KEY,
            paid_by TEXT NOT NULL,
            timestamp TEXT NOT NULL,
            logs TEXT NOT NULL,
            total_amount REAL NOT NULL,
            machine_id TEXT
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            rate REAL NOT NULL
        )",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();

        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table'
                 AND name IN ('machines', 'users', 'cleanings', 'payment_history', 'settings')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 5);
    }

    #[test]
    fn test_open_database_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_cleantrack.db");

        let conn = open_database(&path).unwrap();
        drop(conn);

        assert!(path.exists());

        // Reopening an existing file must succeed as well
        let conn = open_database(&path).unwrap();
        let table_count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='cleanings'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 1);
    }
}
