use crate::features::machines::models::{CreateMachineData, Machine, UpdateMachineData};
use crate::shared::errors::AppResult;
use crate::shared::response::ApiResponse;
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

fn machine_from_row(row: &Row) -> rusqlite::Result<Machine> {
    Ok(Machine {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        city: row.get(3)?,
        is_active: row.get(4)?,
        created_at: row.get(5)?,
        created_by: row.get(6)?,
    })
}

/// Create a machine
///
/// The name must be unique (exact, case-sensitive match). A duplicate is a
/// validation outcome reported through the response, never an error.
///
/// # Arguments
/// * `conn` - database connection
/// * `data` - machine creation DTO
/// * `created_by` - uid of the acting admin
///
/// # Returns
/// Response carrying the new machine id on success
pub fn create(
    conn: &Connection,
    data: CreateMachineData,
    created_by: &str,
) -> AppResult<ApiResponse<String>> {
    let existing: i64 = conn.query_row(
        "SELECT COUNT(*) FROM machines WHERE name = ?1",
        params![data.name],
        |row| row.get(0),
    )?;

    if existing > 0 {
        return Ok(ApiResponse::failure("Machine with this name already exists"));
    }

    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO machines (id, name, location, city, is_active, created_at, created_by)
         VALUES (?1, ?2, ?3, ?4, 1, ?5, ?6)",
        params![id, data.name, data.location, data.city, now, created_by],
    )?;

    Ok(ApiResponse::ok("Machine created successfully", id))
}

/// List all machines, newest first
///
/// # Arguments
/// * `conn` - database connection
pub fn get_all(conn: &Connection) -> AppResult<Vec<Machine>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, location, city, is_active, created_at, created_by
         FROM machines ORDER BY datetime(created_at) DESC",
    )?;

    let machines = stmt.query_map([], machine_from_row)?;

    machines
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.into())
}

/// Fetch a machine by id
///
/// # Arguments
/// * `conn` - database connection
/// * `machine_id` - machine id
///
/// # Returns
/// The machine, or `None` when it does not exist
pub fn get(conn: &Connection, machine_id: &str) -> AppResult<Option<Machine>> {
    match conn.query_row(
        "SELECT id, name, location, city, is_active, created_at, created_by
         FROM machines WHERE id = ?1",
        params![machine_id],
        machine_from_row,
    ) {
        Ok(machine) => Ok(Some(machine)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Flip a machine's active flag
///
/// Unconditional; does not cascade to cleaners assigned to the machine.
///
/// # Arguments
/// * `conn` - database connection
/// * `machine_id` - machine id
/// * `is_active` - new flag value
pub fn toggle_status(
    conn: &Connection,
    machine_id: &str,
    is_active: bool,
) -> AppResult<ApiResponse> {
    conn.execute(
        "UPDATE machines SET is_active = ?1 WHERE id = ?2",
        params![is_active, machine_id],
    )?;

    let verb = if is_active { "activated" } else { "deactivated" };
    Ok(ApiResponse::ok_empty(format!(
        "Machine {verb} successfully"
    )))
}

/// Update a machine (partial merge)
///
/// # Arguments
/// * `conn` - database connection
/// * `machine_id` - machine id
/// * `updates` - fields to change; absent fields keep their value
pub fn update(
    conn: &Connection,
    machine_id: &str,
    updates: UpdateMachineData,
) -> AppResult<ApiResponse> {
    let existing = match get(conn, machine_id)? {
        Some(machine) => machine,
        None => return Ok(ApiResponse::failure("Machine does not exist")),
    };

    let name = updates.name.unwrap_or(existing.name);
    let location = updates.location.unwrap_or(existing.location);
    let city = updates.city.unwrap_or(existing.city);

    conn.execute(
        "UPDATE machines SET name = ?1, location = ?2, city = ?3 WHERE id = ?4",
        params![name, location, city, machine_id],
    )?;

    Ok(ApiResponse::ok_empty("Machine updated successfully"))
}
