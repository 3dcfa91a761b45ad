use crate::features::cleanings::models::{Cleaning, CleaningData, CleaningFilter};
use crate::shared::errors::AppResult;
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

fn cleaning_from_row(row: &Row) -> rusqlite::Result<Cleaning> {
    Ok(Cleaning {
        id: row.get(0)?,
        cleaner_id: row.get(1)?,
        cleaner_name: row.get(2)?,
        machine: row.get(3)?,
        machine_id: row.get(4)?,
        machine_name: row.get(5)?,
        payment_rate: row.get(6)?,
        timestamp: row.get(7)?,
    })
}

/// Insert a cleaning record
///
/// The timestamp is store-assigned, in UTC; local time is a display
/// concern. References to machines and cleaners are taken as-is; dangling
/// ids are tolerated (legacy records carry only a display name).
///
/// # Arguments
/// * `conn` - database connection
/// * `data` - cleaning creation DTO
///
/// # Returns
/// The stored record
pub fn add(conn: &Connection, data: CleaningData) -> AppResult<Cleaning> {
    let id = Uuid::new_v4().to_string();
    let timestamp = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO cleanings (id, cleaner_id, cleaner_name, machine, machine_id,
                                machine_name, payment_rate, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            data.cleaner_id,
            data.cleaner_name,
            data.machine,
            data.machine_id,
            data.machine_name,
            data.payment_rate,
            timestamp,
        ],
    )?;

    Ok(Cleaning {
        id,
        cleaner_id: data.cleaner_id,
        cleaner_name: data.cleaner_name,
        machine: data.machine,
        machine_id: data.machine_id,
        machine_name: data.machine_name,
        payment_rate: data.payment_rate,
        timestamp,
    })
}

/// List cleaning records, newest first
///
/// Equality filters on machine and cleaner are pushed into the query; the
/// date range is applied after retrieval. Records whose timestamp cannot
/// be parsed are excluded by a date-range filter (never silently matched).
///
/// # Arguments
/// * `conn` - database connection
/// * `filter` - composed query filter
pub fn get_all(conn: &Connection, filter: &CleaningFilter) -> AppResult<Vec<Cleaning>> {
    let mut query = String::from(
        "SELECT id, cleaner_id, cleaner_name, machine, machine_id, machine_name,
                payment_rate, timestamp
         FROM cleanings WHERE 1=1",
    );

    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(machine_id) = &filter.machine_id {
        query.push_str(" AND machine_id = ?");
        params.push(Box::new(machine_id.clone()));
    }

    if let Some(cleaner_id) = &filter.cleaner_id {
        query.push_str(" AND cleaner_id = ?");
        params.push(Box::new(cleaner_id.clone()));
    }

    // datetime() normalizes mixed UTC offsets in legacy rows; plain string
    // order would misorder them
    query.push_str(" ORDER BY datetime(timestamp) DESC");

    let mut stmt = conn.prepare(&query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let cleanings = stmt
        .query_map(param_refs.as_slice(), cleaning_from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    // Date range filter, applied client-side
    if filter.start_date.is_some() || filter.end_date.is_some() {
        let filtered = cleanings
            .into_iter()
            .filter(|cleaning| match cleaning.parsed_timestamp() {
                Some(ts) => {
                    if let Some(start) = filter.start_date {
                        if ts < start {
                            return false;
                        }
                    }
                    if let Some(end) = filter.end_date {
                        if ts > end {
                            return false;
                        }
                    }
                    true
                }
                None => false,
            })
            .collect();
        return Ok(filtered);
    }

    Ok(cleanings)
}

/// List cleanings for one machine
pub fn get_by_machine(conn: &Connection, machine_id: &str) -> AppResult<Vec<Cleaning>> {
    get_all(
        conn,
        &CleaningFilter {
            machine_id: Some(machine_id.to_string()),
            ..Default::default()
        },
    )
}

/// List cleanings for one cleaner
pub fn get_by_cleaner(conn: &Connection, cleaner_id: &str) -> AppResult<Vec<Cleaning>> {
    get_all(
        conn,
        &CleaningFilter {
            cleaner_id: Some(cleaner_id.to_string()),
            ..Default::default()
        },
    )
}
