use crate::features::archive::models::ArchiveEntry;
use crate::shared::errors::AppResult;
use rusqlite::{params, Connection};

/// Insert an archive entry
///
/// Insert-only; entries are never updated or deleted. The `logs` snapshot
/// is serialized to a JSON column.
///
/// # Arguments
/// * `conn` - database connection (or an open transaction)
/// * `entry` - the entry to persist
pub fn add_entry(conn: &Connection, entry: &ArchiveEntry) -> AppResult<()> {
    let logs_json = serde_json::to_string(&entry.logs)?;

    conn.execute(
        "INSERT INTO payment_history (id, paid_by, timestamp, logs, total_amount, machine_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.id,
            entry.paid_by,
            entry.timestamp,
            logs_json,
            entry.total_amount,
            entry.machine_id,
        ],
    )?;

    Ok(())
}

/// List archive entries, newest first, optionally scoped to one machine
///
/// # Arguments
/// * `conn` - database connection
/// * `machine_id` - scope filter, when set
pub fn get_entries(conn: &Connection, machine_id: Option<&str>) -> AppResult<Vec<ArchiveEntry>> {
    let mut query = String::from(
        "SELECT id, paid_by, timestamp, logs, total_amount, machine_id
         FROM payment_history",
    );

    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(machine_id) = machine_id {
        query.push_str(" WHERE machine_id = ?");
        params.push(Box::new(machine_id.to_string()));
    }
    query.push_str(" ORDER BY datetime(timestamp) DESC");

    let mut stmt = conn.prepare(&query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let rows = stmt.query_map(param_refs.as_slice(), |row| {
        let logs_json: String = row.get(3)?;
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            logs_json,
            row.get::<_, f64>(4)?,
            row.get::<_, Option<String>>(5)?,
        ))
    })?;

    let mut entries = Vec::new();
    for row in rows {
        let (id, paid_by, timestamp, logs_json, total_amount, machine_id) = row?;
        entries.push(ArchiveEntry {
            id,
            paid_by,
            timestamp,
            logs: serde_json::from_str(&logs_json)?,
            total_amount,
            machine_id,
        });
    }

    Ok(entries)
}
