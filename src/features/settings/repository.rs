use crate::shared::errors::AppResult;
use crate::shared::response::ApiResponse;
use crate::DEFAULT_PAYMENT_RATE;
use rusqlite::{params, Connection};

/// Key of the payment-rate singleton row
const PAYMENT_RATE_KEY: &str = "payment";

/// Read the global default payment rate
///
/// An uninitialized store is initialized to the default on first read, so
/// subsequent reads return the same value without re-initializing.
///
/// # Arguments
/// * `conn` - database connection
pub fn get_payment_rate(conn: &Connection) -> AppResult<f64> {
    match conn.query_row(
        "SELECT rate FROM settings WHERE key = ?1",
        params![PAYMENT_RATE_KEY],
        |row| row.get::<_, f64>(0),
    ) {
        Ok(rate) => Ok(rate),
        Err(rusqlite::Error::QueryReturnedNoRows) => {
            conn.execute(
                "INSERT INTO settings (key, rate) VALUES (?1, ?2)",
                params![PAYMENT_RATE_KEY, DEFAULT_PAYMENT_RATE],
            )?;
            log::info!("payment rate initialized to default: {DEFAULT_PAYMENT_RATE}");
            Ok(DEFAULT_PAYMENT_RATE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Overwrite the global default payment rate
///
/// A non-positive rate is a validation outcome, not an error.
///
/// # Arguments
/// * `conn` - database connection
/// * `rate` - new default rate in SEK
pub fn set_payment_rate(conn: &Connection, rate: f64) -> AppResult<ApiResponse> {
    if rate <= 0.0 {
        return Ok(ApiResponse::failure("Payment rate must be greater than 0"));
    }

    conn.execute(
        "INSERT OR REPLACE INTO settings (key, rate) VALUES (?1, ?2)",
        params![PAYMENT_RATE_KEY, rate],
    )?;

    Ok(ApiResponse::ok_empty("Payment rate updated successfully"))
}
