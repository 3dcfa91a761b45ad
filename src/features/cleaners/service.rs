use crate::features::auth::models::Role;
use crate::features::cleaners::models::{CreateCleanerData, CreateProfileData};
use crate::features::cleaners::repository;
use crate::features::machines::repository as machine_repository;
use crate::shared::errors::AppResult;
use crate::shared::response::ApiResponse;
use rusqlite::Connection;

/// Validate a machine assignment target
///
/// The machine must exist and be active at assignment time. Returns the
/// failure response to surface, or `None` when the assignment is valid.
fn validate_machine(conn: &Connection, machine_id: &str) -> AppResult<Option<ApiResponse<String>>> {
    match machine_repository::get(conn, machine_id)? {
        None => Ok(Some(ApiResponse::failure("Selected machine does not exist"))),
        Some(machine) if !machine.is_active => Ok(Some(ApiResponse::failure(
            "Cannot assign cleaner to inactive machine",
        ))),
        Some(_) => Ok(None),
    }
}

/// Create a cleaner profile for an account the identity provider created
///
/// Validations run before any write: the assigned machine (when given)
/// must exist and be active, and the payment rate must be positive.
/// Validation failures come back as a failed response, never an error.
///
/// # Arguments
/// * `conn` - database connection
/// * `uid` - id assigned by the external identity provider
/// * `data` - cleaner creation DTO
/// * `created_by` - uid of the acting admin
///
/// # Returns
/// Response carrying the new profile's uid on success
pub fn create_cleaner(
    conn: &Connection,
    uid: &str,
    data: CreateCleanerData,
    created_by: &str,
) -> AppResult<ApiResponse<String>> {
    if let Some(machine_id) = &data.assigned_machine_id {
        if let Some(failure) = validate_machine(conn, machine_id)? {
            return Ok(failure);
        }
    }

    if data.payment_rate <= 0.0 {
        return Ok(ApiResponse::failure("Payment rate must be greater than 0"));
    }

    if repository::get_profile(conn, uid)?.is_some() {
        return Ok(ApiResponse::failure("A profile already exists for this account"));
    }

    repository::create_profile(
        conn,
        uid,
        CreateProfileData {
            name: data.name,
            email: data.email,
            role: Role::Cleaner,
            created_by: Some(created_by.to_string()),
            assigned_machine_id: data.assigned_machine_id,
            payment_rate: Some(data.payment_rate),
        },
    )?;

    log::info!("cleaner profile created: uid={uid}");

    Ok(ApiResponse::ok(
        "Cleaner created successfully",
        uid.to_string(),
    ))
}

/// Change a cleaner's machine assignment, optionally with a new rate
///
/// # Arguments
/// * `conn` - database connection
/// * `uid` - cleaner uid
/// * `assigned_machine_id` - new assignment, or `None` to clear it
/// * `payment_rate` - new rate, when changing it at the same time
pub fn update_machine_assignment(
    conn: &Connection,
    uid: &str,
    assigned_machine_id: Option<&str>,
    payment_rate: Option<f64>,
) -> AppResult<ApiResponse<String>> {
    if let Some(machine_id) = assigned_machine_id {
        if let Some(failure) = validate_machine(conn, machine_id)? {
            return Ok(failure);
        }
    }

    if let Some(rate) = payment_rate {
        if rate <= 0.0 {
            return Ok(ApiResponse::failure("Payment rate must be greater than 0"));
        }
    }

    repository::update_machine_assignment(conn, uid, assigned_machine_id, payment_rate)?;

    Ok(ApiResponse::ok(
        "Cleaner assignment updated successfully",
        uid.to_string(),
    ))
}

/// Change a cleaner's payment rate
pub fn update_payment_rate(
    conn: &Connection,
    uid: &str,
    payment_rate: f64,
) -> AppResult<ApiResponse<String>> {
    if payment_rate <= 0.0 {
        return Ok(ApiResponse::failure("Payment rate must be greater than 0"));
    }

    repository::update_payment_rate(conn, uid, payment_rate)?;

    Ok(ApiResponse::ok(
        "Payment rate updated successfully",
        uid.to_string(),
    ))
}
