use crate::features::auth::models::Role;
use serde::{Deserialize, Serialize};

/// Cleaner (user) profile data model
///
/// `payment_rate` is the cleaner's own SEK-per-cleaning rate; when absent
/// the global default applies.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CleanerProfile {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: String,
    pub created_by: Option<String>,
    pub assigned_machine_id: Option<String>,
    pub payment_rate: Option<f64>,
}

/// Profile creation DTO (any role)
#[derive(Debug, Deserialize)]
pub struct CreateProfileData {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_by: Option<String>,
    pub assigned_machine_id: Option<String>,
    pub payment_rate: Option<f64>,
}

/// Cleaner creation DTO used by the admin flow
///
/// The account itself is created by the external identity provider; the
/// caller passes the resulting uid alongside this data.
#[derive(Debug, Deserialize)]
pub struct CreateCleanerData {
    pub name: String,
    pub email: String,
    pub assigned_machine_id: Option<String>,
    pub payment_rate: f64,
}
