use crate::features::auth::models::Role;
use crate::features::cleaners::repository as cleaner_repository;
use crate::shared::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::collections::HashMap;

/// Environment variable holding the privileged-role mapping
pub const ROLE_MAP_VAR: &str = "CLEANTRACK_ADMIN_ROLES";

/// Identity-to-role mapping, loaded once at startup
///
/// The mapping covers the privileged addresses only; everyone else falls
/// back to the role on their stored profile, and finally to `Cleaner`.
#[derive(Debug, Clone, Default)]
pub struct RoleMap {
    roles: HashMap<String, Role>,
}

impl RoleMap {
    /// Build a role map from explicit pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Role)>,
        S: Into<String>,
    {
        Self {
            roles: pairs
                .into_iter()
                .map(|(email, role)| (email.into(), role))
                .collect(),
        }
    }

    /// Load the role map from `CLEANTRACK_ADMIN_ROLES`
    ///
    /// The value is a comma-separated list of `email=role` pairs, e.g.
    /// `superadmin@example.se=superior_admin,admin@example.se=admin`.
    /// An unset variable yields an empty map; a malformed pair is an error.
    pub fn from_env() -> AppResult<Self> {
        match std::env::var(ROLE_MAP_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                log::warn!("{ROLE_MAP_VAR} is not set; no privileged roles configured");
                Ok(Self::default())
            }
        }
    }

    /// Parse a `email=role,email=role` mapping string
    pub fn parse(value: &str) -> AppResult<Self> {
        let mut roles = HashMap::new();

        for pair in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (email, role_str) = pair.split_once('=').ok_or_else(|| {
                AppError::configuration(format!("malformed role mapping entry: {pair}"))
            })?;

            let role = Role::parse(role_str.trim()).ok_or_else(|| {
                AppError::configuration(format!("unknown role in mapping: {role_str}"))
            })?;

            roles.insert(email.trim().to_string(), role);
        }

        Ok(Self { roles })
    }

    /// Role configured for an email, if any
    pub fn configured_role(&self, email: &str) -> Option<Role> {
        self.roles.get(email).copied()
    }

    /// Whether the email is the superior admin
    pub fn is_superior_admin(&self, email: &str) -> bool {
        self.configured_role(email) == Some(Role::SuperiorAdmin)
    }

    /// Whether the email is a regular admin
    pub fn is_admin(&self, email: &str) -> bool {
        self.configured_role(email) == Some(Role::Admin)
    }

    /// Whether the email carries any admin permission
    pub fn is_any_admin(&self, email: &str) -> bool {
        self.configured_role(email)
            .map(|role| role.is_any_admin())
            .unwrap_or(false)
    }

    /// Resolve the role for a signed-in principal
    ///
    /// Order: configured mapping, then the stored profile's role, then
    /// `Cleaner`.
    ///
    /// # Arguments
    /// * `conn` - database connection
    /// * `email` - signed-in email
    pub fn resolve(&self, conn: &Connection, email: &str) -> AppResult<Role> {
        if let Some(role) = self.configured_role(email) {
            return Ok(role);
        }

        if let Some(profile) = cleaner_repository::get_by_email(conn, email)? {
            return Ok(profile.role);
        }

        Ok(Role::Cleaner)
    }
}
