use serde::{Deserialize, Serialize};

/// Role of a signed-in user
///
/// `Admin` and `SuperiorAdmin` differ only in machine-management
/// permission; both see all cleaner data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Cleaner,
    Admin,
    SuperiorAdmin,
}

impl Role {
    /// Stable string form used in the store and in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cleaner => "cleaner",
            Role::Admin => "admin",
            Role::SuperiorAdmin => "superior_admin",
        }
    }

    /// Parse the stable string form
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "cleaner" => Some(Role::Cleaner),
            "admin" => Some(Role::Admin),
            "superior_admin" => Some(Role::SuperiorAdmin),
            _ => None,
        }
    }

    /// Whether this role carries any admin permission
    pub fn is_any_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperiorAdmin)
    }
}

/// Signed-in principal as reported by the external identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Cleaner, Role::Admin, Role::SuperiorAdmin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("janitor"), None);
    }

    #[test]
    fn test_role_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::SuperiorAdmin).unwrap();
        assert_eq!(json, "\"superior_admin\"");

        let role: Role = serde_json::from_str("\"cleaner\"").unwrap();
        assert_eq!(role, Role::Cleaner);
    }

    #[test]
    fn test_admin_check() {
        assert!(Role::Admin.is_any_admin());
        assert!(Role::SuperiorAdmin.is_any_admin());
        assert!(!Role::Cleaner.is_any_admin());
    }
}
