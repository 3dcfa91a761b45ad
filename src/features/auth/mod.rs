/// Identity gate
///
/// Sign-in itself is delegated to the external identity provider; this
/// module only resolves a signed-in principal to a role. The privileged
/// addresses come from configuration rather than a hardcoded list, so role
/// changes do not require a rebuild.
pub mod models;
pub mod service;

pub use models::{Principal, Role};
pub use service::RoleMap;
