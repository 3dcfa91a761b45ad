use crate::shared::errors::{AppError, AppResult};

/// Load `.env` variables into the process environment
///
/// Must run before the logging system is initialized so that `LOG_LEVEL`
/// from the file is honored. Missing files are not an error.
pub fn load_environment_variables() {
    match dotenv::dotenv() {
        Ok(path) => log::debug!("loaded environment from {:?}", path),
        Err(_) => log::debug!("no .env file found, using process environment only"),
    }
}

/// Initialize the logging system
///
/// Level comes from `LOG_LEVEL` (default `info`). Safe to call more than
/// once; later calls are no-ops.
pub fn initialize_logging_system() {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// EmailJS credentials and delivery target
///
/// All notification email goes through the EmailJS REST API with a single
/// service/template pair; the recipient address is fixed per deployment.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub to_email: String,
    pub endpoint: String,
}

/// Default EmailJS REST endpoint
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

impl EmailConfig {
    /// Read the EmailJS configuration from the environment
    ///
    /// # Returns
    /// The configuration, or a configuration error when a credential is
    /// missing
    pub fn from_env() -> AppResult<Self> {
        let service_id = require_var("EMAILJS_SERVICE_ID")?;
        let template_id = require_var("EMAILJS_TEMPLATE_ID")?;
        let public_key = require_var("EMAILJS_PUBLIC_KEY")?;
        let to_email = require_var("NOTIFICATION_EMAIL")?;
        let endpoint = std::env::var("EMAILJS_ENDPOINT")
            .unwrap_or_else(|_| EMAILJS_ENDPOINT.to_string());

        Ok(Self {
            service_id,
            template_id,
            public_key,
            to_email,
            endpoint,
        })
    }
}

fn require_var(name: &str) -> AppResult<String> {
    std::env::var(name)
        .map_err(|_| AppError::configuration(format!("environment variable {name} is not set")))
}
