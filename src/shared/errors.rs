use thiserror::Error;

/// Unified error type used across the application
#[derive(Debug, Error)]
pub enum AppError {
    /// Database-related errors
    #[error("database error: {0}")]
    Database(String),

    /// Validation errors
    #[error("validation error: {0}")]
    Validation(String),

    /// A requested resource does not exist
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Errors from external services (EmailJS, identity provider)
    #[error("external service error: {0}")]
    ExternalService(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse errors
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// Low severity (bad user input)
    Low,
    /// Medium severity (transient external-service failure)
    Medium,
    /// High severity (database failure, broken configuration)
    High,
}

impl AppError {
    /// User-facing message for this error
    ///
    /// # Returns
    /// A message safe to display to the user
    pub fn user_message(&self) -> &str {
        match self {
            AppError::Database(_) => "A database operation failed",
            AppError::Validation(msg) => msg,
            AppError::NotFound(msg) => msg,
            AppError::ExternalService(_) => "Communication with an external service failed",
            AppError::Configuration(_) => "A configuration error occurred",
            AppError::Io(_) => "A file operation failed",
            AppError::Json(_) => "Data could not be parsed",
        }
    }

    /// Detailed error description for log output
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// Severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Database(_) => ErrorSeverity::High,
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::NotFound(_) => ErrorSeverity::Low,
            AppError::ExternalService(_) => ErrorSeverity::Medium,
            AppError::Configuration(_) => ErrorSeverity::High,
            AppError::Io(_) => ErrorSeverity::Medium,
            AppError::Json(_) => ErrorSeverity::Medium,
        }
    }

    /// Helper for building a validation error
    ///
    /// # Arguments
    /// * `message` - validation failure message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Helper for building a not-found error
    ///
    /// # Arguments
    /// * `resource` - name of the missing resource
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        AppError::NotFound(format!("{} not found", resource.into()))
    }

    /// Helper for building an external-service error
    ///
    /// # Arguments
    /// * `service` - service name
    /// * `message` - failure message
    pub fn external_service<S: Into<String>>(service: S, message: S) -> Self {
        AppError::ExternalService(format!("{}: {}", service.into(), message.into()))
    }

    /// Helper for building a configuration error
    ///
    /// # Arguments
    /// * `message` - configuration failure message
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// Conversion to String for callers that only carry a display message
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message().to_string()
    }
}

/// Conversion from rusqlite errors
impl From<rusqlite::Error> for AppError {
    fn from(error: rusqlite::Error) -> Self {
        AppError::Database(error.to_string())
    }
}

/// Result alias used across the application
pub type AppResult<T> = Result<T, AppError>;
