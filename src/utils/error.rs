use crate::domain::model::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Form validation failed: {0}")]
    ValidationError(ValidationErrors),

    #[error("Message delivery failed with status {status}")]
    DeliveryError { status: u16, body: String },

    #[error("Unknown tariff: {0}")]
    UnknownTariff(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Delivery,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LeadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LeadError::ConfigError { .. }
            | LeadError::ConfigValidationError { .. }
            | LeadError::InvalidConfigValueError { .. }
            | LeadError::MissingConfigError { .. }
            | LeadError::InvalidDate(_) => ErrorCategory::Configuration,
            LeadError::ValidationError(_) | LeadError::UnknownTariff(_) => {
                ErrorCategory::Validation
            }
            LeadError::HttpError(_) | LeadError::DeliveryError { .. } => ErrorCategory::Delivery,
            LeadError::IoError(_) | LeadError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Delivery => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for a terminal or a notification toast.
    pub fn user_friendly_message(&self) -> String {
        match self {
            LeadError::ValidationError(errors) => {
                format!("Form has {} invalid field(s)", errors.len())
            }
            LeadError::DeliveryError { status, .. } => {
                format!("The messaging service rejected the lead (HTTP {})", status)
            }
            LeadError::HttpError(_) => "Could not reach the messaging service".to_string(),
            LeadError::UnknownTariff(key) => format!("'{}' is not a known tariff", key),
            other if other.category() == ErrorCategory::Configuration => {
                format!("Configuration problem: {}", other)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the config file and make sure referenced environment variables are set"
            }
            ErrorCategory::Validation => "Correct the highlighted fields and submit again",
            ErrorCategory::Delivery => {
                "Verify the bot token and chat id, then submit the form again"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, LeadError>;
