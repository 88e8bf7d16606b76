//! Application error handling
//!
//! Unifies core, storage and argument errors and maps each one to a stable
//! error code and process exit status.

use health_planner_shared::validation::ValidationError;
use health_planner_shared::MetricsError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// CLI error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error("Invalid argument for {field}: {message}")]
    InvalidArgument { field: String, message: String },

    #[error("Storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error body printed in `--json` mode
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn invalid_argument(field: &str, message: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Storage {
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Metrics(MetricsError::InvalidInput { .. }) => "INVALID_INPUT",
            AppError::Metrics(MetricsError::UnknownPreference(_)) => "UNKNOWN_PREFERENCE",
            AppError::Metrics(MetricsError::MalformedPersistedState(_)) => "MALFORMED_PERSISTED_STATE",
            AppError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            AppError::Storage { .. } => "STORAGE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Process exit status: 2 for bad user input, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Metrics(MetricsError::InvalidInput { .. })
            | AppError::Metrics(MetricsError::UnknownPreference(_))
            | AppError::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }

    /// Message for people: input errors lead with the field's display label
    pub fn user_message(&self) -> String {
        match self {
            AppError::Metrics(MetricsError::InvalidInput { field, reason })
            | AppError::InvalidArgument {
                field,
                message: reason,
            } => ValidationError::new(field, reason).user_message(),
            other => other.to_string(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let field = match self {
            AppError::Metrics(err) => err.field().map(str::to_string),
            AppError::InvalidArgument { field, .. } => Some(field.clone()),
            _ => None,
        };

        ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.user_message(),
                field,
            },
        }
    }
}

/// Result type alias for CLI commands
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_code() {
        let error = AppError::from(MetricsError::invalid_input("age", "must be at least 1 year"));
        assert_eq!(error.code(), "INVALID_INPUT");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_response().error.field.as_deref(), Some("age"));
    }

    #[test]
    fn test_malformed_state_code() {
        let error = AppError::from(MetricsError::MalformedPersistedState("bad json".to_string()));
        assert_eq!(error.code(), "MALFORMED_PERSISTED_STATE");
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_response().error.field.is_none());
    }

    #[test]
    fn test_user_message_uses_field_label() {
        let error = AppError::from(MetricsError::invalid_input("weight_kg", "must be greater than 0"));
        assert_eq!(error.user_message(), "Weight: must be greater than 0");
        assert_eq!(error.to_response().error.message, "Weight: must be greater than 0");

        let error = AppError::invalid_argument("display_unit", "'stone' is not a weight unit");
        assert_eq!(error.user_message(), "display_unit: 'stone' is not a weight unit");

        let error = AppError::from(MetricsError::UnknownPreference("keto".to_string()));
        assert_eq!(error.user_message(), error.to_string());
    }

    #[test]
    fn test_storage_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = AppError::storage("/data/report.json", io);
        assert_eq!(error.code(), "STORAGE_ERROR");
        assert!(error.to_string().contains("/data/report.json"));
    }
}
