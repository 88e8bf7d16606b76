//! Error types for the Health Planner core

use thiserror::Error;

/// Errors raised by the metrics engine, recommendation lookup and report parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A `HealthInput` field violates its domain constraint
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Diet preference is not in the recognized catalog
    #[error("Unknown diet preference: {0}")]
    UnknownPreference(String),

    /// Stored report cannot be turned back into a valid input/result pair
    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),
}

impl MetricsError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        MetricsError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is an input error
    pub fn field(&self) -> Option<&str> {
        match self {
            MetricsError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result alias for core operations
pub type MetricsResult<T> = Result<T, MetricsError>;
