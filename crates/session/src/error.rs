//! Error types for the session crate.

use bizpulse_insight::FieldErrors;
use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Session error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Intake validation failed; the payload carries per-field reasons.
    #[error("intake validation failed: {0}")]
    Validation(FieldErrors),

    /// A synthesis or regeneration call is already outstanding.
    #[error("a request is already in flight, rejecting '{operation}'")]
    RequestInFlight { operation: String },

    /// Regeneration requested with no record on display.
    #[error("no record to regenerate a headline for")]
    NoRecord,

    /// The insight provider failed.
    #[error("insight provider failed: {reason}")]
    Provider { reason: String },

    /// A state transition outside the defined lifecycle was attempted.
    #[error("invalid session transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },
}

impl SessionError {
    /// Create a request-in-flight error.
    pub fn request_in_flight(operation: impl Into<String>) -> Self {
        Self::RequestInFlight {
            operation: operation.into(),
        }
    }

    /// Create a provider failure error.
    pub fn provider(reason: impl Into<String>) -> Self {
        Self::Provider {
            reason: reason.into(),
        }
    }

    /// Create an invalid transition error.
    pub fn invalid_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether the user can recover by editing input and retrying.
    ///
    /// Validation and missing-record errors are fixed at the keyboard;
    /// a provider failure or a rejected overlap needs a fresh attempt
    /// once the outstanding call settles.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NoRecord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bizpulse_insight::FieldReason;

    #[test]
    fn test_error_display() {
        let err = SessionError::request_in_flight("submit");
        assert!(err.to_string().contains("submit"));

        let err = SessionError::provider("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_validation_display_carries_fields() {
        let err = SessionError::Validation(FieldErrors {
            name: Some(FieldReason::Required),
            location: None,
        });
        assert!(err.to_string().contains("name: required"));
    }

    #[test]
    fn test_is_user_recoverable() {
        assert!(SessionError::NoRecord.is_user_recoverable());
        assert!(SessionError::Validation(FieldErrors::default()).is_user_recoverable());
        assert!(!SessionError::request_in_flight("submit").is_user_recoverable());
        assert!(!SessionError::provider("timeout").is_user_recoverable());
    }
}
