//! Error types shared across the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
///
/// Surfaced in HTTP error bodies and structured log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Session errors
    NoActiveSession,
    InvalidStateTransition,

    // Navigation errors
    UnknownIntent,

    // External collaborator errors
    TransportError,
    SpeechError,
    TokenError,

    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NoActiveSession => "NO_ACTIVE_SESSION",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::UnknownIntent => "UNKNOWN_INTENT",
            ErrorCode::TransportError => "TRANSPORT_ERROR",
            ErrorCode::SpeechError => "SPEECH_ERROR",
            ErrorCode::TokenError => "TOKEN_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("room_name");
        assert_eq!(format!("{}", err), "Field 'room_name' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("host_base_url", "relative URL without a base");
        assert_eq!(
            format!("{}", err),
            "Field 'host_base_url' has invalid format: relative URL without a base"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::NoActiveSession), "NO_ACTIVE_SESSION");
        assert_eq!(format!("{}", ErrorCode::TokenError), "TOKEN_ERROR");
    }
}
