//! Error types for the domain layer.

use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidCountry,
    InvalidParameter,

    // Conflict errors
    UsernameTaken,
    EmailTaken,

    // Not found errors
    NotFound,

    // Authentication errors
    InvalidCredentials,
    NoActiveSession,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidCountry => "INVALID_COUNTRY",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::UsernameTaken => "USERNAME_TAKEN",
            ErrorCode::EmailTaken => "EMAIL_TAKEN",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::NoActiveSession => "NO_ACTIVE_SESSION",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
///
/// The message is safe to surface for client-correctable codes; the http
/// adapter replaces infrastructure messages with a generic payload so store
/// details never reach callers.
#[derive(Debug, Clone)]
pub struct DomainError {
    code: ErrorCode,
    message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Creates a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// The error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::NotFound, "No user found");
        assert_eq!(format!("{}", err), "[NOT_FOUND] No user found");
    }

    #[test]
    fn validation_helper_sets_code() {
        let err = DomainError::validation("All fields are required");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.message(), "All fields are required");
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::UsernameTaken), "USERNAME_TAKEN");
        assert_eq!(format!("{}", ErrorCode::DatabaseError), "DATABASE_ERROR");
    }
}
