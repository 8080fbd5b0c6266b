//! Domain error to HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error payload shared by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Map a domain error to its HTTP response.
///
/// Infrastructure errors are logged here and replaced with a generic
/// payload; store details, credentials and tokens never reach the caller.
pub fn domain_error_response(error: DomainError) -> Response {
    let status = match error.code() {
        ErrorCode::ValidationFailed
        | ErrorCode::InvalidCountry
        | ErrorCode::InvalidParameter
        | ErrorCode::NoActiveSession => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::UsernameTaken | ErrorCode::EmailTaken => StatusCode::CONFLICT,
        ErrorCode::DatabaseError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(code = %error.code(), detail = %error.message(), "request failed");
        "Database error".to_string()
    } else {
        error.message().to_string()
    };

    (
        status,
        Json(ErrorResponse {
            code: error.code().to_string(),
            message,
        }),
    )
        .into_response()
}
