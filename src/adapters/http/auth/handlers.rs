//! HTTP handlers for auth endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::cookies::{clear_session_cookie, session_cookie, session_token};
use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::{LoginCommand, LoginHandler, LogoutHandler};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{LoginRequest, MessageResponse};

/// Shared state for the auth router.
#[derive(Clone)]
pub struct AuthHandlers {
    login: Arc<LoginHandler>,
    logout: Arc<LogoutHandler>,
    cookie_max_age_secs: u64,
}

impl AuthHandlers {
    pub fn new(login: Arc<LoginHandler>, logout: Arc<LogoutHandler>, cookie_max_age_secs: u64) -> Self {
        Self {
            login,
            logout,
            cookie_max_age_secs,
        }
    }
}

/// POST /auth/login
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand {
        username: req.username,
        password: req.password,
    };

    match handlers.login.handle(cmd).await {
        Ok(result) => with_set_cookie(
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Login successful".to_string(),
                }),
            )
                .into_response(),
            session_cookie(&result.token, handlers.cookie_max_age_secs),
        ),
        Err(e) => domain_error_response(e),
    }
}

/// POST /auth/logout
pub async fn logout(State(handlers): State<AuthHandlers>, headers: HeaderMap) -> Response {
    let token = session_token(&headers);

    match handlers.logout.handle(token.as_deref()) {
        Ok(()) => with_set_cookie(
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Logout successful".to_string(),
                }),
            )
                .into_response(),
            clear_session_cookie(),
        ),
        Err(e) => domain_error_response(e),
    }
}

fn with_set_cookie(mut response: Response, cookie: String) -> Response {
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().insert(SET_COOKIE, value);
            response
        }
        Err(_) => domain_error_response(DomainError::new(
            ErrorCode::InternalError,
            "Failed to encode session cookie",
        )),
    }
}
