//! HTTP routes for auth endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, logout, AuthHandlers};

/// Creates the auth router.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(handlers)
}
