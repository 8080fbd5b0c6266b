//! HTTP routes for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{last_seen, leaderboard, profile, register, UserHandlers};

/// Creates the users router.
///
/// `/last-seen` is registered alongside `/:id`; axum gives the static
/// segment priority.
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", get(leaderboard))
        .route("/register", post(register))
        .route("/last-seen", get(last_seen))
        .route("/:id", get(profile))
        .with_state(handlers)
}
