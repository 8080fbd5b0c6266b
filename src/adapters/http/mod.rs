//! HTTP adapters - REST API over the application handlers.

pub mod auth;
pub mod users;

mod cookies;
mod error;

pub use auth::{auth_routes, AuthHandlers};
pub use cookies::SESSION_COOKIE;
pub use users::{user_routes, UserHandlers};

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Assemble the full API router.
pub fn api_router(auth: AuthHandlers, users: UserHandlers, cors: CorsLayer) -> Router {
    Router::new()
        .nest("/auth", auth_routes(auth))
        .nest("/users", user_routes(users))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Build the CORS layer from the configured origin list.
///
/// Credentials are allowed because the session rides in a cookie, which
/// also rules out a wildcard origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
