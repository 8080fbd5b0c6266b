//! Account Gateway server binary.

use std::sync::Arc;
use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::EnvFilter;

use account_gateway::adapters::auth::scheme_for;
use account_gateway::adapters::http::{api_router, cors_layer, AuthHandlers, UserHandlers};
use account_gateway::adapters::mysql::{MySqlAccountStore, MySqlProfileReader};
use account_gateway::application::handlers::{
    GetLeaderboardHandler, GetProfileHandler, LastSeenHandler, LoginHandler, LogoutHandler,
    RegisterAccountHandler,
};
use account_gateway::config::AppConfig;
use account_gateway::domain::foundation::SystemClock;
use account_gateway::domain::session::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let pool = MySqlPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!("Connected to MySQL database");

    let clock = Arc::new(SystemClock);
    let account_store = Arc::new(MySqlAccountStore::new(pool.clone()));
    let profile_reader = Arc::new(MySqlProfileReader::new(pool));
    let credentials = scheme_for(config.auth.password_mode);
    let sessions = Arc::new(SessionStore::new(config.auth.session_ttl(), clock.clone()));

    let auth_handlers = AuthHandlers::new(
        Arc::new(LoginHandler::new(
            account_store.clone(),
            credentials.clone(),
            sessions.clone(),
        )),
        Arc::new(LogoutHandler::new(sessions)),
        config.auth.cookie_max_age_secs,
    );

    let user_handlers = UserHandlers::new(
        Arc::new(RegisterAccountHandler::new(
            account_store,
            credentials,
            config.auth.admin_registration_token.clone(),
        )),
        Arc::new(GetLeaderboardHandler::new(profile_reader.clone())),
        Arc::new(GetProfileHandler::new(profile_reader.clone())),
        Arc::new(LastSeenHandler::new(profile_reader, clock)),
    );

    let app = api_router(
        auth_handlers,
        user_handlers,
        cors_layer(&config.server.cors_origins_list()),
    )
    .layer(TimeoutLayer::new(Duration::from_secs(
        config.server.request_timeout_secs,
    )));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server running on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
