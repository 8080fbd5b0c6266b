//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::{
    GetLeaderboardHandler, GetProfileHandler, LastSeenHandler, RegisterAccountCommand,
    RegisterAccountHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::dto::{
    LastSeenParams, LastSeenResponse, LeaderboardResponse, RegisterRequest, RegisterResponse,
    UserDetailsResponse,
};

/// Shared state for the users router.
#[derive(Clone)]
pub struct UserHandlers {
    register: Arc<RegisterAccountHandler>,
    leaderboard: Arc<GetLeaderboardHandler>,
    profile: Arc<GetProfileHandler>,
    last_seen: Arc<LastSeenHandler>,
}

impl UserHandlers {
    pub fn new(
        register: Arc<RegisterAccountHandler>,
        leaderboard: Arc<GetLeaderboardHandler>,
        profile: Arc<GetProfileHandler>,
        last_seen: Arc<LastSeenHandler>,
    ) -> Self {
        Self {
            register,
            leaderboard,
            profile,
            last_seen,
        }
    }
}

/// POST /users/register
pub async fn register(
    State(handlers): State<UserHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    let cmd = RegisterAccountCommand {
        username: req.username,
        password: req.password,
        email: req.email,
        gender: req.gender,
        country: req.country,
        admin_token: req.admin_token,
    };

    match handlers.register.handle(cmd).await {
        Ok(result) => {
            tracing::info!(player_id = %result.player_id, "player registered");
            (
                StatusCode::CREATED,
                Json(RegisterResponse {
                    message: "User registered successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// GET /users
pub async fn leaderboard(State(handlers): State<UserHandlers>) -> Response {
    match handlers.leaderboard.handle().await {
        Ok(rows) => (
            StatusCode::OK,
            Json(LeaderboardResponse {
                players: rows.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /users/:id
pub async fn profile(
    State(handlers): State<UserHandlers>,
    Path(id): Path<String>,
) -> Response {
    match handlers.profile.handle(&id).await {
        Ok(profile) => (
            StatusCode::OK,
            Json(UserDetailsResponse {
                user: profile.into(),
            }),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /users/last-seen?days=N
pub async fn last_seen(
    State(handlers): State<UserHandlers>,
    Query(params): Query<LastSeenParams>,
) -> Response {
    let days = match parse_days(params.days.as_deref()) {
        Ok(days) => days,
        Err(e) => return domain_error_response(e),
    };

    match handlers.last_seen.handle(days).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(LastSeenResponse {
                last_seen_users: rows.into_iter().map(Into::into).collect(),
            }),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

fn parse_days(raw: Option<&str>) -> Result<i64, DomainError> {
    raw.and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidParameter,
                "days must be a positive integer",
            )
        })
}
