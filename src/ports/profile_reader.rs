//! ProfileReader port: read-only joins across the player tables.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::foundation::DomainError;

/// One leaderboard row, ordered by total score descending.
#[derive(Debug, Clone)]
pub struct LeaderboardRow {
    pub player_id: String,
    pub total_score: i32,
    pub total_grade: i32,
    pub money: i64,
    pub country_code: i32,
    pub last_login: Option<DateTime<Utc>>,
}

/// Full single-player profile join.
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub player_id: String,
    pub total_grade: i32,
    pub money: i64,
    pub cash: i64,
    pub country_code: i32,
    pub accum_shot: i64,
    pub last_login: Option<DateTime<Utc>>,
}

/// Most recent login per player within the lookback window.
#[derive(Debug, Clone)]
pub struct LastSeenRow {
    pub player_id: String,
    pub server_port: i32,
    pub last_login: DateTime<Utc>,
}

/// Query operations over the player tables. No mutation.
#[async_trait]
pub trait ProfileReader: Send + Sync {
    /// All players ordered by total score descending.
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, DomainError>;

    /// Single profile by player id.
    async fn profile(&self, player_id: &str) -> Result<Option<PlayerProfile>, DomainError>;

    /// One row per player with a login newer than `cutoff`, most recent
    /// timestamp only, newest first.
    async fn last_seen(&self, cutoff: DateTime<Utc>) -> Result<Vec<LastSeenRow>, DomainError>;
}
