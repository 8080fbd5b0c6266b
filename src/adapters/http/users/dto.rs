//! HTTP DTOs for user endpoints.
//!
//! Field names stay camelCase for compatibility with the legacy web
//! frontend; money is rendered as US-style currency and countries and
//! server ports as display names.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::account::Country;
use crate::domain::display::{format_money, mode_name};
use crate::ports::{LastSeenRow, LeaderboardRow, PlayerProfile};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Registration request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub admin_token: Option<String>,
}

/// Query parameters for the last-seen report.
#[derive(Debug, Clone, Deserialize)]
pub struct LastSeenParams {
    pub days: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a successful registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// One leaderboard entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub total_score: i32,
    pub total_grade: i32,
    pub money: String,
    pub country: String,
    pub last_login_time: Option<String>,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            id: row.player_id,
            total_score: row.total_score,
            total_grade: row.total_grade,
            money: format_money(row.money),
            country: Country::display_name(row.country_code).to_string(),
            last_login_time: row.last_login.map(iso_time),
        }
    }
}

/// Leaderboard envelope.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardResponse {
    pub players: Vec<LeaderboardEntry>,
}

/// Single player profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub user_id: String,
    pub total_grade: i32,
    pub money: String,
    pub country: String,
    pub cash: String,
    pub accum_shot: i64,
    pub last_login_time: Option<String>,
}

impl From<PlayerProfile> for UserDetails {
    fn from(profile: PlayerProfile) -> Self {
        Self {
            user_id: profile.player_id,
            total_grade: profile.total_grade,
            money: format_money(profile.money),
            country: Country::display_name(profile.country_code).to_string(),
            cash: format_money(profile.cash),
            accum_shot: profile.accum_shot,
            last_login_time: profile.last_login.map(iso_time),
        }
    }
}

/// Profile envelope.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetailsResponse {
    pub user: UserDetails,
}

/// One last-seen entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSeenEntry {
    pub id: String,
    pub server_port: i32,
    pub mode: String,
    pub last_login_time: String,
}

impl From<LastSeenRow> for LastSeenEntry {
    fn from(row: LastSeenRow) -> Self {
        Self {
            id: row.player_id,
            server_port: row.server_port,
            mode: mode_name(row.server_port).to_string(),
            last_login_time: iso_time(row.last_login),
        }
    }
}

/// Last-seen envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastSeenResponse {
    pub last_seen_users: Vec<LastSeenEntry>,
}

fn iso_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn register_request_accepts_optional_admin_token() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"alice","password":"secret1","email":"a@x.com",
                "gender":"Female","country":"USA","adminToken":"let-me-in"}"#,
        )
        .unwrap();
        assert_eq!(req.admin_token.as_deref(), Some("let-me-in"));

        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"alice","password":"secret1","email":"a@x.com",
                "gender":"Female","country":"USA"}"#,
        )
        .unwrap();
        assert!(req.admin_token.is_none());
    }

    #[test]
    fn leaderboard_entry_formats_display_values() {
        let entry = LeaderboardEntry::from(LeaderboardRow {
            player_id: "alice".to_string(),
            total_score: 1000,
            total_grade: 19,
            money: 250_000,
            country_code: 207,
            last_login: Some(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()),
        });
        assert_eq!(entry.money, "$250,000.00");
        assert_eq!(entry.country, "USA");
        assert_eq!(
            entry.last_login_time.as_deref(),
            Some("2025-01-15T12:00:00.000Z")
        );
    }

    #[test]
    fn user_details_tolerate_legacy_country_codes() {
        let details = UserDetails::from(PlayerProfile {
            player_id: "old-timer".to_string(),
            total_grade: 0,
            money: 0,
            cash: 0,
            country_code: 42,
            accum_shot: 7,
            last_login: None,
        });
        assert_eq!(details.country, "Unknown");
        assert_eq!(details.cash, "$0.00");
        assert!(details.last_login_time.is_none());
    }

    #[test]
    fn last_seen_entry_maps_port_to_mode() {
        let entry = LastSeenEntry::from(LastSeenRow {
            player_id: "alice".to_string(),
            server_port: 8370,
            last_login: Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        });
        assert_eq!(entry.mode, "Avatar On");
    }

    #[test]
    fn last_seen_envelope_uses_camel_case() {
        let body = serde_json::to_string(&LastSeenResponse {
            last_seen_users: vec![],
        })
        .unwrap();
        assert_eq!(body, r#"{"lastSeenUsers":[]}"#);
    }
}
