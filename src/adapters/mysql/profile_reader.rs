//! MySQL implementation of ProfileReader.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{MySqlPool, Row};

use crate::domain::foundation::DomainError;
use crate::ports::{LastSeenRow, LeaderboardRow, PlayerProfile, ProfileReader};

use super::db_err;

/// MySQL implementation of ProfileReader.
#[derive(Clone)]
pub struct MySqlProfileReader {
    pool: MySqlPool,
}

impl MySqlProfileReader {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileReader for MySqlProfileReader {
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT g.Id, g.TotalScore, g.TotalGrade, g.Money, g.Country,
                   (SELECT MAX(l.Time) FROM loginlog l WHERE l.Id = g.Id) AS LastLogin
            FROM game g
            ORDER BY g.TotalScore DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch leaderboard", e))?;

        rows.into_iter()
            .map(|row| {
                Ok(LeaderboardRow {
                    player_id: row
                        .try_get("Id")
                        .map_err(|e| db_err("Failed to get Id", e))?,
                    total_score: row
                        .try_get("TotalScore")
                        .map_err(|e| db_err("Failed to get TotalScore", e))?,
                    total_grade: row
                        .try_get("TotalGrade")
                        .map_err(|e| db_err("Failed to get TotalGrade", e))?,
                    money: row
                        .try_get("Money")
                        .map_err(|e| db_err("Failed to get Money", e))?,
                    country_code: row
                        .try_get("Country")
                        .map_err(|e| db_err("Failed to get Country", e))?,
                    last_login: row
                        .try_get::<Option<NaiveDateTime>, _>("LastLogin")
                        .map_err(|e| db_err("Failed to get LastLogin", e))?
                        .map(to_utc),
                })
            })
            .collect()
    }

    async fn profile(&self, player_id: &str) -> Result<Option<PlayerProfile>, DomainError> {
        // LEFT JOINs tolerate legacy accounts whose game or cash rows were
        // created outside this API.
        let row = sqlx::query(
            r#"
            SELECT u.Id,
                   COALESCE(g.TotalGrade, 0) AS TotalGrade,
                   COALESCE(g.Money, 0) AS Money,
                   COALESCE(g.Country, 0) AS Country,
                   COALESCE(c.Cash, 0) AS Cash,
                   COALESCE(g.AccumShot, 0) AS AccumShot,
                   l.Time AS LastLogin
            FROM user u
            LEFT JOIN cash c ON u.Id = c.Id
            LEFT JOIN game g ON u.Id = g.Id
            LEFT JOIN loginlog l ON u.Id = l.Id
            WHERE u.Id = ?
            ORDER BY l.Time DESC
            LIMIT 1
            "#,
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch profile", e))?;

        match row {
            Some(row) => Ok(Some(PlayerProfile {
                player_id: row
                    .try_get("Id")
                    .map_err(|e| db_err("Failed to get Id", e))?,
                total_grade: row
                    .try_get("TotalGrade")
                    .map_err(|e| db_err("Failed to get TotalGrade", e))?,
                money: row
                    .try_get("Money")
                    .map_err(|e| db_err("Failed to get Money", e))?,
                cash: row
                    .try_get("Cash")
                    .map_err(|e| db_err("Failed to get Cash", e))?,
                country_code: row
                    .try_get("Country")
                    .map_err(|e| db_err("Failed to get Country", e))?,
                accum_shot: row
                    .try_get("AccumShot")
                    .map_err(|e| db_err("Failed to get AccumShot", e))?,
                last_login: row
                    .try_get::<Option<NaiveDateTime>, _>("LastLogin")
                    .map_err(|e| db_err("Failed to get LastLogin", e))?
                    .map(to_utc),
            })),
            None => Ok(None),
        }
    }

    async fn last_seen(&self, cutoff: DateTime<Utc>) -> Result<Vec<LastSeenRow>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT t1.Id, t1.ServerPort, t1.Time
            FROM loginlog t1
            WHERE t1.Time = (
                SELECT MAX(t2.Time)
                FROM loginlog t2
                WHERE t2.Id = t1.Id AND t2.Time > ?
            )
            ORDER BY t1.Time DESC
            "#,
        )
        .bind(cutoff.naive_utc())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch last-seen report", e))?;

        rows.into_iter()
            .map(|row| {
                Ok(LastSeenRow {
                    player_id: row
                        .try_get("Id")
                        .map_err(|e| db_err("Failed to get Id", e))?,
                    server_port: row
                        .try_get("ServerPort")
                        .map_err(|e| db_err("Failed to get ServerPort", e))?,
                    last_login: to_utc(
                        row.try_get("Time")
                            .map_err(|e| db_err("Failed to get Time", e))?,
                    ),
                })
            })
            .collect()
    }
}

// Login timestamps are stored as naive DATETIME in UTC.
fn to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(naive, Utc)
}
