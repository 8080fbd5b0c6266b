//! Row records produced by the registration transaction.
//!
//! The player id doubles as username, nickname and primary key across all
//! four tables; the external game server expects them populated together.

use super::registration::{Registration, RegistrationDefaults};

/// Row for the `user` table and its mirrored `gunwcuser` copy.
///
/// `password` holds the sealed credential (verbatim in plain-compat mode,
/// salted digest in hashed mode); it is never echoed back out.
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub id: String,
    pub nickname: String,
    pub password: String,
    pub email: String,
    pub gender_code: i32,
    pub country_code: i32,
    pub authority: i32,
}

/// Row for the `game` table; counters not listed here are zeroed.
#[derive(Debug, Clone)]
pub struct GameProfileRecord {
    pub id: String,
    pub nickname: String,
    pub money: i64,
    pub game_points: i32,
    pub total_grade: i32,
    pub season_grade: i32,
    pub country_code: i32,
    pub country_grade: i32,
}

/// Row for the `cash` table.
#[derive(Debug, Clone)]
pub struct CashRecord {
    pub id: String,
    pub cash: i64,
}

/// The full four-table fan-out for one new player.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub account: AccountRecord,
    pub profile: GameProfileRecord,
    pub cash: CashRecord,
}

impl NewPlayer {
    /// Assemble all rows from validated input, the sealed credential and
    /// the tier defaults.
    pub fn assemble(
        registration: &Registration,
        sealed_password: String,
        defaults: RegistrationDefaults,
    ) -> Self {
        let id = registration.username().to_string();
        let country_code = registration.country().code();

        Self {
            account: AccountRecord {
                id: id.clone(),
                nickname: id.clone(),
                password: sealed_password,
                email: registration.email().to_string(),
                gender_code: registration.gender().code(),
                country_code,
                authority: defaults.authority,
            },
            profile: GameProfileRecord {
                id: id.clone(),
                nickname: id.clone(),
                money: defaults.money,
                game_points: defaults.game_points,
                total_grade: defaults.grade,
                season_grade: defaults.grade,
                country_code,
                country_grade: defaults.grade,
            },
            cash: CashRecord {
                id,
                cash: defaults.cash,
            },
        }
    }
}
