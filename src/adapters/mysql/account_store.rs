//! MySQL implementation of AccountStore.
//!
//! Column names and insert shapes follow the legacy game-server schema;
//! the game server reads these tables directly, so the zero-date
//! timestamps and mirrored authority columns are part of the contract.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, Row, Transaction};

use crate::domain::account::{AccountRecord, CashRecord, GameProfileRecord};
use crate::domain::foundation::DomainError;
use crate::ports::{AccountStore, ConflictScan, RegistrationTxn, StoredCredential};

use super::db_err;

/// The schema's "never" timestamp.
const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

/// MySQL implementation of AccountStore.
#[derive(Clone)]
pub struct MySqlAccountStore {
    pool: MySqlPool,
}

impl MySqlAccountStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for MySqlAccountStore {
    async fn scan_conflicts(
        &self,
        username: &str,
        email: &str,
    ) -> Result<ConflictScan, DomainError> {
        let rows = sqlx::query("SELECT user, E_Mail FROM user WHERE user = ? OR E_Mail = ?")
            .bind(username)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_err("Failed to scan for conflicts", e))?;

        let mut scan = ConflictScan::default();
        for row in rows {
            let existing_username: String = row
                .try_get("user")
                .map_err(|e| db_err("Failed to get user", e))?;
            let existing_email: String = row
                .try_get("E_Mail")
                .map_err(|e| db_err("Failed to get E_Mail", e))?;

            if existing_username == username {
                scan.username_taken = true;
            }
            if existing_email == email {
                scan.email_taken = true;
            }
        }

        Ok(scan)
    }

    async fn fetch_credential(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredential>, DomainError> {
        let row = sqlx::query("SELECT Id, NickName, Password FROM user WHERE user = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to fetch credential", e))?;

        match row {
            Some(row) => Ok(Some(StoredCredential {
                player_id: row
                    .try_get("Id")
                    .map_err(|e| db_err("Failed to get Id", e))?,
                nickname: row
                    .try_get("NickName")
                    .map_err(|e| db_err("Failed to get NickName", e))?,
                password: row
                    .try_get("Password")
                    .map_err(|e| db_err("Failed to get Password", e))?,
            })),
            None => Ok(None),
        }
    }

    async fn begin_registration(&self) -> Result<Box<dyn RegistrationTxn>, DomainError> {
        let txn = self
            .pool
            .begin()
            .await
            .map_err(|e| db_err("Failed to begin transaction", e))?;
        Ok(Box::new(MySqlRegistrationTxn { txn }))
    }
}

struct MySqlRegistrationTxn {
    txn: Transaction<'static, MySql>,
}

#[async_trait]
impl RegistrationTxn for MySqlRegistrationTxn {
    async fn insert_account(&mut self, record: &AccountRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user (
                Id, user, NickName, Password, E_Mail, Gender, Country,
                MuteTime, RestrictTime, Status, User_Level, Authority, Authority2
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.id)
        .bind(&record.nickname)
        .bind(&record.password)
        .bind(&record.email)
        .bind(record.gender_code)
        .bind(record.country_code)
        .bind(ZERO_DATETIME)
        .bind(ZERO_DATETIME)
        .bind("1")
        .bind(1)
        .bind(record.authority)
        .bind(record.authority)
        .execute(&mut *self.txn)
        .await
        .map_err(|e| db_err("Failed to insert account", e))?;

        Ok(())
    }

    async fn insert_mirror_account(&mut self, record: &AccountRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO gunwcuser (
                Id, user, NickName, Password, E_Mail, Gender, Country,
                MuteTime, RestrictTime, Status, User_Level, Authority, Authority2,
                AuthorityBackup
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.id)
        .bind(&record.nickname)
        .bind(&record.password)
        .bind(&record.email)
        .bind(record.gender_code)
        .bind(record.country_code)
        .bind(ZERO_DATETIME)
        .bind(ZERO_DATETIME)
        .bind("1")
        .bind(1)
        .bind(record.authority)
        .bind(record.authority)
        .bind(record.authority)
        .execute(&mut *self.txn)
        .await
        .map_err(|e| db_err("Failed to insert mirror account", e))?;

        Ok(())
    }

    async fn insert_game_profile(
        &mut self,
        record: &GameProfileRecord,
    ) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO game (
                Id, NickName, Guild, GuildRank, MemberCount, Money,
                EventScore0, EventScore1, EventScore2, EventScore3,
                AvatarWear, Prop1, Prop2, AdminGift,
                TotalScore, SeasonScore, TotalGrade, SeasonGrade,
                TotalRank, SeasonRank, AccumShot, AccumDamage,
                StageRecords, MobileRecords, LastUpdateTime, NoRankUpdate,
                ClientData, Country, CountryGrade, CountryRank, GiftProhibitTime
            ) VALUES (
                ?, ?, ?, ?, ?, ?,
                ?, ?, ?, ?,
                ?, ?, ?, ?,
                ?, ?, ?, ?,
                ?, ?, ?, ?,
                ?, ?, ?, ?,
                ?, ?, ?, ?, ?
            )
            "#,
        )
        .bind(&record.id)
        .bind(&record.nickname)
        .bind("")
        .bind(0)
        .bind(0)
        .bind(record.money)
        .bind(0)
        .bind(0)
        .bind(0)
        .bind(0)
        .bind(0)
        .bind("")
        .bind("")
        .bind(0)
        .bind(record.game_points)
        .bind(record.game_points)
        .bind(record.total_grade)
        .bind(record.season_grade)
        .bind(0)
        .bind(0)
        .bind(0)
        .bind(0)
        .bind("0")
        .bind("0")
        .bind(ZERO_DATETIME)
        .bind(0)
        .bind("0")
        .bind(record.country_code)
        .bind(record.country_grade)
        .bind("0")
        .bind(ZERO_DATETIME)
        .execute(&mut *self.txn)
        .await
        .map_err(|e| db_err("Failed to insert game profile", e))?;

        Ok(())
    }

    async fn insert_cash_balance(&mut self, record: &CashRecord) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO cash (Id, Cash) VALUES (?, ?)")
            .bind(&record.id)
            .bind(record.cash)
            .execute(&mut *self.txn)
            .await
            .map_err(|e| db_err("Failed to insert cash balance", e))?;

        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.txn
            .commit()
            .await
            .map_err(|e| db_err("Failed to commit registration", e))
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        self.txn
            .rollback()
            .await
            .map_err(|e| db_err("Failed to roll back registration", e))
    }
}
