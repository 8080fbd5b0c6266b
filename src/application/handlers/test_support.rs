//! Mock ports shared by the handler unit tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::account::{AccountRecord, CashRecord, GameProfileRecord};
use crate::domain::foundation::DomainError;
use crate::ports::{
    AccountStore, ConflictScan, CredentialScheme, LastSeenRow, LeaderboardRow, PlayerProfile,
    ProfileReader, RegistrationTxn, StoredCredential,
};

/// Which insert of the registration fan-out should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertStep {
    Account,
    MirrorAccount,
    GameProfile,
    CashBalance,
}

/// Observable state of the mock store.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub accounts: Vec<AccountRecord>,
    pub mirror_accounts: Vec<AccountRecord>,
    pub profiles: Vec<GameProfileRecord>,
    pub cash_rows: Vec<CashRecord>,
    pub credentials: Vec<StoredCredential>,
    pub existing: Vec<(String, String)>,
    pub committed: bool,
    pub rolled_back: bool,
    pub conflict_scans: usize,
    pub transactions_opened: usize,
}

/// In-memory `AccountStore` with per-step fault injection.
///
/// Inserts buffer inside the mock transaction and only become visible in
/// `StoreState` on commit, mirroring the isolation the real store
/// provides.
pub struct MockAccountStore {
    state: Arc<Mutex<StoreState>>,
    fail_at: Option<InsertStep>,
}

impl MockAccountStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(StoreState::default())),
            fail_at: None,
        }
    }

    /// Seed an existing account for conflict checks.
    pub fn with_account(self, username: &str, email: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .existing
            .push((username.to_string(), email.to_string()));
        self
    }

    /// Seed a stored credential for login checks.
    pub fn with_credential(self, player_id: &str, password: &str) -> Self {
        self.state.lock().unwrap().credentials.push(StoredCredential {
            player_id: player_id.to_string(),
            nickname: player_id.to_string(),
            password: password.to_string(),
        });
        self
    }

    pub fn failing_at(mut self, step: InsertStep) -> Self {
        self.fail_at = Some(step);
        self
    }

    pub fn state(&self) -> StoreState {
        self.state.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn scan_conflicts(
        &self,
        username: &str,
        email: &str,
    ) -> Result<ConflictScan, DomainError> {
        let mut state = self.state.lock().unwrap();
        state.conflict_scans += 1;

        let mut scan = ConflictScan::default();
        for (existing_username, existing_email) in state
            .existing
            .iter()
            .cloned()
            .chain(state.accounts.iter().map(|a| (a.id.clone(), a.email.clone())))
            .collect::<Vec<_>>()
        {
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
        let state = self.state.lock().unwrap();
        Ok(state
            .credentials
            .iter()
            .find(|c| c.player_id == username)
            .cloned())
    }

    async fn begin_registration(&self) -> Result<Box<dyn RegistrationTxn>, DomainError> {
        self.state.lock().unwrap().transactions_opened += 1;
        Ok(Box::new(MockRegistrationTxn {
            state: self.state.clone(),
            fail_at: self.fail_at,
            pending: StoreState::default(),
        }))
    }
}

struct MockRegistrationTxn {
    state: Arc<Mutex<StoreState>>,
    fail_at: Option<InsertStep>,
    pending: StoreState,
}

impl MockRegistrationTxn {
    fn fail_if(&self, step: InsertStep) -> Result<(), DomainError> {
        if self.fail_at == Some(step) {
            Err(DomainError::database(format!("injected failure at {step:?}")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RegistrationTxn for MockRegistrationTxn {
    async fn insert_account(&mut self, record: &AccountRecord) -> Result<(), DomainError> {
        self.fail_if(InsertStep::Account)?;
        self.pending.accounts.push(record.clone());
        Ok(())
    }

    async fn insert_mirror_account(&mut self, record: &AccountRecord) -> Result<(), DomainError> {
        self.fail_if(InsertStep::MirrorAccount)?;
        self.pending.mirror_accounts.push(record.clone());
        Ok(())
    }

    async fn insert_game_profile(
        &mut self,
        record: &GameProfileRecord,
    ) -> Result<(), DomainError> {
        self.fail_if(InsertStep::GameProfile)?;
        self.pending.profiles.push(record.clone());
        Ok(())
    }

    async fn insert_cash_balance(&mut self, record: &CashRecord) -> Result<(), DomainError> {
        self.fail_if(InsertStep::CashBalance)?;
        self.pending.cash_rows.push(record.clone());
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        for account in &self.pending.accounts {
            state.credentials.push(StoredCredential {
                player_id: account.id.clone(),
                nickname: account.nickname.clone(),
                password: account.password.clone(),
            });
        }
        state.accounts.extend(self.pending.accounts);
        state.mirror_accounts.extend(self.pending.mirror_accounts);
        state.profiles.extend(self.pending.profiles);
        state.cash_rows.extend(self.pending.cash_rows);
        state.committed = true;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        // Pending rows are simply dropped.
        self.state.lock().unwrap().rolled_back = true;
        Ok(())
    }
}

/// In-memory `ProfileReader` over seeded rows.
#[derive(Default)]
pub struct MockProfileReader {
    leaderboard: Vec<LeaderboardRow>,
    profiles: Vec<PlayerProfile>,
    logins: Vec<LastSeenRow>,
    last_cutoff: Mutex<Option<DateTime<Utc>>>,
}

impl MockProfileReader {
    pub fn with_leaderboard(mut self, rows: Vec<(&str, i32)>) -> Self {
        self.leaderboard = rows
            .into_iter()
            .map(|(id, score)| LeaderboardRow {
                player_id: id.to_string(),
                total_score: score,
                total_grade: 19,
                money: 250_000,
                country_code: 207,
                last_login: None,
            })
            .collect();
        self
    }

    pub fn with_profile(mut self, id: &str, money: i64) -> Self {
        self.profiles.push(PlayerProfile {
            player_id: id.to_string(),
            total_grade: 19,
            money,
            cash: 125_000,
            country_code: 207,
            accum_shot: 0,
            last_login: None,
        });
        self
    }

    pub fn with_login(mut self, id: &str, server_port: i32, time: DateTime<Utc>) -> Self {
        self.logins.push(LastSeenRow {
            player_id: id.to_string(),
            server_port,
            last_login: time,
        });
        self
    }

    pub fn last_cutoff(&self) -> Option<DateTime<Utc>> {
        *self.last_cutoff.lock().unwrap()
    }
}

#[async_trait]
impl ProfileReader for MockProfileReader {
    async fn leaderboard(&self) -> Result<Vec<LeaderboardRow>, DomainError> {
        Ok(self.leaderboard.clone())
    }

    async fn profile(&self, player_id: &str) -> Result<Option<PlayerProfile>, DomainError> {
        Ok(self
            .profiles
            .iter()
            .find(|p| p.player_id == player_id)
            .cloned())
    }

    async fn last_seen(&self, cutoff: DateTime<Utc>) -> Result<Vec<LastSeenRow>, DomainError> {
        *self.last_cutoff.lock().unwrap() = Some(cutoff);
        Ok(self
            .logins
            .iter()
            .filter(|row| row.last_login > cutoff)
            .cloned()
            .collect())
    }
}

/// Identity credential scheme for tests.
pub struct PlainScheme;

impl CredentialScheme for PlainScheme {
    fn seal(&self, password: &str) -> String {
        password.to_string()
    }

    fn verify(&self, submitted: &str, stored: &str) -> bool {
        submitted == stored
    }
}
