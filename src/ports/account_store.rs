//! AccountStore port: write side of the account schema.

use async_trait::async_trait;

use crate::domain::account::{AccountRecord, CashRecord, GameProfileRecord};
use crate::domain::foundation::DomainError;

/// Result of the registration uniqueness scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictScan {
    pub username_taken: bool,
    pub email_taken: bool,
}

/// Credential row fetched for login.
#[derive(Debug, Clone)]
pub struct StoredCredential {
    pub player_id: String,
    pub nickname: String,
    pub password: String,
}

/// Store operations for accounts and the registration write path.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Scan existing accounts for username or email collisions.
    async fn scan_conflicts(
        &self,
        username: &str,
        email: &str,
    ) -> Result<ConflictScan, DomainError>;

    /// Fetch the stored credential for a username, if the account exists.
    async fn fetch_credential(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredential>, DomainError>;

    /// Open the store's native transaction for a registration fan-out.
    async fn begin_registration(&self) -> Result<Box<dyn RegistrationTxn>, DomainError>;
}

/// One in-flight registration transaction.
///
/// All four inserts happen against the same store transaction; nothing is
/// visible to other connections until `commit`. Dropping the transaction
/// without committing also rolls back, but the registration handler calls
/// `rollback` explicitly so failures are surfaced deterministically.
#[async_trait]
pub trait RegistrationTxn: Send {
    async fn insert_account(&mut self, record: &AccountRecord) -> Result<(), DomainError>;

    /// Insert the mirrored account row the external consumer reads.
    async fn insert_mirror_account(&mut self, record: &AccountRecord) -> Result<(), DomainError>;

    async fn insert_game_profile(&mut self, record: &GameProfileRecord)
        -> Result<(), DomainError>;

    async fn insert_cash_balance(&mut self, record: &CashRecord) -> Result<(), DomainError>;

    async fn commit(self: Box<Self>) -> Result<(), DomainError>;

    async fn rollback(self: Box<Self>) -> Result<(), DomainError>;
}
