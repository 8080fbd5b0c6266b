//! RegisterAccount - command handler for the multi-table registration
//! transaction.
//!
//! Either all four rows (account, mirrored account, game profile, cash
//! balance) are created, or none are. The schema fans out across four
//! tables because the external game server expects them populated
//! independently; the store transaction is the only thing preventing
//! partially-created, unusable accounts.

use std::sync::Arc;

use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::domain::account::{AccountTier, NewPlayer, Registration, RegistrationDefaults};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{AccountStore, CredentialScheme};

/// Command to register a new player.
#[derive(Debug, Clone)]
pub struct RegisterAccountCommand {
    pub username: String,
    pub password: String,
    pub email: String,
    pub gender: String,
    pub country: String,
    pub admin_token: Option<String>,
}

/// Result of a successful registration. Never carries the credential.
#[derive(Debug, Clone)]
pub struct RegisterAccountResult {
    pub player_id: String,
    pub tier: AccountTier,
}

/// Handler for player registration.
pub struct RegisterAccountHandler {
    store: Arc<dyn AccountStore>,
    credentials: Arc<dyn CredentialScheme>,
    admin_token: Secret<String>,
}

impl RegisterAccountHandler {
    pub fn new(
        store: Arc<dyn AccountStore>,
        credentials: Arc<dyn CredentialScheme>,
        admin_token: Secret<String>,
    ) -> Self {
        Self {
            store,
            credentials,
            admin_token,
        }
    }

    pub async fn handle(
        &self,
        cmd: RegisterAccountCommand,
    ) -> Result<RegisterAccountResult, DomainError> {
        // 1. Validate and map enumerations before any store access.
        let registration = Registration::new(
            &cmd.username,
            &cmd.password,
            &cmd.email,
            &cmd.gender,
            &cmd.country,
        )?;

        // 2. Admin elevation via the shared secret.
        let tier = if self.is_admin_token(cmd.admin_token.as_deref()) {
            AccountTier::Admin
        } else {
            AccountTier::Standard
        };

        // 3. Uniqueness scan; username conflict takes precedence.
        let scan = self
            .store
            .scan_conflicts(registration.username(), registration.email())
            .await?;
        if scan.username_taken {
            return Err(DomainError::new(
                ErrorCode::UsernameTaken,
                "This username is already taken. Please choose another.",
            ));
        }
        if scan.email_taken {
            return Err(DomainError::new(
                ErrorCode::EmailTaken,
                "This email is already in use. Did you mean to log in instead?",
            ));
        }

        // 4. Assemble all four rows up front.
        let sealed = self.credentials.seal(registration.password());
        let player = NewPlayer::assemble(
            &registration,
            sealed,
            RegistrationDefaults::for_tier(tier),
        );

        // 5. Atomic fan-out inside the store's native transaction.
        let mut txn = self.store.begin_registration().await?;

        let steps = async {
            txn.insert_account(&player.account).await?;
            txn.insert_mirror_account(&player.account).await?;
            txn.insert_game_profile(&player.profile).await?;
            txn.insert_cash_balance(&player.cash).await?;
            Ok::<(), DomainError>(())
        }
        .await;

        if let Err(err) = steps {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(error = %rollback_err, "registration rollback failed");
            }
            return Err(err);
        }

        txn.commit().await?;

        Ok(RegisterAccountResult {
            player_id: player.account.id,
            tier,
        })
    }

    fn is_admin_token(&self, submitted: Option<&str>) -> bool {
        let expected = self.admin_token.expose_secret();
        // An unset secret grants nothing; comparison is constant-time for
        // equal-length inputs.
        match submitted {
            Some(token) if !expected.is_empty() && token.len() == expected.len() => {
                token.as_bytes().ct_eq(expected.as_bytes()).into()
            }
            _ => false,
        }
    }
}
