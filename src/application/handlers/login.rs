//! Login - verifies a credential and opens a session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::session::SessionStore;
use crate::ports::{AccountStore, CredentialScheme};

/// Command to log a player in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub player_id: String,
    pub nickname: String,
}

/// Handler for session login.
pub struct LoginHandler {
    store: Arc<dyn AccountStore>,
    credentials: Arc<dyn CredentialScheme>,
    sessions: Arc<SessionStore>,
}

impl LoginHandler {
    pub fn new(
        store: Arc<dyn AccountStore>,
        credentials: Arc<dyn CredentialScheme>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            store,
            credentials,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, DomainError> {
        if cmd.username.is_empty() || cmd.password.is_empty() {
            return Err(DomainError::validation(
                "Username and password are required",
            ));
        }

        // Unknown user and bad password produce the same error so the
        // endpoint does not reveal which usernames exist.
        let stored = self
            .store
            .fetch_credential(&cmd.username)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.credentials.verify(&cmd.password, &stored.password) {
            return Err(invalid_credentials());
        }

        let token = self.sessions.create(&stored.player_id, &stored.nickname);

        Ok(LoginResult {
            token,
            player_id: stored.player_id,
            nickname: stored.nickname,
        })
    }
}

fn invalid_credentials() -> DomainError {
    DomainError::new(ErrorCode::InvalidCredentials, "Invalid username or password")
}
