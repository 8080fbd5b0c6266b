//! Logout - destroys the caller's session.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::session::SessionStore;

/// Handler for session logout.
pub struct LogoutHandler {
    sessions: Arc<SessionStore>,
}

impl LogoutHandler {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    /// Destroy the session behind `token`; a request without a session
    /// cookie is a client error, not a server error.
    pub fn handle(&self, token: Option<&str>) -> Result<(), DomainError> {
        let token = token.ok_or_else(|| {
            DomainError::new(ErrorCode::NoActiveSession, "No active session found")
        })?;
        self.sessions.destroy(token)
    }
}
