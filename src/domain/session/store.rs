//! In-process session store with lazy expiry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::foundation::{Clock, DomainError, ErrorCode};

/// Identity carried by an active session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub player_id: String,
    pub nickname: String,
}

struct Entry {
    user: SessionUser,
    expires_at: DateTime<Utc>,
}

/// Process-wide session table keyed by opaque token.
///
/// Expiry is an idle window: a successful resolve pushes the deadline out
/// again. Expired entries are dropped lazily on access; there is no sweep
/// task.
pub struct SessionStore {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, Entry>>,
}

impl SessionStore {
    pub fn new(ttl: StdDuration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::hours(1)),
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    // No session operation leaves the map in an inconsistent state, so a
    // poisoned lock is recoverable.
    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open a session and return its opaque token.
    pub fn create(&self, player_id: impl Into<String>, nickname: impl Into<String>) -> String {
        let token = Uuid::new_v4().to_string();
        let entry = Entry {
            user: SessionUser {
                player_id: player_id.into(),
                nickname: nickname.into(),
            },
            expires_at: self.clock.now() + self.ttl,
        };
        self.entries().insert(token.clone(), entry);
        token
    }

    /// Look up a token; unknown or expired tokens are anonymous.
    pub fn resolve(&self, token: &str) -> Option<SessionUser> {
        let now = self.clock.now();
        let mut entries = self.entries();
        match entries.get_mut(token) {
            Some(entry) if entry.expires_at > now => {
                entry.expires_at = now + self.ttl;
                Some(entry.user.clone())
            }
            Some(_) => {
                entries.remove(token);
                None
            }
            None => None,
        }
    }

    /// Destroy a session; fails when the token is unknown or expired.
    pub fn destroy(&self, token: &str) -> Result<(), DomainError> {
        let now = self.clock.now();
        let mut entries = self.entries();
        match entries.remove(token) {
            Some(entry) if entry.expires_at > now => Ok(()),
            _ => Err(DomainError::new(
                ErrorCode::NoActiveSession,
                "No active session found",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FixedClock;
    use chrono::TimeZone;

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        ))
    }

    fn store(clock: Arc<FixedClock>) -> SessionStore {
        SessionStore::new(StdDuration::from_secs(3600), clock)
    }

    #[test]
    fn created_session_resolves_to_its_user() {
        let clock = fixed_clock();
        let store = store(clock);
        let token = store.create("alice", "alice");

        let user = store.resolve(&token).unwrap();
        assert_eq!(user.player_id, "alice");
        assert_eq!(user.nickname, "alice");
    }

    #[test]
    fn unknown_token_is_anonymous() {
        let store = store(fixed_clock());
        assert!(store.resolve("not-a-token").is_none());
    }

    #[test]
    fn session_expires_after_idle_window() {
        let clock = fixed_clock();
        let store = store(clock.clone());
        let token = store.create("alice", "alice");

        clock.advance(Duration::seconds(3601));
        assert!(store.resolve(&token).is_none());
    }

    #[test]
    fn resolve_refreshes_the_idle_window() {
        let clock = fixed_clock();
        let store = store(clock.clone());
        let token = store.create("alice", "alice");

        // Touch the session just before expiry, then cross the original
        // deadline; the refreshed window keeps it alive.
        clock.advance(Duration::seconds(3000));
        assert!(store.resolve(&token).is_some());
        clock.advance(Duration::seconds(3000));
        assert!(store.resolve(&token).is_some());
    }

    #[test]
    fn destroy_removes_the_session() {
        let store = store(fixed_clock());
        let token = store.create("alice", "alice");

        assert!(store.destroy(&token).is_ok());
        assert!(store.resolve(&token).is_none());
    }

    #[test]
    fn destroy_without_session_is_a_client_error() {
        let store = store(fixed_clock());
        let err = store.destroy("not-a-token").unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoActiveSession);
    }

    #[test]
    fn destroying_an_expired_session_reports_no_active_session() {
        let clock = fixed_clock();
        let store = store(clock.clone());
        let token = store.create("alice", "alice");

        clock.advance(Duration::seconds(7200));
        let err = store.destroy(&token).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NoActiveSession);
    }

    #[test]
    fn tokens_are_unique_per_session() {
        let store = store(fixed_clock());
        let a = store.create("alice", "alice");
        let b = store.create("bob", "bob");
        assert_ne!(a, b);
        assert_eq!(store.resolve(&b).unwrap().player_id, "bob");
    }
}
