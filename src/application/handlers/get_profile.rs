//! GetProfile - query handler for a single player profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{PlayerProfile, ProfileReader};

/// Handler for the single-profile query.
pub struct GetProfileHandler {
    reader: Arc<dyn ProfileReader>,
}

impl GetProfileHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, player_id: &str) -> Result<PlayerProfile, DomainError> {
        self.reader
            .profile(player_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::NotFound, "No user found"))
    }
}
