//! GetLeaderboard - query handler for the score-ordered player list.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::{LeaderboardRow, ProfileReader};

/// Handler for the leaderboard query.
///
/// An empty player table yields an empty list, not an error; list
/// endpoints are uniform about that.
pub struct GetLeaderboardHandler {
    reader: Arc<dyn ProfileReader>,
}

impl GetLeaderboardHandler {
    pub fn new(reader: Arc<dyn ProfileReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<LeaderboardRow>, DomainError> {
        self.reader.leaderboard().await
    }
}
