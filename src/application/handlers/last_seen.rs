//! LastSeen - query handler for the recent-login report.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::foundation::{Clock, DomainError, ErrorCode};
use crate::ports::{LastSeenRow, ProfileReader};

/// Handler for the last-seen query.
///
/// The lookback window is a pure query parameter; the cutoff is computed
/// from the injected clock at request time.
pub struct LastSeenHandler {
    reader: Arc<dyn ProfileReader>,
    clock: Arc<dyn Clock>,
}

impl LastSeenHandler {
    pub fn new(reader: Arc<dyn ProfileReader>, clock: Arc<dyn Clock>) -> Self {
        Self { reader, clock }
    }

    pub async fn handle(&self, days: i64) -> Result<Vec<LastSeenRow>, DomainError> {
        if days <= 0 {
            return Err(invalid_days());
        }

        // Values past chrono's representable range are rejected like any
        // other out-of-range parameter instead of panicking.
        let window = Duration::try_days(days).ok_or_else(invalid_days)?;
        let cutoff = self
            .clock
            .now()
            .checked_sub_signed(window)
            .ok_or_else(invalid_days)?;
        self.reader.last_seen(cutoff).await
    }
}

fn invalid_days() -> DomainError {
    DomainError::new(
        ErrorCode::InvalidParameter,
        "days must be a positive integer",
    )
}
