//! MySQL adapters over the shared game-server schema.

mod account_store;
mod profile_reader;

pub use account_store::MySqlAccountStore;
pub use profile_reader::MySqlProfileReader;

use crate::domain::foundation::DomainError;

/// Wrap a store failure; details stay server-side (the http adapter logs
/// them and replies with a generic payload).
fn db_err(context: &str, error: sqlx::Error) -> DomainError {
    DomainError::database(format!("{}: {}", context, error))
}
