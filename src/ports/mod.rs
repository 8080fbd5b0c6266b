//! Ports - interfaces between the application core and the outside world.
//!
//! Following hexagonal architecture, ports define the contracts the
//! adapters implement:
//!
//! - `AccountStore` / `RegistrationTxn` - write side of the shared schema,
//!   including the four-table registration transaction
//! - `ProfileReader` - read-only joins for leaderboard/profile/last-seen
//! - `CredentialScheme` - pluggable password sealing and verification

mod account_store;
mod credential_scheme;
mod profile_reader;

pub use account_store::{AccountStore, ConflictScan, RegistrationTxn, StoredCredential};
pub use credential_scheme::CredentialScheme;
pub use profile_reader::{LastSeenRow, LeaderboardRow, PlayerProfile, ProfileReader};
