//! Credential scheme adapters.

mod plain;
mod salted_sha256;

pub use plain::PlainCompatScheme;
pub use salted_sha256::SaltedSha256Scheme;

use std::sync::Arc;

use crate::config::PasswordMode;
use crate::ports::CredentialScheme;

/// Select the credential scheme for the configured mode.
pub fn scheme_for(mode: PasswordMode) -> Arc<dyn CredentialScheme> {
    match mode {
        PasswordMode::Plain => Arc::new(PlainCompatScheme),
        PasswordMode::Hashed => Arc::new(SaltedSha256Scheme),
    }
}
