//! Salted-hash credential scheme.
//!
//! Stores `salt$hexdigest` where the digest is SHA-256 over salt bytes
//! followed by password bytes. Only usable when the schema is not shared
//! with the game server, which expects plaintext.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::ports::CredentialScheme;

pub struct SaltedSha256Scheme;

impl SaltedSha256Scheme {
    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

impl CredentialScheme for SaltedSha256Scheme {
    fn seal(&self, password: &str) -> String {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(&salt, password);
        format!("{}${}", salt, digest)
    }

    fn verify(&self, submitted: &str, stored: &str) -> bool {
        let Some((salt, digest)) = stored.split_once('$') else {
            return false;
        };
        let candidate = Self::digest(salt, submitted);
        if candidate.len() != digest.len() {
            return false;
        }
        candidate.as_bytes().ct_eq(digest.as_bytes()).into()
    }
}
