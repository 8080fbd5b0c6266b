//! CredentialScheme port: pluggable password storage and verification.
//!
//! The external game server reads the `Password` column directly and only
//! understands plaintext, so the scheme is selected by configuration: a
//! plain-compat mode for interop and a salted-hash mode for deployments
//! that do not share the schema with the game server.

/// Seals passwords for storage and verifies submissions against the
/// stored form.
pub trait CredentialScheme: Send + Sync {
    /// Transform a password into its stored representation.
    fn seal(&self, password: &str) -> String;

    /// Compare a submitted password against the stored representation.
    fn verify(&self, submitted: &str, stored: &str) -> bool;
}
