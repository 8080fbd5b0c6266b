//! Plain-compat credential scheme.
//!
//! The external game server reads the `Password` column verbatim, so this
//! scheme stores the password unchanged. Verification is still
//! constant-time for equal-length inputs.

use subtle::ConstantTimeEq;

use crate::ports::CredentialScheme;

pub struct PlainCompatScheme;

impl CredentialScheme for PlainCompatScheme {
    fn seal(&self, password: &str) -> String {
        password.to_string()
    }

    fn verify(&self, submitted: &str, stored: &str) -> bool {
        if submitted.len() != stored.len() {
            return false;
        }
        submitted.as_bytes().ct_eq(stored.as_bytes()).into()
    }
}
