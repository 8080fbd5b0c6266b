//! Foundation types shared across the domain.

mod clock;
mod errors;

pub use clock::{Clock, SystemClock};
pub use errors::{DomainError, ErrorCode};

#[cfg(test)]
pub use clock::test_support::FixedClock;
