//! Domain layer: pure types and logic, no I/O.

pub mod account;
pub mod display;
pub mod foundation;
pub mod session;
