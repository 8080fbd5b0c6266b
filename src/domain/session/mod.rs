//! Server-side session state.

mod store;

pub use store::{SessionStore, SessionUser};
