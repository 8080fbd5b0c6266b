//! Application handlers - one command/query handler per operation.

mod get_leaderboard;
mod get_profile;
mod last_seen;
mod login;
mod logout;
mod register_account;

pub use get_leaderboard::GetLeaderboardHandler;
pub use get_profile::GetProfileHandler;
pub use last_seen::LastSeenHandler;
pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use logout::LogoutHandler;
pub use register_account::{RegisterAccountCommand, RegisterAccountHandler, RegisterAccountResult};

#[cfg(test)]
pub mod test_support;
