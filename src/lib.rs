//! Account Gateway - account and profile API for a legacy game server.
//!
//! Brokers HTTP requests (registration, session login, leaderboard reads)
//! into the MySQL schema shared with the external game-server process.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
