//! Users HTTP adapter: registration and profile reads.

mod dto;
mod handlers;
mod routes;

pub use handlers::UserHandlers;
pub use routes::user_routes;
