//! HTTP DTOs for auth endpoints.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Plain message response.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
