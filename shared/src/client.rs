//! Auth DTOs shared by the REST client and its callers

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: Usuario,
}

/// Authenticated user (`/api/auth/me`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub rol: Option<String>,
}
