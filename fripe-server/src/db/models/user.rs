//! User model
//!
//! Accounts are managed by the external auth service; the order core only
//! reads them for participant checks and notification email addresses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// "buyer" | "seller"
    pub role: String,
    /// Shop display name for seller accounts
    pub store_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create-user payload for the repository (seeding and tests)
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub role: String,
    pub store_name: Option<String>,
}
