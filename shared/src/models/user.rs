//! User DTOs

use super::Role;
use serde::{Deserialize, Serialize};

/// User information (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: i64,
}
