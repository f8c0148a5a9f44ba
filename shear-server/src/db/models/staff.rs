//! Staff link model
//!
//! The membership record tying a user to exactly one barbershop in a
//! staff capacity. This is how `admin`, `co-owner` and `capster` roles
//! (and, secondarily, moonlighting owners) gain visibility into a shop.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::StaffResponse;

use super::{Barbershop, BarbershopId, User, UserId};

/// Staff link ID type
pub type StaffId = RecordId;

/// Staff link record (raw record links)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    #[serde(default)]
    pub id: Option<StaffId>,
    pub user: UserId,
    pub barbershop: BarbershopId,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Staff link with the user record fetched
///
/// Shape of `SELECT * FROM staff ... FETCH user`.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffWithUser {
    #[serde(default)]
    pub id: Option<StaffId>,
    pub user: User,
    pub barbershop: BarbershopId,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// Staff link with user and barbershop fetched
///
/// Shape of `SELECT * FROM staff ... FETCH user, barbershop`.
#[derive(Debug, Clone, Deserialize)]
pub struct StaffDetail {
    #[serde(default)]
    pub id: Option<StaffId>,
    pub user: User,
    pub barbershop: Barbershop,
    #[serde(default)]
    pub specialization: Option<String>,
}

impl StaffDetail {
    pub fn to_response(&self) -> StaffResponse {
        StaffResponse {
            id: self.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            user: self.user.to_info(),
            barbershop_id: self
                .barbershop
                .id
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            barbershop_name: self.barbershop.name.clone(),
            specialization: self.specialization.clone(),
        }
    }
}
