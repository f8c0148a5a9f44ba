//! Barbershop Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::barbershop::{BarbershopResponse, OperatingHours, SubscriptionPlan};

use super::UserId;

/// Barbershop ID type
pub type BarbershopId = RecordId;

/// Barbershop record
///
/// `deleted_at` set means soft-deleted: hidden from listings and the
/// active-name uniqueness check, rows kept for appointment history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barbershop {
    #[serde(default)]
    pub id: Option<BarbershopId>,
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub plan: SubscriptionPlan,
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
    #[serde(default)]
    pub break_start: Option<String>,
    #[serde(default)]
    pub break_end: Option<String>,
    #[serde(default)]
    pub days_open: Vec<String>,
    pub owner: UserId,
    #[serde(default)]
    pub deleted_at: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Barbershop {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn to_response(&self) -> BarbershopResponse {
        BarbershopResponse {
            id: self.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            plan: self.plan,
            hours: OperatingHours {
                open_time: self.open_time.clone(),
                close_time: self.close_time.clone(),
                break_start: self.break_start.clone(),
                break_end: self.break_end.clone(),
            },
            days_open: self.days_open.clone(),
            owner_id: self.owner.to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
