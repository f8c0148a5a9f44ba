//! Service Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::ServiceResponse;

use super::BarbershopId;

/// Service ID type
pub type ServiceId = RecordId;

/// Service record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: Option<ServiceId>,
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: u32,
    pub barbershop: BarbershopId,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Service {
    pub fn to_response(&self) -> ServiceResponse {
        ServiceResponse {
            id: self.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            name: self.name.clone(),
            price: self.price,
            duration_minutes: self.duration_minutes,
            barbershop_id: self.barbershop.to_string(),
        }
    }
}
