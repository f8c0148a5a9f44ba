//! Service DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Service response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub duration_minutes: u32,
    pub barbershop_id: String,
}

/// Create service payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceCreate {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Must be >= 0; checked in the handler (validator has no Decimal range rule)
    pub price: Decimal,
    #[validate(range(min = 1, max = 600, message = "Duration must be 1-600 minutes"))]
    pub duration_minutes: u32,
    pub barbershop_id: String,
}
