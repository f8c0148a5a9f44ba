//! Barbershop DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::service::ServiceResponse;

/// Subscription plan label
///
/// A label only; no billing logic hangs off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    #[default]
    Basic,
    Premium,
    Enterprise,
}

/// Operating hours, with an optional break window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatingHours {
    /// "HH:MM", shop local time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_end: Option<String>,
}

/// Barbershop response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarbershopResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub plan: SubscriptionPlan,
    #[serde(default)]
    pub hours: OperatingHours,
    #[serde(default)]
    pub days_open: Vec<String>,
    pub owner_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create barbershop payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BarbershopCreate {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(length(min = 5, max = 200, message = "Address must be 5-200 characters"))]
    pub address: String,
    #[validate(length(min = 10, max = 15, message = "Phone number must be 10-15 digits"))]
    pub phone: String,
    #[serde(default)]
    pub plan: SubscriptionPlan,
    #[serde(default)]
    pub hours: OperatingHours,
    #[serde(default)]
    pub days_open: Vec<String>,
}

/// Partial update payload
///
/// `None` means "leave unchanged". An empty string is a value and will be
/// rejected by the length rules, never silently dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BarbershopUpdate {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 5, max = 200, message = "Address must be 5-200 characters"))]
    pub address: Option<String>,
    #[validate(length(min = 10, max = 15, message = "Phone number must be 10-15 digits"))]
    pub phone: Option<String>,
    pub plan: Option<SubscriptionPlan>,
    pub hours: Option<OperatingHours>,
    pub days_open: Option<Vec<String>>,
}

/// Public listing entry (unauthenticated browse/search)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicBarbershop {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub services: Vec<ServiceResponse>,
    /// Display names of bookable staff
    #[serde(default)]
    pub staff_names: Vec<String>,
}
