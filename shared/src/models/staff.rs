//! Staff link DTOs

use super::{Role, UserInfo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::client::validate_password;

/// Staff link response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffResponse {
    pub id: String,
    pub user: UserInfo,
    pub barbershop_id: String,
    pub barbershop_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

fn default_staff_role() -> Role {
    Role::Capster
}

/// Create staff payload
///
/// Creates the user account and the staff link in one atomic step.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StaffCreate {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,
    #[validate(custom(function = validate_password))]
    pub password: String,
    pub barbershop_id: String,
    #[validate(length(max = 100, message = "Specialization must be at most 100 characters"))]
    pub specialization: Option<String>,
    /// Staff role for the new user; owner/customer are not assignable here
    #[serde(default = "default_staff_role")]
    pub role: Role,
}

/// Partial staff update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StaffUpdate {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Please enter a valid email"))]
    pub email: Option<String>,
    pub role: Option<Role>,
    #[validate(length(max = 100, message = "Specialization must be at most 100 characters"))]
    pub specialization: Option<String>,
}
