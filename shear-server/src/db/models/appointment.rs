//! Appointment Model

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{AppointmentResponse, AppointmentStatus};

use super::{Barbershop, BarbershopId, Service, ServiceId, StaffId, StaffWithUser, UserId};

/// Appointment ID type
pub type AppointmentId = RecordId;

/// Appointment record
///
/// Never deleted; only the status field moves, through the lifecycle
/// transitions in `booking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub id: Option<AppointmentId>,
    pub barbershop: BarbershopId,
    pub service: ServiceId,
    pub staff: StaffId,
    pub customer: UserId,
    /// Unix seconds, UTC
    pub scheduled_at: i64,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Appointment with display fields fetched
///
/// Shape of `SELECT * FROM appointment ... FETCH barbershop, service,
/// staff, staff.user, customer`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentDetail {
    #[serde(default)]
    pub id: Option<AppointmentId>,
    pub barbershop: Barbershop,
    pub service: Service,
    pub staff: StaffWithUser,
    pub customer: super::User,
    pub scheduled_at: i64,
    pub status: AppointmentStatus,
}

impl AppointmentDetail {
    pub fn to_response(&self) -> AppointmentResponse {
        AppointmentResponse {
            id: self.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            barbershop_id: self
                .barbershop
                .id
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            barbershop_name: self.barbershop.name.clone(),
            service_id: self
                .service
                .id
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            service_name: self.service.name.clone(),
            staff_id: self
                .staff
                .id
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            staff_name: self.staff.user.name.clone(),
            customer_id: self
                .customer
                .id
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_default(),
            customer_name: self.customer.name.clone(),
            scheduled_at: DateTime::from_timestamp(self.scheduled_at, 0)
                .unwrap_or(DateTime::UNIX_EPOCH),
            status: self.status,
        }
    }
}
