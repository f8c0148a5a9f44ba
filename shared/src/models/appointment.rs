//! Appointment DTOs and status vocabulary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Appointment status
///
/// The legal transitions are enforced server-side by `booking::lifecycle`;
/// this enum is just the wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appointment response, with display fields resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub barbershop_id: String,
    pub barbershop_name: String,
    pub service_id: String,
    pub service_name: String,
    pub staff_id: String,
    pub staff_name: String,
    pub customer_id: String,
    pub customer_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// Booking payload
///
/// Status is not accepted from the client; new appointments always start
/// as PENDING.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentCreate {
    pub barbershop_id: String,
    pub staff_id: String,
    pub service_id: String,
    pub scheduled_at: DateTime<Utc>,
}

/// Status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentStatusUpdate {
    pub status: AppointmentStatus,
}
