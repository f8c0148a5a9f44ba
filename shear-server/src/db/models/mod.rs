//! Database record models
//!
//! Record-link representations of the persisted entities. Conversions to
//! the wire DTOs in `shared::models` live next to each record type.

pub mod appointment;
pub mod barbershop;
pub mod service;
pub mod staff;
pub mod user;

pub use appointment::{Appointment, AppointmentDetail, AppointmentId};
pub use barbershop::{Barbershop, BarbershopId};
pub use service::{Service, ServiceId};
pub use staff::{Staff, StaffDetail, StaffId, StaffWithUser};
pub use user::{User, UserId};
