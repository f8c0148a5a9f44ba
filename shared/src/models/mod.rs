//! Domain model DTOs
//!
//! String-ID representations of the persisted entities, as they travel
//! over the wire. The server's `db::models` module owns the record-link
//! representations.

pub mod appointment;
pub mod barbershop;
pub mod role;
pub mod service;
pub mod staff;
pub mod user;

pub use appointment::{
    AppointmentCreate, AppointmentResponse, AppointmentStatus, AppointmentStatusUpdate,
};
pub use barbershop::{
    BarbershopCreate, BarbershopResponse, BarbershopUpdate, OperatingHours, PublicBarbershop,
    SubscriptionPlan,
};
pub use role::Role;
pub use service::{ServiceCreate, ServiceResponse};
pub use staff::{StaffCreate, StaffResponse, StaffUpdate};
pub use user::UserInfo;
