//! Booking domain rules
//!
//! Validation that sits between the HTTP layer and the repositories:
//! the appointment status machine and the shop-consistency checks a new
//! booking must pass. Overlap detection is deliberately absent; shops
//! resolve double-bookings on the floor.

pub mod lifecycle;

pub use lifecycle::{TransitionError, ensure_transition};
