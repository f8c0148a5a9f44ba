//! Shared types for the Shear booking platform
//!
//! Wire-visible types used by the server and any client binaries:
//! request/response DTOs, the role and permission vocabulary, and the
//! appointment status enum. Server-internal types (database records,
//! repositories) live in `shear-server`.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{AppointmentStatus, Role, SubscriptionPlan};
