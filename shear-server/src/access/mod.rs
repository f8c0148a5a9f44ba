//! Access control
//!
//! Three layers, applied in order:
//! - [`policy`] - role/feature table (can this role ever do this?)
//! - [`visibility`] - which shops the user can see at all
//! - [`guard`] - per-record ownership checks for mutations

pub mod guard;
pub mod policy;
pub mod visibility;

pub use policy::Permission;
pub use visibility::resolve_shop_ids;
