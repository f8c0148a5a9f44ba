//! Repository Module
//!
//! All query text lives here; handlers never see raw database errors.

pub mod appointment;
pub mod barbershop;
pub mod service;
pub mod staff;
pub mod user;

// Re-exports
pub use appointment::AppointmentRepository;
pub use barbershop::BarbershopRepository;
pub use service::ServiceRepository;
pub use staff::StaffRepository;
pub use user::UserRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key" strings end to end
// =============================================================================
//
// surrealdb::RecordId carries every ID:
//   - parse:  let id: RecordId = "barbershop:abc".parse()?;
//   - table:  id.table()
//   - CRUD:   db.select(id) / db.delete(id) take RecordId directly

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
