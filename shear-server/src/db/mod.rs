//! Database Module
//!
//! Embedded SurrealDB service: connection, namespace selection, and
//! schema definition (unique indexes the domain invariants rely on).

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the on-disk database and apply the schema.
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("shear")
            .use_db("main")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        tracing::info!(path = %db_path, "Database connection established");
        Ok(Self { db })
    }

    /// In-memory database for tests.
    #[doc(hidden)]
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<surrealdb::engine::local::Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory db: {e}")))?;
        db.use_ns("shear")
            .use_db("test")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
        define_schema(&db).await?;
        Ok(Self { db })
    }
}

/// Schema definition, idempotent (`IF NOT EXISTS`).
///
/// Two invariants are enforced at the storage layer:
/// - `user.email` is unique
/// - `staff.user` is unique (a user holds at most one staff link)
///
/// Active-shop name uniqueness cannot be a plain unique index (soft-deleted
/// rows free the name), so it is checked adjacent to the write in the
/// barbershop repository.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE INDEX IF NOT EXISTS user_email_unique ON TABLE user COLUMNS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS staff_user_unique ON TABLE staff COLUMNS user UNIQUE;
        DEFINE INDEX IF NOT EXISTS staff_shop_idx ON TABLE staff COLUMNS barbershop;
        DEFINE INDEX IF NOT EXISTS barbershop_owner_idx ON TABLE barbershop COLUMNS owner;
        DEFINE INDEX IF NOT EXISTS appointment_shop_idx ON TABLE appointment COLUMNS barbershop;
        DEFINE INDEX IF NOT EXISTS appointment_customer_idx ON TABLE appointment COLUMNS customer;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn on_disk_database_opens_and_schema_is_idempotent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("data.db");
        let path = path.to_str().expect("utf-8 path");

        let service = DbService::new(path).await.expect("open");
        // Second define pass must not fail
        define_schema(&service.db).await.expect("redefine");
    }

    #[tokio::test]
    async fn unique_email_index_rejects_duplicates() {
        let service = DbService::memory().await.expect("memory");
        service
            .db
            .query("CREATE user SET name = 'a', email = 'dup@example.com', hash_pass = 'x', role = 'customer', created_at = 0, updated_at = 0")
            .await
            .expect("first insert");

        let result = service
            .db
            .query("CREATE user SET name = 'b', email = 'dup@example.com', hash_pass = 'x', role = 'customer', created_at = 0, updated_at = 0")
            .await
            .expect("query ran")
            .check();
        assert!(result.is_err(), "unique index should reject the duplicate");
    }
}
