use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::{
    AppointmentRepository, BarbershopRepository, ServiceRepository, StaffRepository,
    UserRepository,
};

/// Server state, shared handles behind `Arc`
///
/// Cloned into every request through the axum state mechanism; all
/// clones are shallow.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    /// Embedded database handle
    pub db: Surreal<Db>,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Open the database under the working directory and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            ServerError::Internal(anyhow::anyhow!(
                "Failed to create working directory {}: {e}",
                config.work_dir
            ))
        })?;

        let db_service = DbService::new(&config.db_path())
            .await
            .map_err(|e| ServerError::Internal(anyhow::anyhow!("Database init failed: {e}")))?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db_service.db, jwt_service))
    }

    /// In-memory state for tests
    #[doc(hidden)]
    pub async fn for_tests() -> Result<Self> {
        let db_service = DbService::memory()
            .await
            .map_err(|e| ServerError::Internal(anyhow::anyhow!("Database init failed: {e}")))?;

        let mut config = Config::with_overrides("/tmp/shear-test", 0);
        config.jwt = crate::auth::JwtConfig {
            secret: "test-secret-with-at-least-32-characters!".to_string(),
            expiration_minutes: 60,
            issuer: "shear-server".to_string(),
            audience: "shear-clients".to_string(),
        };
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config, db_service.db, jwt_service))
    }

    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    // Repository accessors; repositories are cheap handle wrappers
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.db.clone())
    }

    pub fn barbershops(&self) -> BarbershopRepository {
        BarbershopRepository::new(self.db.clone())
    }

    pub fn staff(&self) -> StaffRepository {
        StaffRepository::new(self.db.clone())
    }

    pub fn services(&self) -> ServiceRepository {
        ServiceRepository::new(self.db.clone())
    }

    pub fn appointments(&self) -> AppointmentRepository {
        AppointmentRepository::new(self.db.clone())
    }
}
