//! Service Repository

use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{BarbershopId, Service, ServiceId};

#[derive(Clone)]
pub struct ServiceRepository {
    base: BaseRepository,
}

impl ServiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find service by id
    pub async fn find_by_id(&self, id: &ServiceId) -> RepoResult<Option<Service>> {
        let service: Option<Service> = self.base.db().select(id.clone()).await?;
        Ok(service)
    }

    /// All services of a shop
    pub async fn find_by_shop(&self, shop: &BarbershopId) -> RepoResult<Vec<Service>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM service WHERE barbershop = $shop ORDER BY name")
            .bind(("shop", shop.clone()))
            .await?;
        let services: Vec<Service> = result.take(0)?;
        Ok(services)
    }

    /// Create a service on a shop
    pub async fn create(
        &self,
        shop: &BarbershopId,
        name: String,
        price: Decimal,
        duration_minutes: u32,
    ) -> RepoResult<Service> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE service SET
                    name = $name,
                    price = $price,
                    duration_minutes = $duration_minutes,
                    barbershop = $shop,
                    created_at = time::unix(time::now()),
                    updated_at = time::unix(time::now())
                RETURN AFTER"#,
            )
            .bind(("name", name))
            .bind(("price", price))
            .bind(("duration_minutes", duration_minutes))
            .bind(("shop", shop.clone()))
            .await?;

        let created: Option<Service> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create service".to_string()))
    }
}
