//! Barbershop Repository

use std::collections::HashSet;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::{BarbershopCreate, BarbershopUpdate};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Barbershop, BarbershopId, UserId};

#[derive(Clone)]
pub struct BarbershopRepository {
    base: BaseRepository,
}

impl BarbershopRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find shop by id (soft-deleted rows included; callers decide)
    pub async fn find_by_id(&self, id: &BarbershopId) -> RepoResult<Option<Barbershop>> {
        let shop: Option<Barbershop> = self.base.db().select(id.clone()).await?;
        Ok(shop)
    }

    /// Find an active (non-deleted) shop by exact name
    pub async fn find_active_by_name(&self, name: &str) -> RepoResult<Option<Barbershop>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM barbershop WHERE name = $name AND deleted_at = NONE LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let shops: Vec<Barbershop> = result.take(0)?;
        Ok(shops.into_iter().next())
    }

    /// Active shops primary-owned by a user
    pub async fn find_owned_by(&self, owner: &UserId) -> RepoResult<Vec<Barbershop>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM barbershop WHERE owner = $owner AND deleted_at = NONE ORDER BY name",
            )
            .bind(("owner", owner.clone()))
            .await?;
        let shops: Vec<Barbershop> = result.take(0)?;
        Ok(shops)
    }

    /// Active shops from an id set (the caller's visibility set)
    pub async fn find_by_ids(&self, ids: &HashSet<BarbershopId>) -> RepoResult<Vec<Barbershop>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let id_vec: Vec<BarbershopId> = ids.iter().cloned().collect();
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM barbershop WHERE id IN $ids AND deleted_at = NONE ORDER BY name",
            )
            .bind(("ids", id_vec))
            .await?;
        let shops: Vec<Barbershop> = result.take(0)?;
        Ok(shops)
    }

    /// Public browse/search over active shops (case-insensitive substring)
    pub async fn public_search(&self, search: Option<String>) -> RepoResult<Vec<Barbershop>> {
        let needle = search.unwrap_or_default().to_lowercase();
        let mut result = self
            .base
            .db()
            .query(
                r#"SELECT * FROM barbershop
                   WHERE deleted_at = NONE
                     AND string::lowercase(name) CONTAINS $search
                   ORDER BY name"#,
            )
            .bind(("search", needle))
            .await?;
        let shops: Vec<Barbershop> = result.take(0)?;
        Ok(shops)
    }

    /// Create a shop owned by `owner`
    ///
    /// Name uniqueness is checked against active rows only; a soft-deleted
    /// shop frees its name.
    pub async fn create(&self, owner: &UserId, data: BarbershopCreate) -> RepoResult<Barbershop> {
        if self.find_active_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Barbershop name '{}' already in use",
                data.name
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE barbershop SET
                    name = $name,
                    address = $address,
                    phone = $phone,
                    plan = $plan,
                    open_time = $open_time,
                    close_time = $close_time,
                    break_start = $break_start,
                    break_end = $break_end,
                    days_open = $days_open,
                    owner = $owner,
                    deleted_at = NONE,
                    created_at = time::unix(time::now()),
                    updated_at = time::unix(time::now())
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("address", data.address))
            .bind(("phone", data.phone))
            .bind(("plan", data.plan))
            .bind(("open_time", data.hours.open_time))
            .bind(("close_time", data.hours.close_time))
            .bind(("break_start", data.hours.break_start))
            .bind(("break_end", data.hours.break_end))
            .bind(("days_open", data.days_open))
            .bind(("owner", owner.clone()))
            .await?;

        let created: Option<Barbershop> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create barbershop".to_string()))
    }

    /// Partial update: a field is written iff it is present in the payload
    pub async fn update(
        &self,
        id: &BarbershopId,
        data: BarbershopUpdate,
    ) -> RepoResult<Barbershop> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Barbershop {id} not found")))?;
        if existing.is_deleted() {
            return Err(RepoError::NotFound(format!("Barbershop {id} not found")));
        }

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_active_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Barbershop name '{new_name}' already in use"
            )));
        }

        let (hours_present, hours) = match data.hours {
            Some(h) => (true, h),
            None => (false, Default::default()),
        };

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $shop SET
                    name = IF $has_name THEN $name ELSE name END,
                    address = IF $has_address THEN $address ELSE address END,
                    phone = IF $has_phone THEN $phone ELSE phone END,
                    plan = IF $has_plan THEN $plan ELSE plan END,
                    open_time = IF $has_hours THEN $open_time ELSE open_time END,
                    close_time = IF $has_hours THEN $close_time ELSE close_time END,
                    break_start = IF $has_hours THEN $break_start ELSE break_start END,
                    break_end = IF $has_hours THEN $break_end ELSE break_end END,
                    days_open = IF $has_days THEN $days_open ELSE days_open END,
                    updated_at = time::unix(time::now())
                RETURN AFTER"#,
            )
            .bind(("shop", id.clone()))
            .bind(("has_name", data.name.is_some()))
            .bind(("name", data.name))
            .bind(("has_address", data.address.is_some()))
            .bind(("address", data.address))
            .bind(("has_phone", data.phone.is_some()))
            .bind(("phone", data.phone))
            .bind(("has_plan", data.plan.is_some()))
            .bind(("plan", data.plan))
            .bind(("has_hours", hours_present))
            .bind(("open_time", hours.open_time))
            .bind(("close_time", hours.close_time))
            .bind(("break_start", hours.break_start))
            .bind(("break_end", hours.break_end))
            .bind(("has_days", data.days_open.is_some()))
            .bind(("days_open", data.days_open))
            .await?;

        result
            .take::<Option<Barbershop>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Barbershop {id} not found")))
    }

    /// Soft-delete a shop and remove its staff links in one transaction
    ///
    /// Appointments and services are kept for history; the shop row stays
    /// with `deleted_at` set so those references never dangle.
    pub async fn soft_delete(&self, id: &BarbershopId) -> RepoResult<bool> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Barbershop {id} not found")))?;
        if existing.is_deleted() {
            return Err(RepoError::NotFound(format!("Barbershop {id} not found")));
        }

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                UPDATE $shop SET deleted_at = time::unix(time::now());
                DELETE staff WHERE barbershop = $shop;
                COMMIT TRANSACTION;"#,
            )
            .bind(("shop", id.clone()))
            .await?;
        Ok(true)
    }
}
