//! Staff Repository
//!
//! Staff creation pairs a user record with its staff link in one
//! transaction: a failure partway leaves neither row behind.

use std::collections::HashSet;

use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

use shared::models::{Role, StaffUpdate};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{BarbershopId, Staff, StaffDetail, StaffId, User, UserId};

#[derive(Clone)]
pub struct StaffRepository {
    base: BaseRepository,
}

impl StaffRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find the staff link held by a user (at most one)
    pub async fn find_by_user(&self, user: &UserId) -> RepoResult<Option<Staff>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE user = $user LIMIT 1")
            .bind(("user", user.clone()))
            .await?;
        let links: Vec<Staff> = result.take(0)?;
        Ok(links.into_iter().next())
    }

    /// Find staff link by id
    pub async fn find_by_id(&self, id: &StaffId) -> RepoResult<Option<Staff>> {
        let link: Option<Staff> = self.base.db().select(id.clone()).await?;
        Ok(link)
    }

    /// Find staff link by id, with user and barbershop resolved
    pub async fn find_detail_by_id(&self, id: &StaffId) -> RepoResult<Option<StaffDetail>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE id = $id FETCH user, barbershop")
            .bind(("id", id.clone()))
            .await?;
        let links: Vec<StaffDetail> = result.take(0)?;
        Ok(links.into_iter().next())
    }

    /// Staff of all shops in the caller's visibility set
    pub async fn find_by_shops(
        &self,
        shops: &HashSet<BarbershopId>,
    ) -> RepoResult<Vec<StaffDetail>> {
        if shops.is_empty() {
            return Ok(Vec::new());
        }
        let shop_vec: Vec<BarbershopId> = shops.iter().cloned().collect();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE barbershop IN $shops FETCH user, barbershop")
            .bind(("shops", shop_vec))
            .await?;
        let links: Vec<StaffDetail> = result.take(0)?;
        Ok(links)
    }

    /// Display names of a shop's staff (public listing)
    pub async fn display_names_for_shop(&self, shop: &BarbershopId) -> RepoResult<Vec<String>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM staff WHERE barbershop = $shop FETCH user")
            .bind(("shop", shop.clone()))
            .await?;
        let links: Vec<crate::db::models::StaffWithUser> = result.take(0)?;
        Ok(links.into_iter().map(|l| l.user.name).collect())
    }

    /// Atomically create the user record and its staff link
    pub async fn create_with_user(
        &self,
        name: String,
        email: String,
        hash_pass: String,
        role: Role,
        barbershop: &BarbershopId,
        specialization: Option<String>,
    ) -> RepoResult<StaffDetail> {
        // Check duplicate email (the unique index is the backstop)
        let mut existing = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email.clone()))
            .await?;
        let users: Vec<User> = existing.take(0)?;
        if !users.is_empty() {
            return Err(RepoError::Duplicate(format!(
                "Email '{email}' already in use"
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                LET $u = (CREATE ONLY user SET
                    name = $name,
                    email = $email,
                    hash_pass = $hash_pass,
                    role = $role,
                    created_at = time::unix(time::now()),
                    updated_at = time::unix(time::now()));
                LET $s = (CREATE ONLY staff SET
                    user = $u.id,
                    barbershop = $barbershop,
                    specialization = $specialization,
                    created_at = time::unix(time::now()),
                    updated_at = time::unix(time::now()));
                RETURN $s.id;
                COMMIT TRANSACTION;"#,
            )
            .bind(("name", name))
            .bind(("email", email))
            .bind(("hash_pass", hash_pass))
            .bind(("role", role))
            .bind(("barbershop", barbershop.clone()))
            .bind(("specialization", specialization))
            .await?;

        // A transaction with a RETURN collapses to a single result
        let staff_id: Option<RecordId> = result.take(0)?;
        let staff_id =
            staff_id.ok_or_else(|| RepoError::Database("Failed to create staff".to_string()))?;

        self.find_detail_by_id(&staff_id)
            .await?
            .ok_or_else(|| RepoError::Database("Created staff not found".to_string()))
    }

    /// Link an existing user to a shop
    ///
    /// Used when the person already has an account, an owner lending a
    /// hand at another shop for instance. At most one link per user; the
    /// unique index rejects a second.
    pub async fn link_existing(
        &self,
        user: &UserId,
        barbershop: &BarbershopId,
        specialization: Option<String>,
    ) -> RepoResult<Staff> {
        if self.find_by_user(user).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "User {user} already holds a staff position"
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE staff SET
                    user = $user,
                    barbershop = $barbershop,
                    specialization = $specialization,
                    created_at = time::unix(time::now()),
                    updated_at = time::unix(time::now())
                RETURN AFTER"#,
            )
            .bind(("user", user.clone()))
            .bind(("barbershop", barbershop.clone()))
            .bind(("specialization", specialization))
            .await?;

        let created: Option<Staff> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create staff link".to_string()))
    }

    /// Partial update of the linked user (name/email/role) and the link's
    /// specialization, atomically
    pub async fn update(&self, id: &StaffId, data: StaffUpdate) -> RepoResult<StaffDetail> {
        let existing = self
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {id} not found")))?;

        // Check duplicate email if changing
        if let Some(ref new_email) = data.email
            && new_email != &existing.user.email
        {
            let mut dup = self
                .base
                .db()
                .query("SELECT * FROM user WHERE email = $email LIMIT 1")
                .bind(("email", new_email.clone()))
                .await?;
            let users: Vec<User> = dup.take(0)?;
            if !users.is_empty() {
                return Err(RepoError::Duplicate(format!(
                    "Email '{new_email}' already in use"
                )));
            }
        }

        let user_id = existing
            .user
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Staff user missing id".to_string()))?;

        self.base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                UPDATE $user SET
                    name = IF $has_name THEN $name ELSE name END,
                    email = IF $has_email THEN $email ELSE email END,
                    role = IF $has_role THEN $role ELSE role END,
                    updated_at = time::unix(time::now());
                UPDATE $staff SET
                    specialization = IF $has_spec THEN $spec ELSE specialization END,
                    updated_at = time::unix(time::now());
                COMMIT TRANSACTION;"#,
            )
            .bind(("user", user_id))
            .bind(("staff", id.clone()))
            .bind(("has_name", data.name.is_some()))
            .bind(("name", data.name))
            .bind(("has_email", data.email.is_some()))
            .bind(("email", data.email))
            .bind(("has_role", data.role.is_some()))
            .bind(("role", data.role))
            .bind(("has_spec", data.specialization.is_some()))
            .bind(("spec", data.specialization))
            .await?;

        self.find_detail_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {id} not found")))
    }

    /// Remove a staff link (the user record stays)
    pub async fn delete(&self, id: &StaffId) -> RepoResult<bool> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Staff {id} not found")))?;

        self.base
            .db()
            .query("DELETE $staff")
            .bind(("staff", id.clone()))
            .await?;
        Ok(true)
    }
}
