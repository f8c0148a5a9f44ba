//! User Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::Role;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserId};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &UserId) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select(id.clone()).await?;
        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a new user with an already-hashed password
    pub async fn create(
        &self,
        name: String,
        email: String,
        hash_pass: String,
        role: Role,
    ) -> RepoResult<User> {
        // Check duplicate email
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{email}' already in use"
            )));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    name = $name,
                    email = $email,
                    hash_pass = $hash_pass,
                    role = $role,
                    created_at = time::unix(time::now()),
                    updated_at = time::unix(time::now())
                RETURN AFTER"#,
            )
            .bind(("name", name))
            .bind(("email", email))
            .bind(("hash_pass", hash_pass))
            .bind(("role", role))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
