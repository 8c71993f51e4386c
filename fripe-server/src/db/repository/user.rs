//! User Repository
//!
//! Account writes belong to the external auth service; the order core
//! reads accounts for notification addresses and test seeding.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, UserCreate};
use chrono::Utc;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Find a user by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(user)
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(user)
    }

    /// Create a new user
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' already exists",
                data.username
            )));
        }

        let user = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (username, email, role, store_name, created_at)
               VALUES (?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(data.username)
        .bind(data.email)
        .bind(data.role)
        .bind(data.store_name)
        .bind(Utc::now())
        .fetch_one(self.base.pool())
        .await?;
        Ok(user)
    }
}
