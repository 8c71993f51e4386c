//! Listing Repository
//!
//! Read path used by order creation, plus the create/delete operations the
//! listing service and tests need. Deleting is soft by default so order
//! history keeps its titles.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Listing, ListingCreate, User, generate_listing_reference};
use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::types::Json;

#[derive(Clone)]
pub struct ListingRepository {
    base: BaseRepository,
}

impl ListingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Find a listing by id (including soft-deleted ones)
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Listing>> {
        let listing = sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(listing)
    }

    /// Create a new listing with a generated reference code
    pub async fn create(&self, data: ListingCreate) -> RepoResult<Listing> {
        let seller: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(data.user_id)
            .fetch_optional(self.base.pool())
            .await?;
        let seller = seller
            .ok_or_else(|| RepoError::NotFound(format!("Seller {} not found", data.user_id)))?;

        let listing_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM listings WHERE user_id = ?")
                .bind(data.user_id)
                .fetch_one(self.base.pool())
                .await?;

        let store_name = seller.store_name.as_deref().unwrap_or(&seller.username);
        let reference = generate_listing_reference(
            store_name,
            seller.id,
            seller.created_at,
            listing_count,
        );

        let listing = sqlx::query_as::<_, Listing>(
            r#"INSERT INTO listings
                   (user_id, title, description, price, stock, colors, sizes,
                    reference, status, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, 'active', ?)
               RETURNING *"#,
        )
        .bind(data.user_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.price)
        .bind(data.stock)
        .bind(Json(&data.colors))
        .bind(Json(&data.sizes))
        .bind(reference)
        .bind(Utc::now())
        .fetch_one(self.base.pool())
        .await?;
        Ok(listing)
    }

    /// Soft delete: the listing disappears from the storefront but keeps
    /// annotating historical orders
    pub async fn mark_deleted(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("UPDATE listings SET status = 'deleted' WHERE id = ?")
            .bind(id)
            .execute(self.base.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard delete: orders referencing the listing survive and fall back to
    /// a placeholder title
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM listings WHERE id = ?")
            .bind(id)
            .execute(self.base.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
