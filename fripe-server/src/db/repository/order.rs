//! Order Repository
//!
//! All order mutations go through here: creation and the conditional
//! status update the transition engine relies on. Reads annotate each order
//! with its listing title, falling back to a placeholder when the listing
//! row no longer exists.

use super::{BaseRepository, RepoResult};
use crate::db::models::{Order, OrderCreate, OrderSummary};
use chrono::Utc;
use shared::order::OrderStatus;
use sqlx::SqlitePool;

/// Title shown for orders whose listing has been removed
pub const DELETED_LISTING_TITLE: &str = "Annonce supprimée";

const SUMMARY_SELECT: &str = r#"
    SELECT o.*,
           COALESCE(l.title, ?) AS listing_title,
           l.reference AS listing_reference
    FROM orders o
    LEFT JOIN listings l ON l.id = o.listing_id
"#;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Insert a new order in `pending` status
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let now = Utc::now();
        let order = sqlx::query_as::<_, Order>(
            r#"INSERT INTO orders
                   (buyer_id, seller_id, listing_id, quantity, total_amount,
                    reception_mode, shipping_address, phone, color, size,
                    status, buyer_note, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#,
        )
        .bind(data.buyer_id)
        .bind(data.seller_id)
        .bind(data.listing_id)
        .bind(data.quantity)
        .bind(data.total_amount)
        .bind(data.reception_mode.as_str())
        .bind(data.shipping_address)
        .bind(data.phone)
        .bind(data.color)
        .bind(data.size)
        .bind(OrderStatus::Pending.as_str())
        .bind(data.buyer_note)
        .bind(now)
        .bind(now)
        .fetch_one(self.base.pool())
        .await?;
        Ok(order)
    }

    /// Find an order by id
    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(order)
    }

    /// Find an order by id, annotated with listing display fields
    pub async fn find_summary_by_id(&self, id: i64) -> RepoResult<Option<OrderSummary>> {
        let query = format!("{SUMMARY_SELECT} WHERE o.id = ?");
        let summary = sqlx::query_as::<_, OrderSummary>(&query)
            .bind(DELETED_LISTING_TITLE)
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(summary)
    }

    /// Conditionally move an order from `from` to `to`
    ///
    /// The `WHERE id = ? AND status = ?` guard makes the write atomic with
    /// respect to concurrent transitions: if another request already moved
    /// the order out of `from`, no row matches and `None` is returned so
    /// the caller can re-read and re-validate.
    pub async fn update_status(
        &self,
        id: i64,
        from: OrderStatus,
        to: OrderStatus,
    ) -> RepoResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            r#"UPDATE orders
               SET status = ?, updated_at = ?
               WHERE id = ? AND status = ?
               RETURNING *"#,
        )
        .bind(to.as_str())
        .bind(Utc::now())
        .bind(id)
        .bind(from.as_str())
        .fetch_optional(self.base.pool())
        .await?;
        Ok(order)
    }

    /// All orders placed by `buyer_id`, newest first
    pub async fn find_for_buyer(
        &self,
        buyer_id: i64,
        status: Option<OrderStatus>,
    ) -> RepoResult<Vec<OrderSummary>> {
        self.find_for_participant("o.buyer_id", buyer_id, status).await
    }

    /// All orders received by `seller_id`, newest first
    pub async fn find_for_seller(
        &self,
        seller_id: i64,
        status: Option<OrderStatus>,
    ) -> RepoResult<Vec<OrderSummary>> {
        self.find_for_participant("o.seller_id", seller_id, status).await
    }

    async fn find_for_participant(
        &self,
        column: &str,
        user_id: i64,
        status: Option<OrderStatus>,
    ) -> RepoResult<Vec<OrderSummary>> {
        let orders = match status {
            Some(status) => {
                let query = format!(
                    "{SUMMARY_SELECT} WHERE {column} = ? AND o.status = ? ORDER BY o.created_at DESC, o.id DESC"
                );
                sqlx::query_as::<_, OrderSummary>(&query)
                    .bind(DELETED_LISTING_TITLE)
                    .bind(user_id)
                    .bind(status.as_str())
                    .fetch_all(self.base.pool())
                    .await?
            }
            None => {
                let query =
                    format!("{SUMMARY_SELECT} WHERE {column} = ? ORDER BY o.created_at DESC, o.id DESC");
                sqlx::query_as::<_, OrderSummary>(&query)
                    .bind(DELETED_LISTING_TITLE)
                    .bind(user_id)
                    .fetch_all(self.base.pool())
                    .await?
            }
        };
        Ok(orders)
    }
}
