//! Order model
//!
//! The central entity of the marketplace. `status` (plus `updated_at`) is
//! the only field mutated after creation; everything else is fixed when the
//! buyer places the order. Rows are never deleted — cancellation is a
//! status, not a row removal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::order::{OrderStatus, ReceptionMode};

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub buyer_id: i64,
    /// Derived from the listing at creation, never from client input
    pub seller_id: i64,
    /// Kept even after the listing itself is deleted
    pub listing_id: i64,
    pub quantity: i64,
    /// listing.price × quantity, computed once at creation
    pub total_amount: f64,
    #[sqlx(try_from = "String")]
    pub reception_mode: ReceptionMode,
    /// Present only for delivery orders
    pub shipping_address: Option<String>,
    /// Present only for delivery orders
    pub phone: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub buyer_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create-order payload for the repository (already validated)
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub buyer_id: i64,
    pub seller_id: i64,
    pub listing_id: i64,
    pub quantity: i64,
    pub total_amount: f64,
    pub reception_mode: ReceptionMode,
    pub shipping_address: Option<String>,
    pub phone: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub buyer_note: Option<String>,
}

/// Order annotated with listing display fields, for list and detail views
///
/// `listing_title` falls back to a placeholder when the listing row no
/// longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub order: Order,
    pub listing_title: String,
    pub listing_reference: Option<String>,
}
