//! Listing model
//!
//! Read-mostly collaborator from the order core's perspective: a snapshot
//! source at order-creation time. Listings are soft-deleted
//! (`status = 'deleted'`), so historical orders keep their titles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    /// Owning seller account
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    /// <= 0 means untracked/unlimited stock
    pub stock: i64,
    /// Declared color variants; empty = any
    #[sqlx(json)]
    pub colors: Vec<String>,
    /// Declared size variants; empty = any
    #[sqlx(json)]
    pub sizes: Vec<String>,
    /// Durable human reference code, e.g. TNBOU4070425_12
    pub reference: Option<String>,
    /// 'active' | 'deleted'
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Whether the listing has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.status == "deleted"
    }

    /// Whether stock is tracked for this listing
    pub fn tracks_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Create-listing payload for the repository
#[derive(Debug, Clone, Deserialize)]
pub struct ListingCreate {
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

/// Build the durable listing reference code
///
/// `TN` + first three letters of the store name (uppercased) + seller id +
/// seller signup date as MMDDYY + `_` + 1-based listing index.
pub fn generate_listing_reference(
    store_name: &str,
    seller_id: i64,
    seller_created_at: DateTime<Utc>,
    listing_count: i64,
) -> String {
    let store_part: String = store_name
        .chars()
        .take(3)
        .collect::<String>()
        .to_uppercase();
    let date_part = seller_created_at.format("%m%d%y");
    format!(
        "TN{}{}{}_{}",
        store_part,
        seller_id,
        date_part,
        listing_count + 1
    )
}
