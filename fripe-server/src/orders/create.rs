//! Order creation service
//!
//! Validates a buyer's request against the listing's live constraints and
//! persists the order in `pending`. Validation is fail-fast: each rule has
//! its own error and nothing is written until every rule passes. The
//! post-write notifications are best-effort and can never undo the order.

use std::sync::Arc;

use serde::Deserialize;
use sqlx::SqlitePool;

use shared::order::ReceptionMode;

use crate::auth::CurrentUser;
use crate::db::models::{Order, OrderCreate};
use crate::db::repository::{ListingRepository, OrderRepository, UserRepository};
use crate::orders::error::OrderError;
use crate::orders::money::{MAX_QUANTITY, order_total, validate_price};
use crate::services::Notifier;

/// Client payload for `POST /api/orders`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {
    pub listing_id: Option<i64>,
    pub quantity: Option<i64>,
    pub reception_mode: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub shipping_address: Option<String>,
    pub phone: Option<String>,
    pub buyer_note: Option<String>,
}

/// Creates orders on behalf of authenticated buyers
#[derive(Clone)]
pub struct OrderCreationService {
    orders: OrderRepository,
    listings: ListingRepository,
    users: UserRepository,
    notifier: Arc<dyn Notifier>,
}

impl OrderCreationService {
    pub fn new(pool: SqlitePool, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            orders: OrderRepository::new(pool.clone()),
            listings: ListingRepository::new(pool.clone()),
            users: UserRepository::new(pool),
            notifier,
        }
    }

    /// Validate and persist a new order for `buyer`
    pub async fn create(
        &self,
        buyer: &CurrentUser,
        request: CreateOrderRequest,
    ) -> Result<Order, OrderError> {
        let listing_id = request.listing_id.ok_or(OrderError::MissingListing)?;

        // Soft-deleted listings count as absent for new orders
        let listing = self
            .listings
            .find_by_id(listing_id)
            .await?
            .filter(|l| !l.is_deleted())
            .ok_or(OrderError::ListingNotFound)?;

        // Quantity defaults to 1 and is coerced upward, never rejected for
        // being too small
        let quantity = request.quantity.unwrap_or(1).max(1);
        if quantity > MAX_QUANTITY {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        if listing.tracks_stock() && quantity > listing.stock {
            return Err(OrderError::InsufficientStock {
                requested: quantity,
                available: listing.stock,
            });
        }

        let reception_mode = ReceptionMode::from_request(request.reception_mode.as_deref());
        let shipping_address = non_empty(request.shipping_address);
        let phone = non_empty(request.phone);
        if reception_mode == ReceptionMode::Livraison
            && (shipping_address.is_none() || phone.is_none())
        {
            return Err(OrderError::MissingDeliveryInfo);
        }

        let color =
            match_variant(request.color, &listing.colors).map_err(OrderError::ColorUnavailable)?;
        let size =
            match_variant(request.size, &listing.sizes).map_err(OrderError::SizeUnavailable)?;

        validate_price(listing.price)?;
        let total_amount = order_total(listing.price, quantity);

        // Delivery fields are only persisted for delivery orders
        let (shipping_address, phone) = match reception_mode {
            ReceptionMode::Livraison => (shipping_address, phone),
            ReceptionMode::Retrait => (None, None),
        };

        let order = self
            .orders
            .create(OrderCreate {
                buyer_id: buyer.id,
                // Always taken from the listing, never from client input
                seller_id: listing.user_id,
                listing_id: listing.id,
                quantity,
                total_amount,
                reception_mode,
                shipping_address,
                phone,
                color,
                size,
                buyer_note: non_empty(request.buyer_note),
            })
            .await?;

        self.dispatch_creation_notifications(&order, &listing.title, buyer)
            .await;

        Ok(order)
    }

    /// Notify buyer and seller about the new order; failures are logged and
    /// never surface to the caller
    async fn dispatch_creation_notifications(
        &self,
        order: &Order,
        listing_title: &str,
        buyer: &CurrentUser,
    ) {
        let seller_email = match self.users.find_by_id(order.seller_id).await {
            Ok(Some(seller)) => Some(seller.email),
            Ok(None) => {
                tracing::warn!(seller_id = order.seller_id, "seller account missing, skipping notification");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, seller_id = order.seller_id, "seller lookup failed, skipping notification");
                None
            }
        };

        let buyer_notification = self.notifier.notify_buyer(order, listing_title, &buyer.email);
        let seller_notification = async {
            match &seller_email {
                Some(email) => self.notifier.notify_seller(order, listing_title, email).await,
                None => Ok(()),
            }
        };

        let (buyer_result, seller_result) =
            futures::future::join(buyer_notification, seller_notification).await;
        if let Err(e) = buyer_result {
            tracing::warn!(error = %e, order_id = order.id, "buyer notification failed");
        }
        if let Err(e) = seller_result {
            tracing::warn!(error = %e, order_id = order.id, "seller notification failed");
        }
    }
}

/// Trimmed, non-empty text or None
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Check a requested variant against the listing's declared set
///
/// Matching is case-insensitive and the listing's spelling wins, the way
/// the storefront normalizes colors. An empty declared set accepts any
/// requested value unchanged.
fn match_variant(requested: Option<String>, declared: &[String]) -> Result<Option<String>, String> {
    let Some(value) = non_empty(requested) else {
        return Ok(None);
    };
    if declared.is_empty() {
        return Ok(Some(value));
    }
    let lowered = value.to_lowercase();
    match declared.iter().find(|d| d.to_lowercase() == lowered) {
        Some(canonical) => Ok(Some(canonical.clone())),
        None => Err(value),
    }
}
