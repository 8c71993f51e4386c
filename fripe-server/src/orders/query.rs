//! Order query service
//!
//! Read paths scoped by the acting user: purchases for buyers, sales for
//! sellers, plus a participant-gated detail lookup. Status filtering here
//! is presentation-only and never touches the transition engine.

use sqlx::SqlitePool;

use shared::order::{OrderActor, OrderStatus};

use crate::auth::CurrentUser;
use crate::db::models::OrderSummary;
use crate::db::repository::OrderRepository;
use crate::orders::error::OrderError;

/// Read-side order views
#[derive(Clone)]
pub struct OrderQueryService {
    orders: OrderRepository,
}

impl OrderQueryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Orders placed by the acting user, newest first
    pub async fn list_for_buyer(
        &self,
        actor: &CurrentUser,
        status_filter: Option<&str>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        let status = resolve_filter(status_filter)?;
        Ok(self.orders.find_for_buyer(actor.id, status).await?)
    }

    /// Orders received by the acting user as a seller, newest first
    pub async fn list_for_seller(
        &self,
        actor: &CurrentUser,
        status_filter: Option<&str>,
    ) -> Result<Vec<OrderSummary>, OrderError> {
        let status = resolve_filter(status_filter)?;
        Ok(self.orders.find_for_seller(actor.id, status).await?)
    }

    /// One annotated order, visible only to its buyer or seller
    pub async fn get_for_actor(
        &self,
        actor: &CurrentUser,
        order_id: i64,
    ) -> Result<OrderSummary, OrderError> {
        let summary = self
            .orders
            .find_summary_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        OrderActor::resolve(actor.id, summary.order.buyer_id, summary.order.seller_id)
            .ok_or(OrderError::NotParticipant)?;

        Ok(summary)
    }
}

/// Resolve an optional client-side status filter through the alias table
fn resolve_filter(filter: Option<&str>) -> Result<Option<OrderStatus>, OrderError> {
    match filter {
        None => Ok(None),
        Some(raw) => OrderStatus::resolve(raw)
            .map(Some)
            .ok_or_else(|| OrderError::InvalidStatus(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::{ListingCreate, UserCreate};
    use crate::db::repository::{ListingRepository, UserRepository, order::DELETED_LISTING_TITLE};
    use crate::orders::create::{CreateOrderRequest, OrderCreationService};
    use crate::services::MailRelayNotifier;
    use std::sync::Arc;

    struct TestCtx {
        pool: SqlitePool,
        query: OrderQueryService,
        creation: OrderCreationService,
        buyer: CurrentUser,
        seller: CurrentUser,
        listing_id: i64,
    }

    async fn setup() -> TestCtx {
        let db = DbService::open_in_memory().await.unwrap();
        let users = UserRepository::new(db.pool.clone());
        let listings = ListingRepository::new(db.pool.clone());

        let seller = users
            .create(UserCreate {
                username: "amine".into(),
                email: "amine@example.tn".into(),
                role: "seller".into(),
                store_name: Some("Boutique Amine".into()),
            })
            .await
            .unwrap();
        let buyer = users
            .create(UserCreate {
                username: "lina".into(),
                email: "lina@example.tn".into(),
                role: "buyer".into(),
                store_name: None,
            })
            .await
            .unwrap();

        let listing = listings
            .create(ListingCreate {
                user_id: seller.id,
                title: "Veste en jean".into(),
                description: None,
                price: 20.0,
                stock: 10,
                colors: vec![],
                sizes: vec![],
            })
            .await
            .unwrap();

        TestCtx {
            query: OrderQueryService::new(db.pool.clone()),
            creation: OrderCreationService::new(
                db.pool.clone(),
                Arc::new(MailRelayNotifier::disabled()),
            ),
            buyer: CurrentUser {
                id: buyer.id,
                username: "lina".into(),
                email: buyer.email,
                role: "buyer".into(),
            },
            seller: CurrentUser {
                id: seller.id,
                username: "amine".into(),
                email: seller.email,
                role: "seller".into(),
            },
            listing_id: listing.id,
            pool: db.pool,
        }
    }

    async fn place_order(ctx: &TestCtx) -> i64 {
        ctx.creation
            .create(
                &ctx.buyer,
                CreateOrderRequest {
                    listing_id: Some(ctx.listing_id),
                    quantity: Some(1),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn buyer_and_seller_views_are_symmetric() {
        let ctx = setup().await;
        place_order(&ctx).await;
        place_order(&ctx).await;

        let purchases = ctx.query.list_for_buyer(&ctx.buyer, None).await.unwrap();
        assert_eq!(purchases.len(), 2);
        assert!(purchases.iter().all(|o| o.order.buyer_id == ctx.buyer.id));
        assert!(purchases.iter().all(|o| o.listing_title == "Veste en jean"));
        assert!(purchases.iter().all(|o| o.listing_reference.is_some()));

        let sales = ctx.query.list_for_seller(&ctx.seller, None).await.unwrap();
        assert_eq!(sales.len(), 2);

        // The other side of each view is empty
        assert!(ctx.query.list_for_buyer(&ctx.seller, None).await.unwrap().is_empty());
        assert!(ctx.query.list_for_seller(&ctx.buyer, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn newest_orders_come_first() {
        let ctx = setup().await;
        let first = place_order(&ctx).await;
        let second = place_order(&ctx).await;

        let purchases = ctx.query.list_for_buyer(&ctx.buyer, None).await.unwrap();
        assert_eq!(purchases[0].order.id, second);
        assert_eq!(purchases[1].order.id, first);
    }

    #[tokio::test]
    async fn status_filter_narrows_results() {
        let ctx = setup().await;
        let order_id = place_order(&ctx).await;
        place_order(&ctx).await;

        sqlx::query("UPDATE orders SET status = 'confirmed' WHERE id = ?")
            .bind(order_id)
            .execute(&ctx.pool)
            .await
            .unwrap();

        let confirmed = ctx
            .query
            .list_for_buyer(&ctx.buyer, Some("confirmed"))
            .await
            .unwrap();
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].order.id, order_id);

        // Filters go through the same alias table as transitions
        let confirmed = ctx
            .query
            .list_for_buyer(&ctx.buyer, Some("Confirmé"))
            .await
            .unwrap();
        assert_eq!(confirmed.len(), 1);

        let result = ctx.query.list_for_buyer(&ctx.buyer, Some("bogus")).await;
        assert!(matches!(result, Err(OrderError::InvalidStatus(_))));
    }

    #[tokio::test]
    async fn deleted_listing_falls_back_to_placeholder_title() {
        let ctx = setup().await;
        place_order(&ctx).await;

        ListingRepository::new(ctx.pool.clone())
            .delete(ctx.listing_id)
            .await
            .unwrap();

        let purchases = ctx.query.list_for_buyer(&ctx.buyer, None).await.unwrap();
        assert_eq!(purchases[0].listing_title, DELETED_LISTING_TITLE);
        assert!(purchases[0].listing_reference.is_none());
    }

    #[tokio::test]
    async fn detail_is_participant_gated() {
        let ctx = setup().await;
        let order_id = place_order(&ctx).await;

        assert!(ctx.query.get_for_actor(&ctx.buyer, order_id).await.is_ok());
        assert!(ctx.query.get_for_actor(&ctx.seller, order_id).await.is_ok());

        let outsider = CurrentUser {
            id: 999,
            username: "karim".into(),
            email: "karim@example.tn".into(),
            role: "buyer".into(),
        };
        let result = ctx.query.get_for_actor(&outsider, order_id).await;
        assert!(matches!(result, Err(OrderError::NotParticipant)));

        let result = ctx.query.get_for_actor(&ctx.buyer, 424242).await;
        assert!(matches!(result, Err(OrderError::OrderNotFound(424242))));
    }
}
