//! Order transition engine
//!
//! Given an order, an acting user, and a requested status string, decides
//! whether the move is legal and commits it. The commit is a conditional
//! write (`WHERE id = ? AND status = ?`): losing a race against a
//! concurrent transition re-reads and re-validates instead of overwriting
//! the newer status.

use std::sync::Arc;

use sqlx::SqlitePool;

use shared::order::{OrderActor, OrderStatus, can_transition};

use crate::auth::CurrentUser;
use crate::db::models::Order;
use crate::db::repository::{ListingRepository, OrderRepository, UserRepository};
use crate::orders::error::OrderError;
use crate::services::Notifier;

/// Attempts before giving up on a contended order
const MAX_COMMIT_ATTEMPTS: u32 = 3;

/// Moves orders along the lifecycle transition table
#[derive(Clone)]
pub struct OrderTransitionEngine {
    orders: OrderRepository,
    listings: ListingRepository,
    users: UserRepository,
    notifier: Arc<dyn Notifier>,
}

impl OrderTransitionEngine {
    pub fn new(pool: SqlitePool, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            orders: OrderRepository::new(pool.clone()),
            listings: ListingRepository::new(pool.clone()),
            users: UserRepository::new(pool),
            notifier,
        }
    }

    /// Apply a requested status change to an order on behalf of `actor`
    ///
    /// Rejections are synchronous and distinct: unknown status string,
    /// order not found, foreign actor, transition not in the allowed set
    /// for the current state. Nothing is retried beyond the conditional
    /// commit loop, and nothing is queued.
    pub async fn change_status(
        &self,
        actor: &CurrentUser,
        order_id: i64,
        requested_status: &str,
    ) -> Result<Order, OrderError> {
        // Alias resolution first: an unknown status never touches the order
        let target = OrderStatus::resolve(requested_status)
            .ok_or_else(|| OrderError::InvalidStatus(requested_status.to_string()))?;

        for _ in 0..MAX_COMMIT_ATTEMPTS {
            let order = self
                .orders
                .find_by_id(order_id)
                .await
                .map_err(map_state_error)?
                .ok_or(OrderError::OrderNotFound(order_id))?;

            let roles = OrderActor::resolve(actor.id, order.buyer_id, order.seller_id)
                .ok_or(OrderError::NotParticipant)?;

            // The reception-mode branch reads the stored mode, never input
            if !can_transition(order.status, target, roles, order.reception_mode) {
                // Wrong role (403) if the other participant could make this
                // move; otherwise the move is illegal from this state (400)
                let any_participant = OrderActor {
                    is_buyer: true,
                    is_seller: true,
                };
                return Err(
                    if can_transition(order.status, target, any_participant, order.reception_mode)
                    {
                        OrderError::TransitionNotAllowedForActor { target }
                    } else {
                        OrderError::ForbiddenTransition {
                            current: order.status,
                            target,
                        }
                    },
                );
            }

            match self.orders.update_status(order_id, order.status, target).await? {
                Some(updated) => {
                    tracing::info!(
                        order_id,
                        from = %order.status,
                        to = %target,
                        actor_id = actor.id,
                        "order status changed"
                    );
                    self.dispatch_status_notification(&updated).await;
                    return Ok(updated);
                }
                // Lost the race: someone moved the order first. Re-read and
                // re-validate against the fresh status.
                None => continue,
            }
        }

        Err(OrderError::Conflict)
    }

    /// Tell the buyer about the new status; failures are logged only
    async fn dispatch_status_notification(&self, order: &Order) {
        let buyer_email = match self.users.find_by_id(order.buyer_id).await {
            Ok(Some(buyer)) => buyer.email,
            Ok(None) => {
                tracing::warn!(buyer_id = order.buyer_id, "buyer account missing, skipping notification");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, buyer_id = order.buyer_id, "buyer lookup failed, skipping notification");
                return;
            }
        };

        let listing_title = match self.listings.find_by_id(order.listing_id).await {
            Ok(Some(listing)) => listing.title,
            _ => crate::db::repository::order::DELETED_LISTING_TITLE.to_string(),
        };

        if let Err(e) = self
            .notifier
            .notify_status_change(order, &listing_title, &buyer_email)
            .await
        {
            tracing::warn!(error = %e, order_id = order.id, "status notification failed");
        }
    }
}

/// Surface corrupted stored statuses as their own error instead of a
/// generic database failure
fn map_state_error(err: crate::db::repository::RepoError) -> OrderError {
    match err {
        crate::db::repository::RepoError::UnknownState(msg) => {
            OrderError::UnknownCurrentState(msg)
        }
        other => OrderError::Repo(other),
    }
}
