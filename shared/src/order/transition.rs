//! Order status transition table
//!
//! Pure transition rules keyed on (current status, actor role, reception
//! mode). The reception-mode branch is always evaluated from the order's
//! stored mode, never from client input, so a pickup order can never be
//! pushed to `shipped`.

use super::status::{OrderStatus, ReceptionMode};

/// The acting user's relationship to an order
///
/// Resolved by comparing the authenticated user id against the order's
/// buyer and seller ids. A user who is somehow both gets the union of both
/// allowed-target sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderActor {
    pub is_buyer: bool,
    pub is_seller: bool,
}

impl OrderActor {
    /// Resolve an actor relative to an order; `None` when the user is
    /// neither buyer nor seller.
    pub fn resolve(user_id: i64, buyer_id: i64, seller_id: i64) -> Option<Self> {
        let actor = Self {
            is_buyer: user_id == buyer_id,
            is_seller: user_id == seller_id,
        };
        (actor.is_buyer || actor.is_seller).then_some(actor)
    }

    pub const fn buyer() -> Self {
        Self {
            is_buyer: true,
            is_seller: false,
        }
    }

    pub const fn seller() -> Self {
        Self {
            is_buyer: false,
            is_seller: true,
        }
    }
}

/// Statuses a cancellation may start from, regardless of actor.
///
/// Layered on top of the per-actor table: both the actor-permission check
/// and this stage-eligibility check must pass.
pub const CANCELLABLE_FROM: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Shipped,
    OrderStatus::ReadyForPickup,
];

/// Targets the seller may move to from `current`
fn seller_targets(current: OrderStatus, mode: ReceptionMode) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match current {
        Pending => &[Confirmed, Cancelled],
        Confirmed => match mode {
            ReceptionMode::Livraison => &[Shipped, Cancelled],
            ReceptionMode::Retrait => &[ReadyForPickup, Cancelled],
        },
        Shipped => &[Delivred, ReceptionRefused, Cancelled],
        Delivred => &[Completed, ReceptionRefused],
        ReadyForPickup => &[PickedUp, Cancelled],
        PickedUp => &[Completed],
        Received => &[Completed],
        ReceptionRefused | Cancelled | Completed => &[],
    }
}

/// Targets the buyer may move to from `current`
fn buyer_targets(current: OrderStatus) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match current {
        Pending => &[Cancelled],
        Shipped => &[Received, ReceptionRefused],
        Delivred => &[ReceptionRefused],
        Confirmed | ReadyForPickup | PickedUp | Received | ReceptionRefused | Cancelled
        | Completed => &[],
    }
}

/// Compute the allowed-target set for an actor from `current`
///
/// The union of the per-role sets for every role the actor holds, with the
/// cancellation stage guard applied on top.
pub fn allowed_targets(
    current: OrderStatus,
    actor: OrderActor,
    mode: ReceptionMode,
) -> Vec<OrderStatus> {
    let mut targets: Vec<OrderStatus> = Vec::new();
    if actor.is_seller {
        targets.extend_from_slice(seller_targets(current, mode));
    }
    if actor.is_buyer {
        for &t in buyer_targets(current) {
            if !targets.contains(&t) {
                targets.push(t);
            }
        }
    }
    if !CANCELLABLE_FROM.contains(&current) {
        targets.retain(|t| *t != OrderStatus::Cancelled);
    }
    targets
}

/// Whether `actor` may move an order from `current` to `target`
pub fn can_transition(
    current: OrderStatus,
    target: OrderStatus,
    actor: OrderActor,
    mode: ReceptionMode,
) -> bool {
    allowed_targets(current, actor, mode).contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;
    use ReceptionMode::*;

    #[test]
    fn seller_confirms_or_cancels_pending() {
        let targets = allowed_targets(Pending, OrderActor::seller(), Retrait);
        assert_eq!(targets, vec![Confirmed, Cancelled]);
    }

    #[test]
    fn buyer_may_only_cancel_pending() {
        let targets = allowed_targets(Pending, OrderActor::buyer(), Livraison);
        assert_eq!(targets, vec![Cancelled]);
        assert!(!can_transition(Pending, Confirmed, OrderActor::buyer(), Livraison));
    }

    #[test]
    fn confirmed_branches_on_stored_reception_mode() {
        // Delivery order ships
        assert!(can_transition(Confirmed, Shipped, OrderActor::seller(), Livraison));
        assert!(!can_transition(Confirmed, ReadyForPickup, OrderActor::seller(), Livraison));

        // Pickup order can never be pushed to shipped
        assert!(!can_transition(Confirmed, Shipped, OrderActor::seller(), Retrait));
        assert!(can_transition(Confirmed, ReadyForPickup, OrderActor::seller(), Retrait));
        assert!(can_transition(Confirmed, Cancelled, OrderActor::seller(), Retrait));
    }

    #[test]
    fn buyer_cannot_act_on_confirmed() {
        assert!(allowed_targets(Confirmed, OrderActor::buyer(), Livraison).is_empty());
        assert!(allowed_targets(Confirmed, OrderActor::buyer(), Retrait).is_empty());
    }

    #[test]
    fn shipped_targets_per_actor() {
        assert_eq!(
            allowed_targets(Shipped, OrderActor::seller(), Livraison),
            vec![Delivred, ReceptionRefused, Cancelled]
        );
        assert_eq!(
            allowed_targets(Shipped, OrderActor::buyer(), Livraison),
            vec![Received, ReceptionRefused]
        );
    }

    #[test]
    fn delivred_targets_per_actor() {
        assert_eq!(
            allowed_targets(Delivred, OrderActor::seller(), Livraison),
            vec![Completed, ReceptionRefused]
        );
        assert_eq!(
            allowed_targets(Delivred, OrderActor::buyer(), Livraison),
            vec![ReceptionRefused]
        );
    }

    #[test]
    fn pickup_flow_targets() {
        assert_eq!(
            allowed_targets(ReadyForPickup, OrderActor::seller(), Retrait),
            vec![PickedUp, Cancelled]
        );
        assert!(allowed_targets(ReadyForPickup, OrderActor::buyer(), Retrait).is_empty());
        assert_eq!(
            allowed_targets(PickedUp, OrderActor::seller(), Retrait),
            vec![Completed]
        );
        assert_eq!(
            allowed_targets(Received, OrderActor::seller(), Livraison),
            vec![Completed]
        );
    }

    #[test]
    fn terminal_states_have_no_targets() {
        for current in [ReceptionRefused, Cancelled, Completed] {
            for actor in [OrderActor::buyer(), OrderActor::seller()] {
                for mode in [Retrait, Livraison] {
                    assert!(
                        allowed_targets(current, actor, mode).is_empty(),
                        "{current:?} should be terminal"
                    );
                }
            }
        }
    }

    #[test]
    fn no_direct_pending_to_completed() {
        for actor in [OrderActor::buyer(), OrderActor::seller()] {
            for mode in [Retrait, Livraison] {
                assert!(!can_transition(Pending, Completed, actor, mode));
            }
        }
    }

    #[test]
    fn same_status_is_never_a_legal_target() {
        for current in OrderStatus::ALL {
            for actor in [OrderActor::buyer(), OrderActor::seller()] {
                for mode in [Retrait, Livraison] {
                    assert!(
                        !can_transition(current, current, actor, mode),
                        "{current:?} -> {current:?} must be rejected"
                    );
                }
            }
        }
    }

    #[test]
    fn cancellation_boundary() {
        // Legal only from these stages
        assert!(can_transition(Pending, Cancelled, OrderActor::seller(), Retrait));
        assert!(can_transition(Confirmed, Cancelled, OrderActor::seller(), Livraison));
        assert!(can_transition(Shipped, Cancelled, OrderActor::seller(), Livraison));
        assert!(can_transition(ReadyForPickup, Cancelled, OrderActor::seller(), Retrait));

        // Never from these
        for current in [PickedUp, Received, Delivred, ReceptionRefused, Completed] {
            for actor in [OrderActor::buyer(), OrderActor::seller()] {
                for mode in [Retrait, Livraison] {
                    assert!(
                        !can_transition(current, Cancelled, actor, mode),
                        "cancel from {current:?} must be rejected"
                    );
                }
            }
        }
    }

    #[test]
    fn dual_role_actor_gets_the_union() {
        let both = OrderActor {
            is_buyer: true,
            is_seller: true,
        };
        let targets = allowed_targets(Shipped, both, Livraison);
        assert!(targets.contains(&Delivred));
        assert!(targets.contains(&Received));
        assert!(targets.contains(&ReceptionRefused));
        assert!(targets.contains(&Cancelled));
        // No duplicates from the union
        let mut deduped = targets.clone();
        deduped.dedup();
        assert_eq!(targets.len(), deduped.len());
    }

    #[test]
    fn actor_resolution() {
        assert_eq!(OrderActor::resolve(1, 1, 2), Some(OrderActor::buyer()));
        assert_eq!(OrderActor::resolve(2, 1, 2), Some(OrderActor::seller()));
        assert_eq!(OrderActor::resolve(3, 1, 2), None);
        assert_eq!(
            OrderActor::resolve(1, 1, 1),
            Some(OrderActor {
                is_buyer: true,
                is_seller: true
            })
        );
    }

    /// Every edge reachable through `allowed_targets` stays inside the
    /// transition table of the design: enumerate and compare.
    #[test]
    fn full_table_enumeration() {
        use std::collections::BTreeSet;

        let mut edges: BTreeSet<(String, &'static str, String)> = BTreeSet::new();
        for current in OrderStatus::ALL {
            for (name, actor) in [("buyer", OrderActor::buyer()), ("seller", OrderActor::seller())]
            {
                for mode in [Retrait, Livraison] {
                    for target in allowed_targets(current, actor, mode) {
                        edges.insert((current.to_string(), name, target.to_string()));
                    }
                }
            }
        }

        let expected: BTreeSet<(String, &'static str, String)> = [
            ("pending", "seller", "confirmed"),
            ("pending", "seller", "cancelled"),
            ("pending", "buyer", "cancelled"),
            ("confirmed", "seller", "shipped"),
            ("confirmed", "seller", "ready_for_pickup"),
            ("confirmed", "seller", "cancelled"),
            ("shipped", "seller", "delivred"),
            ("shipped", "seller", "reception_refused"),
            ("shipped", "seller", "cancelled"),
            ("shipped", "buyer", "received"),
            ("shipped", "buyer", "reception_refused"),
            ("delivred", "seller", "completed"),
            ("delivred", "seller", "reception_refused"),
            ("delivred", "buyer", "reception_refused"),
            ("ready_for_pickup", "seller", "picked_up"),
            ("ready_for_pickup", "seller", "cancelled"),
            ("picked_up", "seller", "completed"),
            ("received", "seller", "completed"),
        ]
        .into_iter()
        .map(|(c, a, t)| (c.to_string(), a, t.to_string()))
        .collect();

        assert_eq!(edges, expected);
    }
}
