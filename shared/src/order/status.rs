//! Canonical order statuses and reception modes
//!
//! Historical revisions of the platform accumulated ad hoc status strings
//! (English, French, and the misspelled `delivred` which is the stored
//! canonical form). [`OrderStatus::resolve`] funnels every accepted spelling
//! into this single enumeration before any transition rule runs.

use serde::{Deserialize, Serialize};

/// Canonical order status
///
/// The stored wire form is the lowercase snake_case name
/// (`pending`, ..., `delivred`, `ready_for_pickup`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Created, waiting for the seller
    Pending,
    /// Accepted by the seller
    Confirmed,
    /// Handed to the carrier (delivery orders)
    Shipped,
    /// Carrier reported delivery (historical spelling kept for data compat)
    Delivred,
    /// Ready at the pickup point (pickup orders)
    ReadyForPickup,
    /// Collected by the buyer
    PickedUp,
    /// Buyer confirmed reception
    Received,
    /// Buyer or seller reported a refused reception
    ReceptionRefused,
    /// Lifecycle finished
    Completed,
    /// Cancelled before fulfilment finished
    Cancelled,
}

impl OrderStatus {
    /// All canonical statuses, in lifecycle order
    pub const ALL: [OrderStatus; 10] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivred,
        OrderStatus::ReadyForPickup,
        OrderStatus::PickedUp,
        OrderStatus::Received,
        OrderStatus::ReceptionRefused,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// The stored/wire string for this status
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivred => "delivred",
            OrderStatus::ReadyForPickup => "ready_for_pickup",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Received => "received",
            OrderStatus::ReceptionRefused => "reception_refused",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse an exact canonical string (no alias resolution)
    pub fn from_canonical(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Resolve a client-supplied status string to a canonical status
    ///
    /// Input is trimmed and lowercased, then looked up in a fixed alias
    /// table covering the legacy and localized spellings seen across
    /// platform revisions. Returns `None` for anything outside the table;
    /// callers reject those before attempting a transition.
    pub fn resolve(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        let status = match normalized.as_str() {
            "pending" | "en_attente" | "en attente" => OrderStatus::Pending,
            "confirmed" | "confirmé" | "confirme" | "confirmée" => OrderStatus::Confirmed,
            "shipped" | "envoyé" | "envoye" | "expédié" | "expedie" => OrderStatus::Shipped,
            "delivred" | "delivered" | "livré" | "livre" | "livrée" => OrderStatus::Delivred,
            "ready_for_pickup" | "ready" | "awaiting_pickup" | "à retirer" | "a retirer"
            | "a_retirer" => OrderStatus::ReadyForPickup,
            "picked_up" | "retiré" | "retire" | "retirée" => OrderStatus::PickedUp,
            "received" | "reçu" | "recu" | "reçue" => OrderStatus::Received,
            "reception_refused" | "refus_de_reception" | "refused" | "refusé" | "refuse" => {
                OrderStatus::ReceptionRefused
            }
            "completed" | "terminé" | "termine" | "terminée" => OrderStatus::Completed,
            "cancelled" | "canceled" | "annulé" | "annule" | "annulée" => OrderStatus::Cancelled,
            _ => return None,
        };
        Some(status)
    }

    /// Whether no further transition is legal out of this status
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::ReceptionRefused
        )
    }

    /// Post-delivery statuses, the precondition the review component checks
    /// before accepting a review for an order
    pub const fn is_post_delivery(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivred
                | OrderStatus::PickedUp
                | OrderStatus::Received
                | OrderStatus::Completed
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_canonical(&value).ok_or_else(|| format!("unknown order status: {value}"))
    }
}

/// Buyer's chosen fulfilment method, fixed at order creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceptionMode {
    /// Pickup at the seller's location
    Retrait,
    /// Shipped to the buyer's address
    Livraison,
}

impl ReceptionMode {
    /// The stored/wire string for this mode
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReceptionMode::Retrait => "retrait",
            ReceptionMode::Livraison => "livraison",
        }
    }

    /// Interpret a client-supplied mode string
    ///
    /// Defaults to pickup; only a case-insensitive `livraison` selects
    /// delivery.
    pub fn from_request(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("livraison") => ReceptionMode::Livraison,
            _ => ReceptionMode::Retrait,
        }
    }
}

impl std::fmt::Display for ReceptionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ReceptionMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "retrait" => Ok(ReceptionMode::Retrait),
            "livraison" => Ok(ReceptionMode::Livraison),
            other => Err(format!("unknown reception mode: {other}")),
        }
    }
}
