//! Order lifecycle error taxonomy
//!
//! One variant per distinct rejection the lifecycle can produce, so every
//! failure reaches the client as its own error code and message. Messages
//! are the French strings the storefront shows verbatim.

use shared::error::{AppError, ErrorCode};
use shared::order::OrderStatus;
use thiserror::Error;

use crate::db::repository::RepoError;

/// Order lifecycle errors
#[derive(Debug, Error)]
pub enum OrderError {
    // ==================== Creation ====================
    #[error("Annonce requise")]
    MissingListing,

    #[error("Annonce introuvable")]
    ListingNotFound,

    #[error("Stock insuffisant : {requested} demandé(s), {available} disponible(s)")]
    InsufficientStock { requested: i64, available: i64 },

    #[error("Quantité invalide : {0}")]
    InvalidQuantity(i64),

    #[error("Adresse de livraison et téléphone requis pour la livraison")]
    MissingDeliveryInfo,

    #[error("Couleur non disponible : {0}")]
    ColorUnavailable(String),

    #[error("Taille non disponible : {0}")]
    SizeUnavailable(String),

    #[error("Prix d'annonce invalide")]
    InvalidListingPrice,

    // ==================== Transitions ====================
    #[error("Statut invalide : {0}")]
    InvalidStatus(String),

    #[error("Commande {0} introuvable")]
    OrderNotFound(i64),

    #[error("Vous ne pouvez pas modifier cette commande")]
    NotParticipant,

    /// The transition exists from this state, but for the other role
    #[error("Vous n'êtes pas autorisé à passer cette commande au statut {target}")]
    TransitionNotAllowedForActor { target: OrderStatus },

    #[error("Statut de commande inconnu : {0}")]
    UnknownCurrentState(String),

    #[error("Transition non autorisée : {current} → {target}")]
    ForbiddenTransition {
        current: OrderStatus,
        target: OrderStatus,
    },

    #[error("La commande a été modifiée entre-temps, veuillez réessayer")]
    Conflict,

    // ==================== Storage ====================
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        let code = match &err {
            OrderError::MissingListing => ErrorCode::MissingListing,
            OrderError::ListingNotFound => ErrorCode::ListingNotFound,
            OrderError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            OrderError::InvalidQuantity(_) => ErrorCode::ValueOutOfRange,
            OrderError::MissingDeliveryInfo => ErrorCode::MissingDeliveryInfo,
            OrderError::ColorUnavailable(_) => ErrorCode::ColorUnavailable,
            OrderError::SizeUnavailable(_) => ErrorCode::SizeUnavailable,
            OrderError::InvalidListingPrice => ErrorCode::ListingInvalidPrice,
            OrderError::InvalidStatus(_) => ErrorCode::InvalidStatus,
            OrderError::OrderNotFound(_) => ErrorCode::OrderNotFound,
            OrderError::NotParticipant => ErrorCode::NotOrderParticipant,
            OrderError::TransitionNotAllowedForActor { .. } => ErrorCode::PermissionDenied,
            OrderError::UnknownCurrentState(_) => ErrorCode::UnknownOrderState,
            OrderError::ForbiddenTransition { .. } => ErrorCode::ForbiddenTransition,
            OrderError::Conflict => ErrorCode::TransitionConflict,
            OrderError::Repo(repo) => match repo {
                RepoError::NotFound(_) => ErrorCode::NotFound,
                RepoError::Duplicate(_) => ErrorCode::AlreadyExists,
                RepoError::Validation(_) => ErrorCode::ValidationFailed,
                RepoError::UnknownState(_) => ErrorCode::UnknownOrderState,
                RepoError::Database(_) => ErrorCode::DatabaseError,
            },
        };
        AppError::with_message(code, message)
    }
}
