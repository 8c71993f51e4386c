//! Order API Module

mod handler;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::core::AppState;

/// Order router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/buyer", get(handler::list_buyer))
        .route("/seller", get(handler::list_seller))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", patch(handler::update_status))
}
