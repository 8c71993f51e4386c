//! Health check API

use axum::{Json, Router, routing::get};

use crate::core::AppState;

/// Health router
pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "fripe-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
