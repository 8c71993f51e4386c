//! Order API Handlers
//!
//! Thin layer between the HTTP surface and the order lifecycle services.
//! The acting user always comes from the validated token, never from the
//! request body.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::AppState;
use crate::db::models::{Order, OrderSummary};
use crate::orders::{CreateOrderRequest, OrderCreationService, OrderQueryService, OrderTransitionEngine};
use crate::utils::{AppError, AppResult};

/// Query params for order list views
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Optional status filter (canonical or aliased string)
    pub status: Option<String>,
}

/// Body for `PATCH /api/orders/{id}/status`
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Create a new order for the authenticated buyer
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let service = OrderCreationService::new(state.db.clone(), state.notifier.clone());
    let order = service
        .create(&user, payload)
        .await
        .map_err(AppError::from)?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// List the authenticated user's purchases
pub async fn list_buyer(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<OrderSummary>>> {
    let service = OrderQueryService::new(state.db.clone());
    let orders = service
        .list_for_buyer(&user, query.status.as_deref())
        .await
        .map_err(AppError::from)?;
    Ok(Json(orders))
}

/// List the authenticated user's sales
pub async fn list_seller(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<OrderSummary>>> {
    let service = OrderQueryService::new(state.db.clone());
    let orders = service
        .list_for_seller(&user, query.status.as_deref())
        .await
        .map_err(AppError::from)?;
    Ok(Json(orders))
}

/// Get one order, visible only to its buyer or seller
pub async fn get_by_id(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderSummary>> {
    let service = OrderQueryService::new(state.db.clone());
    let order = service
        .get_for_actor(&user, id)
        .await
        .map_err(AppError::from)?;
    Ok(Json(order))
}

/// Apply a status transition to an order
pub async fn update_status(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<Order>> {
    let engine = OrderTransitionEngine::new(state.db.clone(), state.notifier.clone());
    let order = engine
        .change_status(&user, id, &payload.status)
        .await
        .map_err(AppError::from)?;
    Ok(Json(order))
}
