//! Order HTTP handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use clients::DeductItem;
use common::UserId;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;
use crate::model::Order;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /metrics — Prometheus exposition format.
pub async fn metrics(State(handle): State<PrometheusHandle>) -> impl axum::response::IntoResponse {
    (
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        handle.render(),
    )
}

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub items: Vec<DeductItem>,
}

/// POST /orders — run the placement workflow.
#[tracing::instrument(skip(state, req), fields(user_id = %req.user_id))]
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = state.placement.place_order(req.user_id, req.items).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders/{userId} — the user's orders in creation order.
#[tracing::instrument(skip(state))]
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Json<Vec<Order>> {
    Json(state.placement.store().list_for_user(UserId::new(user_id)).await)
}
