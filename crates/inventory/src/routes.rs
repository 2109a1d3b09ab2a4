//! Inventory HTTP handlers.

use axum::Json;
use axum::extract::{Path, State};
use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::{DeductItem, StockStore};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
pub struct StockResponse {
    pub product_id: ProductId,
    pub stock: u32,
}

/// GET /inventory/{productId}
#[tracing::instrument(skip(store))]
pub async fn get_stock(
    State(store): State<StockStore>,
    Path(product_id): Path<u64>,
) -> Result<Json<StockResponse>, ApiError> {
    let product_id = ProductId::new(product_id);
    let stock = store
        .get(product_id)
        .await
        .ok_or(ApiError::NotFound(product_id))?;
    Ok(Json(StockResponse { product_id, stock }))
}

#[derive(Deserialize)]
pub struct SetStockRequest {
    pub stock: u32,
}

/// PUT /inventory/{productId} — set a stock level (seed/admin surface).
#[tracing::instrument(skip(store, req))]
pub async fn set_stock(
    State(store): State<StockStore>,
    Path(product_id): Path<u64>,
    Json(req): Json<SetStockRequest>,
) -> Json<StockResponse> {
    let product_id = ProductId::new(product_id);
    store.set(product_id, req.stock).await;
    Json(StockResponse {
        product_id,
        stock: req.stock,
    })
}

#[derive(Deserialize)]
pub struct DeductRequest {
    pub items: Vec<DeductItem>,
}

#[derive(Serialize)]
pub struct DeductResponse {
    pub message: &'static str,
}

/// POST /inventory/deduct — all-or-nothing batch deduction.
#[tracing::instrument(skip(store, req), fields(batch_size = req.items.len()))]
pub async fn deduct(
    State(store): State<StockStore>,
    Json(req): Json<DeductRequest>,
) -> Result<Json<DeductResponse>, ApiError> {
    store.deduct(&req.items).await?;
    tracing::info!(items = req.items.len(), "inventory deducted");
    Ok(Json(DeductResponse {
        message: "inventory updated",
    }))
}
