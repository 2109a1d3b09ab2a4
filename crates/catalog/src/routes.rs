//! Catalog HTTP handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::{NewProduct, Product, ProductStore};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}

/// GET /products — page through the catalog.
#[tracing::instrument(skip(store, params))]
pub async fn list(
    State(store): State<ProductStore>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Product>> {
    Json(store.list(params.skip, params.limit).await)
}

/// GET /products/{id}
#[tracing::instrument(skip(store))]
pub async fn get_one(
    State(store): State<ProductStore>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::new(id);
    store
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// POST /products — create with a server-assigned id.
#[tracing::instrument(skip(store, new))]
pub async fn create(
    State(store): State<ProductStore>,
    Json(new): Json<NewProduct>,
) -> (StatusCode, Json<Product>) {
    let product = store.create(new).await;
    tracing::info!(product_id = %product.id, "product created");
    (StatusCode::CREATED, Json(product))
}

/// PUT /products/{id} — full replacement of an existing product.
#[tracing::instrument(skip(store, new))]
pub async fn update(
    State(store): State<ProductStore>,
    Path(id): Path<u64>,
    Json(new): Json<NewProduct>,
) -> Result<Json<Product>, ApiError> {
    let id = ProductId::new(id);
    store
        .update(id, new)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// DELETE /products/{id}
#[tracing::instrument(skip(store))]
pub async fn delete(
    State(store): State<ProductStore>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    let id = ProductId::new(id);
    if store.delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}
