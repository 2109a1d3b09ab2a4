//! Cart HTTP handlers.

use axum::Json;
use axum::extract::{Path, State};
use common::{ProductId, UserId};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;
use crate::store::CartItem;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Deserialize)]
pub struct AddItemRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// POST /cart/add — validate the product, then merge into the cart.
#[tracing::instrument(skip(state, req), fields(user_id = %req.user_id, product_id = %req.product_id))]
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartItem>, ApiError> {
    if req.quantity == 0 {
        return Err(ApiError::InvalidInput(
            "quantity must be positive".to_string(),
        ));
    }

    // Existence check only; the price is re-read at order time.
    state.catalog.price_of(req.product_id).await?;

    let item = state.store.add(req.user_id, req.product_id, req.quantity).await;
    Ok(Json(item))
}

/// GET /cart/{userId}
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Json<Vec<CartItem>> {
    Json(state.store.list(UserId::new(user_id)).await)
}

#[derive(Serialize)]
pub struct RemovedResponse {
    pub message: &'static str,
}

/// DELETE /cart/{userId}/item/{productId}
#[tracing::instrument(skip(state))]
pub async fn remove_item(
    State(state): State<AppState>,
    Path((user_id, product_id)): Path<(u64, u64)>,
) -> Result<Json<RemovedResponse>, ApiError> {
    let removed = state
        .store
        .remove(UserId::new(user_id), ProductId::new(product_id))
        .await;
    if removed {
        Ok(Json(RemovedResponse {
            message: "item removed from cart",
        }))
    } else {
        Err(ApiError::NotFound("cart item not found".to_string()))
    }
}

/// DELETE /cart/{userId}
#[tracing::instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Json<RemovedResponse> {
    let removed = state.store.clear(UserId::new(user_id)).await;
    tracing::info!(removed, "cart cleared");
    Json(RemovedResponse {
        message: "cart cleared",
    })
}
