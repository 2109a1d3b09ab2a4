//! Payment HTTP handlers.

use axum::Json;
use axum::extract::{Path, State};
use common::{Money, UserId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::WalletStore;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Deserialize)]
pub struct AddBalanceRequest {
    pub user_id: UserId,
    pub amount_cents: Money,
}

#[derive(Serialize)]
pub struct AddBalanceResponse {
    pub message: &'static str,
    pub new_balance_cents: Money,
}

/// POST /add_balance — credit a wallet, creating it on first use.
#[tracing::instrument(skip(store, req), fields(user_id = %req.user_id))]
pub async fn add_balance(
    State(store): State<WalletStore>,
    Json(req): Json<AddBalanceRequest>,
) -> Result<Json<AddBalanceResponse>, ApiError> {
    let new_balance = store.add_balance(req.user_id, req.amount_cents).await?;
    tracing::info!(balance = %new_balance, "balance added");
    Ok(Json(AddBalanceResponse {
        message: "balance added",
        new_balance_cents: new_balance,
    }))
}

#[derive(Serialize)]
pub struct BalanceResponse {
    pub balance_cents: Money,
}

/// GET /get_balance/{userId} — zero for unknown users.
#[tracing::instrument(skip(store))]
pub async fn get_balance(
    State(store): State<WalletStore>,
    Path(user_id): Path<u64>,
) -> Json<BalanceResponse> {
    Json(BalanceResponse {
        balance_cents: store.balance(UserId::new(user_id)).await,
    })
}
