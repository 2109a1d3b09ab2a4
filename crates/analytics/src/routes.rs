//! Analytics HTTP handlers.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::{EventLog, Summary};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Deserialize)]
pub struct EventRequest {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: Value,
}

#[derive(Serialize)]
pub struct EventAck {
    pub message: &'static str,
    pub event_id: u64,
}

/// POST /analytics/event — append-only ingestion.
#[tracing::instrument(skip(log, req), fields(event_type = %req.event_type))]
pub async fn ingest(
    State(log): State<EventLog>,
    Json(req): Json<EventRequest>,
) -> Json<EventAck> {
    let event = log.append(req.event_type, req.data).await;
    tracing::debug!(event_id = event.id, "event logged");
    Json(EventAck {
        message: "event logged",
        event_id: event.id,
    })
}

/// GET /analytics/summary — aggregate over order_placed events.
#[tracing::instrument(skip(log))]
pub async fn summary(State(log): State<EventLog>) -> Json<Summary> {
    Json(log.summary().await)
}
