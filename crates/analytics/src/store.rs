//! Append-only analytics event log with on-demand aggregation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

/// Event type tag that feeds the order summary.
pub const ORDER_PLACED: &str = "order_placed";

/// A recorded analytics event. Events are never updated or deleted.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    pub id: u64,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

/// Aggregate over all `order_placed` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_orders: u64,
    pub total_revenue_cents: i64,
    pub average_order_value_cents: i64,
}

/// In-memory append-only event log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    inner: Arc<RwLock<Vec<AnalyticsEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event, assigning it the next sequential id.
    pub async fn append(&self, event_type: String, data: Value) -> AnalyticsEvent {
        let mut inner = self.inner.write().await;
        let event = AnalyticsEvent {
            id: inner.len() as u64 + 1,
            event_type,
            data,
            created_at: Utc::now(),
        };
        inner.push(event.clone());
        event
    }

    /// Returns the number of recorded events.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Computes the order summary.
    ///
    /// Revenue is the sum of each `order_placed` event's `data.total_cents`;
    /// events without a numeric `total_cents` contribute zero. Zero orders
    /// yields an average of zero, not a division error.
    pub async fn summary(&self) -> Summary {
        let inner = self.inner.read().await;

        let mut total_orders = 0u64;
        let mut total_revenue_cents = 0i64;
        for event in inner.iter().filter(|e| e.event_type == ORDER_PLACED) {
            total_orders += 1;
            total_revenue_cents += event
                .data
                .get("total_cents")
                .and_then(Value::as_i64)
                .unwrap_or(0);
        }

        let average_order_value_cents = if total_orders == 0 {
            0
        } else {
            total_revenue_cents / total_orders as i64
        };

        Summary {
            total_orders,
            total_revenue_cents,
            average_order_value_cents,
        }
    }
}
