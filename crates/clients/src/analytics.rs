//! Analytics sink contract: fire-and-forget event publication.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::{OrderId, ProductId, UserId};
use serde::Serialize;

use crate::error::ClientError;

/// Event type tag for completed orders.
pub const ORDER_PLACED: &str = "order_placed";

/// One line of an order as reported to analytics.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPlacedItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

/// Payload published after an order commits.
#[derive(Debug, Clone, Serialize)]
pub struct OrderPlacedEvent {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub total_cents: i64,
    pub items: Vec<OrderPlacedItem>,
}

/// Best-effort event publication.
///
/// Callers treat failures as non-fatal; the contract only promises a bounded
/// attempt, never delivery.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Publishes an order-placed event.
    async fn publish(&self, event: &OrderPlacedEvent) -> Result<(), ClientError>;
}

/// HTTP client for the analytics service.
#[derive(Clone)]
pub struct HttpAnalyticsSink {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct EventBody<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    data: &'a OrderPlacedEvent,
}

impl HttpAnalyticsSink {
    /// Creates an analytics client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl AnalyticsSink for HttpAnalyticsSink {
    async fn publish(&self, event: &OrderPlacedEvent) -> Result<(), ClientError> {
        let url = format!("{}/analytics/event", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&EventBody {
                event_type: ORDER_PLACED,
                data: event,
            })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Transport(format!(
                "analytics returned {} for {url}",
                response.status()
            )))
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryAnalyticsState {
    events: Vec<OrderPlacedEvent>,
    fail: bool,
}

/// In-memory analytics sink that records published events.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalytics {
    state: Arc<RwLock<InMemoryAnalyticsState>>,
}

impl InMemoryAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures every subsequent publish to fail.
    pub fn set_fail(&self, fail: bool) {
        self.state.write().unwrap().fail = fail;
    }

    /// Returns the number of recorded events.
    pub fn event_count(&self) -> usize {
        self.state.read().unwrap().events.len()
    }

    /// Returns a copy of all recorded events.
    pub fn events(&self) -> Vec<OrderPlacedEvent> {
        self.state.read().unwrap().events.clone()
    }
}

#[async_trait]
impl AnalyticsSink for InMemoryAnalytics {
    async fn publish(&self, event: &OrderPlacedEvent) -> Result<(), ClientError> {
        let mut state = self.state.write().unwrap();
        if state.fail {
            return Err(ClientError::Transport("analytics unreachable".to_string()));
        }
        state.events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Money;

    fn sample_event() -> OrderPlacedEvent {
        OrderPlacedEvent {
            order_id: OrderId::new(),
            user_id: UserId::new(1),
            total_cents: Money::from_cents(299_997).cents(),
            items: vec![OrderPlacedItem {
                product_id: ProductId::new(1),
                quantity: 3,
                unit_price_cents: 99_999,
            }],
        }
    }

    #[tokio::test]
    async fn publish_records_event() {
        let sink = InMemoryAnalytics::new();
        sink.publish(&sample_event()).await.unwrap();

        assert_eq!(sink.event_count(), 1);
        assert_eq!(sink.events()[0].total_cents, 299_997);
    }

    #[tokio::test]
    async fn fail_switch_drops_event() {
        let sink = InMemoryAnalytics::new();
        sink.set_fail(true);

        assert!(sink.publish(&sample_event()).await.is_err());
        assert_eq!(sink.event_count(), 0);
    }

    #[test]
    fn event_body_uses_type_tag() {
        let event = sample_event();
        let body = EventBody {
            event_type: ORDER_PLACED,
            data: &event,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "order_placed");
        assert_eq!(json["data"]["total_cents"], 299_997);
    }
}
