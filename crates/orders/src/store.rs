//! Order record store.

use std::sync::Arc;

use common::{OrderId, UserId};
use tokio::sync::RwLock;

use crate::model::Order;

/// In-memory order store. Orders are append-only; there is no update path.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    inner: Arc<RwLock<Vec<Order>>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists an order.
    pub async fn insert(&self, order: Order) {
        self.inner.write().await.push(order);
    }

    /// Returns a user's orders in creation order.
    pub async fn list_for_user(&self, user_id: UserId) -> Vec<Order> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn get(&self, order_id: OrderId) -> Option<Order> {
        self.inner
            .read()
            .await
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
    }

    /// Total number of stored orders.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
