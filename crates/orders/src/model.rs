//! Order entities.

use chrono::{DateTime, Utc};
use common::{Money, OrderId, ProductId, UserId};
use serde::{Deserialize, Serialize};

/// One line of an order. The unit price is a snapshot taken at order time
/// and never re-read, so later catalog price changes leave past orders
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price_cents: Money,
}

impl LineItem {
    /// Line total (unit price × quantity).
    pub fn total(&self) -> Money {
        self.unit_price_cents.multiply(self.quantity)
    }
}

/// Order lifecycle status. Orders are only ever persisted as `Completed`;
/// `Pending` exists for the workflow's in-flight representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A persisted order. Immutable once stored; no update endpoint exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    pub total_cents: Money,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
