//! Stock record store with all-or-nothing batch deduction.

use std::collections::HashMap;
use std::sync::Arc;

use common::ProductId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// One line of a deduction batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Reasons a deduction batch is refused. The first offending item is named;
/// when a batch is refused no stock has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StockError {
    #[error("product {0} not found in inventory")]
    ProductNotFound(ProductId),

    #[error("insufficient stock for product {0}")]
    InsufficientStock(ProductId),
}

impl StockError {
    /// The product the refusal is about.
    pub fn product_id(&self) -> ProductId {
        match self {
            StockError::ProductNotFound(id) | StockError::InsufficientStock(id) => *id,
        }
    }
}

/// In-memory stock store.
///
/// Stock is `u32`, so it cannot go negative; `deduct` holds the write lock
/// across validation and decrement, which both makes a batch atomic and
/// serializes concurrent deductions.
#[derive(Debug, Clone, Default)]
pub struct StockStore {
    inner: Arc<RwLock<HashMap<ProductId, u32>>>,
}

impl StockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stock level for a product, if tracked.
    pub async fn get(&self, product_id: ProductId) -> Option<u32> {
        self.inner.read().await.get(&product_id).copied()
    }

    /// Sets the stock level for a product, creating the row if needed.
    pub async fn set(&self, product_id: ProductId, stock: u32) {
        self.inner.write().await.insert(product_id, stock);
    }

    /// Deducts stock for every item in the batch, all-or-nothing.
    ///
    /// A product named on several lines is checked against the sum of those
    /// lines, not each line in isolation. Validates the whole batch before
    /// mutating anything; on any refusal the error names the first offending
    /// line and no stock changes.
    pub async fn deduct(&self, items: &[DeductItem]) -> Result<(), StockError> {
        let mut inner = self.inner.write().await;

        let mut claimed: HashMap<ProductId, u32> = HashMap::new();
        for item in items {
            let Some(&stock) = inner.get(&item.product_id) else {
                return Err(StockError::ProductNotFound(item.product_id));
            };
            let total = claimed.entry(item.product_id).or_insert(0);
            *total = total.saturating_add(item.quantity);
            if stock < *total {
                return Err(StockError::InsufficientStock(item.product_id));
            }
        }

        for (product_id, quantity) in claimed {
            if let Some(stock) = inner.get_mut(&product_id) {
                *stock -= quantity;
            }
        }

        Ok(())
    }

    /// Seeds the demo stock levels, but only into an empty store.
    pub async fn seed_defaults(&self) {
        let mut inner = self.inner.write().await;
        if !inner.is_empty() {
            return;
        }
        inner.insert(ProductId::new(1), 10);
        inner.insert(ProductId::new(2), 20);
        inner.insert(ProductId::new(3), 15);
    }
}
