//! Inventory gateway contract: atomic batch stock deduction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// One line of a deduction batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Write access to inventory stock.
///
/// `deduct` is the single check-and-decrement: the inventory service
/// validates and commits the whole batch atomically, so callers do not
/// pre-read stock levels.
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    /// Deducts stock for every item, all-or-nothing.
    ///
    /// A business refusal (unknown product, insufficient stock) surfaces as
    /// [`ClientError::Rejected`] naming the offending product; transport
    /// failures surface as [`ClientError::Transport`].
    async fn deduct(&self, items: &[DeductItem]) -> Result<(), ClientError>;
}

/// HTTP client for the inventory service.
#[derive(Clone)]
pub struct HttpInventoryGateway {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct DeductBody<'a> {
    items: &'a [DeductItem],
}

#[derive(Deserialize)]
struct RejectionBody {
    error: String,
    product_id: Option<ProductId>,
}

impl HttpInventoryGateway {
    /// Creates an inventory client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl InventoryGateway for HttpInventoryGateway {
    async fn deduct(&self, items: &[DeductItem]) -> Result<(), ClientError> {
        let url = format!("{}/inventory/deduct", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&DeductBody { items })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::BAD_REQUEST {
            let body: RejectionBody = response.json().await.map_err(|e| {
                ClientError::Transport(format!("unreadable rejection from inventory: {e}"))
            })?;
            return Err(ClientError::Rejected {
                product_id: body.product_id,
                message: body.error,
            });
        }

        Err(ClientError::Transport(format!(
            "inventory returned {status} for {url}"
        )))
    }
}

#[derive(Debug, Default)]
struct InMemoryInventoryState {
    stock: HashMap<ProductId, u32>,
    fail_on_deduct: bool,
}

/// In-memory inventory for testing.
///
/// Mirrors the real endpoint's all-or-nothing semantics: one bad item leaves
/// every stock level unchanged.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    state: Arc<RwLock<InMemoryInventoryState>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stock level for a product.
    pub fn set_stock(&self, product_id: ProductId, stock: u32) {
        self.state.write().unwrap().stock.insert(product_id, stock);
    }

    /// Returns the current stock level, if the product is known.
    pub fn stock(&self, product_id: ProductId) -> Option<u32> {
        self.state.read().unwrap().stock.get(&product_id).copied()
    }

    /// Configures every subsequent deduct to fail at the transport level.
    pub fn set_fail_on_deduct(&self, fail: bool) {
        self.state.write().unwrap().fail_on_deduct = fail;
    }
}

#[async_trait]
impl InventoryGateway for InMemoryInventory {
    async fn deduct(&self, items: &[DeductItem]) -> Result<(), ClientError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_deduct {
            return Err(ClientError::Transport("inventory unreachable".to_string()));
        }

        // Validate the whole batch before touching anything; lines naming
        // the same product are checked against their sum.
        let mut claimed: HashMap<ProductId, u32> = HashMap::new();
        for item in items {
            let Some(&stock) = state.stock.get(&item.product_id) else {
                return Err(ClientError::Rejected {
                    product_id: Some(item.product_id),
                    message: format!("product {} not found in inventory", item.product_id),
                });
            };
            let total = claimed.entry(item.product_id).or_insert(0);
            *total = total.saturating_add(item.quantity);
            if stock < *total {
                return Err(ClientError::Rejected {
                    product_id: Some(item.product_id),
                    message: format!("insufficient stock for product {}", item.product_id),
                });
            }
        }

        for (product_id, quantity) in claimed {
            if let Some(stock) = state.stock.get_mut(&product_id) {
                *stock -= quantity;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deduct_decrements_every_item() {
        let inventory = InMemoryInventory::new();
        inventory.set_stock(ProductId::new(1), 10);
        inventory.set_stock(ProductId::new(2), 5);

        inventory
            .deduct(&[
                DeductItem {
                    product_id: ProductId::new(1),
                    quantity: 3,
                },
                DeductItem {
                    product_id: ProductId::new(2),
                    quantity: 5,
                },
            ])
            .await
            .unwrap();

        assert_eq!(inventory.stock(ProductId::new(1)), Some(7));
        assert_eq!(inventory.stock(ProductId::new(2)), Some(0));
    }

    #[tokio::test]
    async fn one_bad_item_leaves_batch_untouched() {
        let inventory = InMemoryInventory::new();
        inventory.set_stock(ProductId::new(1), 10);
        inventory.set_stock(ProductId::new(2), 1);

        let err = inventory
            .deduct(&[
                DeductItem {
                    product_id: ProductId::new(1),
                    quantity: 3,
                },
                DeductItem {
                    product_id: ProductId::new(2),
                    quantity: 2,
                },
            ])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Rejected {
                product_id: Some(id),
                ..
            } if id == ProductId::new(2)
        ));
        assert_eq!(inventory.stock(ProductId::new(1)), Some(10));
        assert_eq!(inventory.stock(ProductId::new(2)), Some(1));
    }

    #[tokio::test]
    async fn repeated_product_lines_are_summed_before_validation() {
        let inventory = InMemoryInventory::new();
        inventory.set_stock(ProductId::new(1), 10);

        let err = inventory
            .deduct(&[
                DeductItem {
                    product_id: ProductId::new(1),
                    quantity: 6,
                },
                DeductItem {
                    product_id: ProductId::new(1),
                    quantity: 6,
                },
            ])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Rejected {
                product_id: Some(id),
                ..
            } if id == ProductId::new(1)
        ));
        assert_eq!(inventory.stock(ProductId::new(1)), Some(10));
    }

    #[tokio::test]
    async fn unknown_product_is_rejected() {
        let inventory = InMemoryInventory::new();
        let err = inventory
            .deduct(&[DeductItem {
                product_id: ProductId::new(9),
                quantity: 1,
            }])
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Rejected { .. }));
    }

    #[tokio::test]
    async fn fail_switch_yields_transport_error() {
        let inventory = InMemoryInventory::new();
        inventory.set_stock(ProductId::new(1), 10);
        inventory.set_fail_on_deduct(true);

        let err = inventory
            .deduct(&[DeductItem {
                product_id: ProductId::new(1),
                quantity: 1,
            }])
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(inventory.stock(ProductId::new(1)), Some(10));
    }
}
