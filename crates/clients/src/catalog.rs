//! Product catalog contract: authoritative pricing and existence checks.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::{Money, ProductId};
use serde::Deserialize;

use crate::error::ClientError;

/// Read access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns the current unit price of a product.
    ///
    /// Callers that only need an existence check call this and discard the
    /// price. Unknown products yield [`ClientError::NotFound`].
    async fn price_of(&self, product_id: ProductId) -> Result<Money, ClientError>;
}

/// HTTP client for the catalog service.
#[derive(Clone)]
pub struct HttpProductCatalog {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ProductBody {
    price_cents: i64,
}

impl HttpProductCatalog {
    /// Creates a catalog client against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }
}

#[async_trait]
impl ProductCatalog for HttpProductCatalog {
    async fn price_of(&self, product_id: ProductId) -> Result<Money, ClientError> {
        let url = format!("{}/products/{product_id}", self.base_url);
        let response = self.client.get(&url).send().await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let body: ProductBody = response.json().await?;
                Ok(Money::from_cents(body.price_cents))
            }
            reqwest::StatusCode::NOT_FOUND => {
                Err(ClientError::NotFound(format!("product {product_id}")))
            }
            status => Err(ClientError::Transport(format!(
                "catalog returned {status} for {url}"
            ))),
        }
    }
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    prices: HashMap<ProductId, Money>,
    fail: bool,
    lookups: u64,
}

/// In-memory catalog for testing orchestration without a network.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product with its unit price.
    pub fn insert(&self, product_id: ProductId, price: Money) {
        self.state.write().unwrap().prices.insert(product_id, price);
    }

    /// Configures every subsequent lookup to fail at the transport level.
    pub fn set_fail(&self, fail: bool) {
        self.state.write().unwrap().fail = fail;
    }

    /// Returns how many `price_of` calls this fake has served.
    pub fn lookup_count(&self) -> u64 {
        self.state.read().unwrap().lookups
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn price_of(&self, product_id: ProductId) -> Result<Money, ClientError> {
        let mut state = self.state.write().unwrap();
        state.lookups += 1;
        if state.fail {
            return Err(ClientError::Transport("catalog unreachable".to_string()));
        }
        state
            .prices
            .get(&product_id)
            .copied()
            .ok_or_else(|| ClientError::NotFound(format!("product {product_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn price_of_known_product() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(ProductId::new(1), Money::from_cents(99_999));

        let price = catalog.price_of(ProductId::new(1)).await.unwrap();
        assert_eq!(price.cents(), 99_999);
    }

    #[tokio::test]
    async fn price_of_unknown_product_is_not_found() {
        let catalog = InMemoryCatalog::new();
        let err = catalog.price_of(ProductId::new(9)).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn fail_switch_yields_transport_error() {
        let catalog = InMemoryCatalog::new();
        catalog.insert(ProductId::new(1), Money::from_cents(100));
        catalog.set_fail(true);

        let err = catalog.price_of(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
