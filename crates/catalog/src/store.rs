//! Product record store.

use std::collections::BTreeMap;
use std::sync::Arc;

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// A catalog product. Carries price but no stock; stock belongs to the
/// inventory service alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price_cents: Money,
}

/// Fields for creating or replacing a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_cents: Money,
}

#[derive(Debug, Default)]
struct ProductsInner {
    products: BTreeMap<ProductId, Product>,
    next_id: u64,
}

/// In-memory product store with sequential id assignment.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<RwLock<ProductsInner>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists products in id order, skipping `skip` and returning at most
    /// `limit`.
    pub async fn list(&self, skip: usize, limit: usize) -> Vec<Product> {
        let inner = self.inner.read().await;
        inner
            .products
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.inner.read().await.products.get(&id).cloned()
    }

    /// Creates a product under the next sequential id.
    pub async fn create(&self, new: NewProduct) -> Product {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let product = Product {
            id: ProductId::new(inner.next_id),
            name: new.name,
            description: new.description,
            price_cents: new.price_cents,
        };
        inner.products.insert(product.id, product.clone());
        product
    }

    /// Replaces all fields of an existing product. Returns `None` if absent.
    pub async fn update(&self, id: ProductId, new: NewProduct) -> Option<Product> {
        let mut inner = self.inner.write().await;
        let product = inner.products.get_mut(&id)?;
        product.name = new.name;
        product.description = new.description;
        product.price_cents = new.price_cents;
        Some(product.clone())
    }

    /// Deletes a product. Returns `false` if it did not exist.
    pub async fn delete(&self, id: ProductId) -> bool {
        self.inner.write().await.products.remove(&id).is_some()
    }

    /// Seeds the demo products, but only into an empty store.
    pub async fn seed_defaults(&self) {
        let defaults = [
            ("Laptop", "High-performance laptop", 99_999),
            ("Smartphone", "Latest smartphone model", 69_999),
            ("Headphones", "Noise-cancelling headphones", 19_999),
        ];

        let mut inner = self.inner.write().await;
        if !inner.products.is_empty() {
            return;
        }
        for (name, description, cents) in defaults {
            inner.next_id += 1;
            let product = Product {
                id: ProductId::new(inner.next_id),
                name: name.to_string(),
                description: description.to_string(),
                price_cents: Money::from_cents(cents),
            };
            inner.products.insert(product.id, product);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(price: i64) -> NewProduct {
        NewProduct {
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price_cents: Money::from_cents(price),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = ProductStore::new();
        let a = store.create(widget(100)).await;
        let b = store.create(widget(200)).await;
        assert_eq!(a.id, ProductId::new(1));
        assert_eq!(b.id, ProductId::new(2));
    }

    #[tokio::test]
    async fn list_honors_skip_and_limit() {
        let store = ProductStore::new();
        for i in 0..5 {
            store.create(widget(i * 100)).await;
        }

        let page = store.list(1, 2).await;
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, ProductId::new(2));
        assert_eq!(page[1].id, ProductId::new(3));
    }

    #[tokio::test]
    async fn update_replaces_fields() {
        let store = ProductStore::new();
        let created = store.create(widget(100)).await;

        let updated = store
            .update(created.id, widget(250))
            .await
            .expect("product exists");
        assert_eq!(updated.price_cents.cents(), 250);
        assert_eq!(store.get(created.id).await.unwrap().price_cents.cents(), 250);
    }

    #[tokio::test]
    async fn delete_removes_product() {
        let store = ProductStore::new();
        let created = store.create(widget(100)).await;

        assert!(store.delete(created.id).await);
        assert!(!store.delete(created.id).await);
        assert!(store.get(created.id).await.is_none());
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let store = ProductStore::new();
        store.seed_defaults().await;
        store.seed_defaults().await;

        let all = store.list(0, 100).await;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Laptop");
        assert_eq!(all[0].price_cents.cents(), 99_999);
    }
}
