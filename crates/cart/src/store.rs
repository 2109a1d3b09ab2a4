//! Cart record store keyed by (user, product).

use std::collections::BTreeMap;
use std::sync::Arc;

use common::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// One row of a user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: u32,
}

/// In-memory cart store.
///
/// The (user, product) pair is the key: adding an existing pair merges
/// quantities instead of duplicating the row.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Arc<RwLock<BTreeMap<(UserId, ProductId), u32>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` of a product to a user's cart, merging with any
    /// existing row. Returns the resulting row.
    pub async fn add(&self, user_id: UserId, product_id: ProductId, quantity: u32) -> CartItem {
        let mut inner = self.inner.write().await;
        let entry = inner.entry((user_id, product_id)).or_insert(0);
        *entry += quantity;
        CartItem {
            user_id,
            product_id,
            quantity: *entry,
        }
    }

    /// Lists a user's cart in product-id order. Unknown users get an empty
    /// list, not an error.
    pub async fn list(&self, user_id: UserId) -> Vec<CartItem> {
        let inner = self.inner.read().await;
        inner
            .range((user_id, ProductId::new(0))..=(user_id, ProductId::new(u64::MAX)))
            .map(|(&(user_id, product_id), &quantity)| CartItem {
                user_id,
                product_id,
                quantity,
            })
            .collect()
    }

    /// Removes one row. Returns `false` if it did not exist.
    pub async fn remove(&self, user_id: UserId, product_id: ProductId) -> bool {
        self.inner
            .write()
            .await
            .remove(&(user_id, product_id))
            .is_some()
    }

    /// Removes every row belonging to a user. Returns the number removed.
    pub async fn clear(&self, user_id: UserId) -> usize {
        let mut inner = self.inner.write().await;
        let keys: Vec<_> = inner
            .range((user_id, ProductId::new(0))..=(user_id, ProductId::new(u64::MAX)))
            .map(|(&key, _)| key)
            .collect();
        for key in &keys {
            inner.remove(key);
        }
        keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_merges_existing_row() {
        let store = CartStore::new();
        store.add(UserId::new(1), ProductId::new(2), 1).await;
        let merged = store.add(UserId::new(1), ProductId::new(2), 3).await;

        assert_eq!(merged.quantity, 4);
        let items = store.list(UserId::new(1)).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 4);
    }

    #[tokio::test]
    async fn list_is_scoped_to_user() {
        let store = CartStore::new();
        store.add(UserId::new(1), ProductId::new(1), 1).await;
        store.add(UserId::new(2), ProductId::new(1), 5).await;

        let items = store.list(UserId::new(1)).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].user_id, UserId::new(1));
        assert!(store.list(UserId::new(3)).await.is_empty());
    }

    #[tokio::test]
    async fn remove_and_clear() {
        let store = CartStore::new();
        store.add(UserId::new(1), ProductId::new(1), 1).await;
        store.add(UserId::new(1), ProductId::new(2), 2).await;

        assert!(store.remove(UserId::new(1), ProductId::new(1)).await);
        assert!(!store.remove(UserId::new(1), ProductId::new(1)).await);

        assert_eq!(store.clear(UserId::new(1)).await, 1);
        assert!(store.list(UserId::new(1)).await.is_empty());
    }
}
