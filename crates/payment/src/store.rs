//! Wallet record store.

use std::collections::HashMap;
use std::sync::Arc;

use common::{Money, UserId};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors from wallet operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("amount must be positive")]
    InvalidAmount,
}

/// In-memory wallet store keyed by user.
///
/// Wallets are created lazily on first credit; reading an unknown user's
/// balance yields zero rather than an error.
#[derive(Debug, Clone, Default)]
pub struct WalletStore {
    inner: Arc<RwLock<HashMap<UserId, Money>>>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits a strictly positive amount, creating the wallet if needed.
    /// Returns the new balance.
    pub async fn add_balance(&self, user_id: UserId, amount: Money) -> Result<Money, WalletError> {
        if !amount.is_positive() {
            return Err(WalletError::InvalidAmount);
        }
        let mut inner = self.inner.write().await;
        let balance = inner.entry(user_id).or_insert_with(Money::zero);
        *balance += amount;
        Ok(*balance)
    }

    /// Returns a user's balance, zero for unknown users.
    pub async fn balance(&self, user_id: UserId) -> Money {
        self.inner
            .read()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or_else(Money::zero)
    }
}
