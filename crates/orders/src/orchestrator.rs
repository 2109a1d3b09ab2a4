//! Order-placement orchestrator.
//!
//! Coordinates the catalog, inventory, and analytics collaborators to turn a
//! request into a committed order. The stages run in strict sequence:
//! price, deduct, persist, notify. There is no separate stock pre-check —
//! the inventory deduct call is the one atomic check-and-decrement, so no
//! validate/deduct race window exists on this path.

use std::collections::BTreeMap;
use std::sync::Arc;

use clients::{
    AnalyticsSink, ClientError, DeductItem, InventoryGateway, OrderPlacedEvent, OrderPlacedItem,
    ProductCatalog,
};
use common::{Money, OrderId, ProductId, UserId};
use futures_util::future::try_join_all;
use thiserror::Error;

use crate::model::{LineItem, Order, OrderStatus};
use crate::store::OrderStore;

/// Reasons order placement fails. No order is persisted on any of these.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The request itself is malformed; no collaborator was contacted.
    #[error("invalid order request: {0}")]
    InvalidInput(String),

    /// A line references a product the catalog does not know.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Inventory refused the batch: a product is untracked or short on
    /// stock. Nothing was deducted.
    #[error("insufficient inventory: {message}")]
    InsufficientInventory {
        product_id: Option<ProductId>,
        message: String,
    },

    /// A pricing lookup failed at the transport level.
    #[error("error fetching product information: {0}")]
    Upstream(String),

    /// The deduct call failed at the transport level. Stock may or may not
    /// have been deducted on the inventory side; this is surfaced, never
    /// swallowed.
    #[error("inventory deduction failed: {0}")]
    InventoryCommitFailed(String),
}

/// The order-placement workflow over its three collaborators and the local
/// order store.
#[derive(Clone)]
pub struct OrderPlacement {
    catalog: Arc<dyn ProductCatalog>,
    inventory: Arc<dyn InventoryGateway>,
    analytics: Arc<dyn AnalyticsSink>,
    store: OrderStore,
}

impl OrderPlacement {
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        inventory: Arc<dyn InventoryGateway>,
        analytics: Arc<dyn AnalyticsSink>,
        store: OrderStore,
    ) -> Self {
        Self {
            catalog,
            inventory,
            analytics,
            store,
        }
    }

    /// The order store this workflow commits into.
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// Places an order for `user_id`.
    ///
    /// Stages, each gated on the previous one succeeding:
    /// 1. validate the request shape,
    /// 2. fold lines naming the same product together and price each
    ///    distinct product once (lookups fan out concurrently; prices are
    ///    captured as snapshots),
    /// 3. deduct stock in one all-or-nothing batch,
    /// 4. persist the order as `completed`,
    /// 5. notify analytics best-effort — a failure here is logged and
    ///    discarded because the order is already committed.
    #[tracing::instrument(skip(self, items), fields(user_id = %user_id, lines = items.len()))]
    pub async fn place_order(
        &self,
        user_id: UserId,
        items: Vec<DeductItem>,
    ) -> Result<Order, OrderError> {
        metrics::counter!("orders_attempted_total").increment(1);
        let start = std::time::Instant::now();

        let result = self.run_stages(user_id, items).await;
        match &result {
            Ok(order) => {
                metrics::counter!("orders_placed_total").increment(1);
                tracing::info!(order_id = %order.id, total = %order.total_cents, "order placed");
            }
            Err(err) => {
                metrics::counter!("order_failures_total").increment(1);
                tracing::warn!(error = %err, "order placement failed");
            }
        }
        metrics::histogram!("order_placement_duration_seconds")
            .record(start.elapsed().as_secs_f64());

        result
    }

    async fn run_stages(
        &self,
        user_id: UserId,
        items: Vec<DeductItem>,
    ) -> Result<Order, OrderError> {
        // Stage 1: request shape.
        if items.is_empty() {
            return Err(OrderError::InvalidInput(
                "order must contain at least one item".to_string(),
            ));
        }
        if let Some(bad) = items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::InvalidInput(format!(
                "quantity for product {} must be positive",
                bad.product_id
            )));
        }

        // Stage 2: fold repeated products into one line, then take a price
        // snapshot per distinct product, fanned out concurrently. Folding
        // keeps the deducted quantity the batch total, not the per-line one.
        let mut quantities: BTreeMap<ProductId, u32> = BTreeMap::new();
        for item in &items {
            let quantity = quantities.entry(item.product_id).or_insert(0);
            *quantity = quantity.saturating_add(item.quantity);
        }

        let lines = try_join_all(quantities.into_iter().map(|(product_id, quantity)| {
            let catalog = Arc::clone(&self.catalog);
            async move {
                let price = catalog.price_of(product_id).await.map_err(|e| match e {
                    ClientError::NotFound(_) => OrderError::ProductNotFound(product_id),
                    other => OrderError::Upstream(other.to_string()),
                })?;
                Ok::<LineItem, OrderError>(LineItem {
                    product_id,
                    quantity,
                    unit_price_cents: price,
                })
            }
        }))
        .await?;

        let total_cents: Money = lines.iter().map(LineItem::total).sum();

        // Stage 3: atomic all-or-nothing deduction of the folded batch.
        let batch: Vec<DeductItem> = lines
            .iter()
            .map(|line| DeductItem {
                product_id: line.product_id,
                quantity: line.quantity,
            })
            .collect();
        self.inventory.deduct(&batch).await.map_err(|e| match e {
            ClientError::Rejected {
                product_id,
                message,
            } => OrderError::InsufficientInventory {
                product_id,
                message,
            },
            other => OrderError::InventoryCommitFailed(other.to_string()),
        })?;

        // Stage 4: commit locally. Only now does the order exist.
        let order = Order {
            id: OrderId::new(),
            user_id,
            items: lines,
            total_cents,
            status: OrderStatus::Completed,
            created_at: chrono::Utc::now(),
        };
        self.store.insert(order.clone()).await;

        // Stage 5: best-effort notification.
        let event = OrderPlacedEvent {
            order_id: order.id,
            user_id,
            total_cents: total_cents.cents(),
            items: order
                .items
                .iter()
                .map(|line| OrderPlacedItem {
                    product_id: line.product_id,
                    quantity: line.quantity,
                    unit_price_cents: line.unit_price_cents.cents(),
                })
                .collect(),
        };
        if let Err(err) = self.analytics.publish(&event).await {
            tracing::warn!(order_id = %order.id, error = %err, "analytics notification dropped");
        }

        Ok(order)
    }
}
