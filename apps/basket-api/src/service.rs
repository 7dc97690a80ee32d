//! # Basket Service
//!
//! Orchestrates request validation, the store and pricing.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  items: Vec<BasketItemRequest>                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  empty? ──────────────► EMPTY_BASKET   (store untouched)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BasketItem::new(...) for each, in order                               │
//! │       │ first failure ─► INVALID_ITEM  (store untouched)               │
//! │       ▼                                                                 │
//! │  NewBasket::new(items) ► subtotal overflow ─► INVALID_ITEM             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  store.save(new_basket) ──► BasketId                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads load the stored items and price them with `compute_receipt` on
//! every call; receipts are never stored.

use std::sync::Arc;

use tracing::{debug, info, warn};

use basket_core::{
    compute_receipt, render_receipt, Basket, BasketId, BasketItem, CoreError, NewBasket, Receipt,
};
use basket_db::BasketStore;

use crate::dto::BasketItemRequest;
use crate::error::{ApiError, ApiResult};

/// Basket use cases over any [`BasketStore`].
#[derive(Clone)]
pub struct BasketService {
    store: Arc<dyn BasketStore>,
}

impl BasketService {
    /// Creates a service backed by `store`.
    pub fn new(store: Arc<dyn BasketStore>) -> Self {
        BasketService { store }
    }

    /// Validates and persists a basket, returning its new identifier.
    ///
    /// Emptiness is checked first; then items are validated in order and the
    /// first invalid one fails the whole request. Nothing is written unless
    /// every item is valid.
    pub async fn create_basket(&self, items: Vec<BasketItemRequest>) -> ApiResult<BasketId> {
        if items.is_empty() {
            debug!("Rejecting empty basket");
            return Err(CoreError::EmptyBasket.into());
        }

        let mut validated = Vec::with_capacity(items.len());
        for (position, item) in items.into_iter().enumerate() {
            let item = BasketItem::new(item.name, item.price, item.quantity).map_err(|e| {
                debug!(position, error = %e, "Rejecting basket item");
                ApiError::invalid_item(format!("item {}: {}", position, e))
            })?;
            validated.push(item);
        }

        let new_basket = NewBasket::new(validated)?;
        let item_count = new_basket.items().len();

        let basket = self.store.save(new_basket).await?;

        info!(basket_id = %basket.id, items = item_count, "Basket created");
        Ok(basket.id)
    }

    /// Loads a basket and prices it.
    ///
    /// `id` is the raw path segment; a malformed id is reported exactly like
    /// an unknown one.
    pub async fn get_basket(&self, id: &str) -> ApiResult<(Basket, Receipt)> {
        let basket_id = match id.parse::<BasketId>() {
            Ok(basket_id) => basket_id,
            Err(e) => {
                debug!(error = %e, "Malformed basket id");
                return Err(ApiError::not_found("Basket", id));
            }
        };

        let basket = self
            .store
            .find_by_id(basket_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Basket", id))?;

        let receipt = compute_receipt(&basket.items);
        debug!(
            basket_id = %basket.id,
            subtotal = %receipt.subtotal.amount(),
            discount = %receipt.discount.amount(),
            "Basket priced"
        );

        Ok((basket, receipt))
    }

    /// Loads a basket and renders its printable receipt.
    pub async fn get_receipt_text(&self, id: &str) -> ApiResult<String> {
        let (basket, receipt) = self.get_basket(id).await?;
        Ok(render_receipt(&basket.items, &receipt))
    }

    /// Checks if the backing store answers.
    pub async fn health_check(&self) -> bool {
        let healthy = self.store.health_check().await;
        if !healthy {
            warn!("Basket store failed its health check");
        }
        healthy
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
