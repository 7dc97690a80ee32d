//! # Basket Store
//!
//! The persistence seam consumed by the basket service.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         dyn BasketStore                                 │
//! │                     save() / find_by_id()                               │
//! │                  ┌──────────┴──────────┐                                │
//! │                  ▼                     ▼                                │
//! │      MemoryBasketStore          BasketRepository                        │
//! │      ───────────────────        ───────────────────                     │
//! │      AtomicI64 id counter       SQLite AUTOINCREMENT                    │
//! │      RwLock<HashMap>            baskets + basket_items                  │
//! │      tests, BASKET_STORE=memory one transaction per save                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both hand out identifiers that are unique under concurrent `save` calls
//! and never reuse one.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use basket_core::{Basket, BasketId, NewBasket};

use crate::error::{DbError, DbResult};

// =============================================================================
// Store Trait
// =============================================================================

/// Creates and loads baskets.
///
/// A store never sees an empty basket: [`NewBasket`] cannot be built
/// without at least one item.
#[async_trait]
pub trait BasketStore: Send + Sync {
    /// Persists a draft basket and returns it with its new identifier.
    ///
    /// The basket and all of its items become visible together or not at all.
    async fn save(&self, basket: NewBasket) -> DbResult<Basket>;

    /// Loads a basket with its items in insertion order.
    async fn find_by_id(&self, id: BasketId) -> DbResult<Option<Basket>>;

    /// Checks if the store can serve requests.
    async fn health_check(&self) -> bool {
        true
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// A process-local store backed by a map.
///
/// Identifiers start at 1 and come from an atomic counter.
#[derive(Debug)]
pub struct MemoryBasketStore {
    next_id: AtomicI64,
    baskets: RwLock<HashMap<BasketId, Basket>>,
}

impl MemoryBasketStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryBasketStore {
            next_id: AtomicI64::new(1),
            baskets: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored baskets.
    pub async fn len(&self) -> usize {
        self.baskets.read().await.len()
    }

    /// Checks if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.baskets.read().await.is_empty()
    }

    /// Drops every basket and restarts identifiers at 1.
    pub async fn clear(&self) {
        let mut baskets = self.baskets.write().await;
        baskets.clear();
        self.next_id.store(1, Ordering::SeqCst);
    }
}

impl Default for MemoryBasketStore {
    fn default() -> Self {
        MemoryBasketStore::new()
    }
}

#[async_trait]
impl BasketStore for MemoryBasketStore {
    async fn save(&self, basket: NewBasket) -> DbResult<Basket> {
        let raw = self.next_id.fetch_add(1, Ordering::SeqCst);
        if raw <= 0 {
            return Err(DbError::corrupt("Basket", "identifier sequence exhausted"));
        }
        let id = BasketId::new(raw);

        let saved = Basket {
            id,
            items: basket.into_items(),
            created_at: Utc::now(),
        };

        debug!(%id, items = saved.items.len(), "Saving basket in memory");

        self.baskets.write().await.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: BasketId) -> DbResult<Option<Basket>> {
        Ok(self.baskets.read().await.get(&id).cloned())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
