//! # basket-db: Store Layer for the Basket Service
//!
//! Persistence for baskets behind the [`BasketStore`] trait, with an
//! in-memory implementation and a SQLite one built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Service Data Flow                         │
//! │                                                                         │
//! │  BasketService (basket-api)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     basket-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │  BasketStore  │    │   Database    │    │  Migrations  │   │   │
//! │  │   │  (store.rs)   │    │   (pool.rs)   │    │  (embedded)  │   │   │
//! │  │   │               │    │               │    │              │   │   │
//! │  │   │ MemoryStore   │    │ SqlitePool    │    │ 001_create_  │   │   │
//! │  │   │ BasketRepo ───┼───►│ Connection    │    │  baskets.sql │   │   │
//! │  │   │               │    │ Management    │    │              │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (BASKET_DB_PATH)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `BasketStore` trait and the in-memory store
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Store error types
//! - [`repository`] - SQLite repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use basket_db::{BasketStore, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("basket.db")).await?;
//! let store = db.baskets();
//!
//! let saved = store.save(new_basket).await?;
//! let loaded = store.find_by_id(saved.id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::basket::BasketRepository;
pub use store::{BasketStore, MemoryBasketStore};
