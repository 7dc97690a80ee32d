//! # Basket API
//!
//! HTTP server for creating shopping baskets and reading them back with a
//! computed receipt.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Basket API Server                             │
//! │                                                                         │
//! │  Client ───► axum (8080) ───► routes ───► BasketService                 │
//! │                                              │          │               │
//! │                                              ▼          ▼               │
//! │                                     dyn BasketStore  compute_receipt    │
//! │                                     (SQLite/memory)  (basket-core)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `BASKET_BIND_ADDR` - Listen address (default: 0.0.0.0)
//! - `BASKET_HTTP_PORT` - Listen port (default: 8080)
//! - `BASKET_STORE` - `sqlite` or `memory` (default: sqlite)
//! - `BASKET_DB_PATH` - SQLite file, `:memory:` allowed (default: basket.db)
//! - `BASKET_DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `RUST_LOG` - Log filter (default: info,basket=debug,sqlx=warn)

pub mod config;
pub mod dto;
pub mod error;
pub mod routes;
pub mod service;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use basket_db::{BasketStore, Database, DbConfig, DbResult, MemoryBasketStore};

// Re-exports
pub use config::{ApiConfig, ConfigError, StoreKind};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::router;
pub use service::BasketService;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=basket_api=trace` - Show trace for this crate only
/// - Default: `info,basket=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,basket=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Opens the store selected by `config`.
pub async fn open_store(config: &ApiConfig) -> DbResult<Arc<dyn BasketStore>> {
    match config.store {
        StoreKind::Memory => {
            info!("Using in-memory basket store");
            Ok(Arc::new(MemoryBasketStore::new()))
        }
        StoreKind::Sqlite => {
            let db_config = DbConfig::new(config.database_path.clone())
                .max_connections(config.db_max_connections);
            let db = Database::new(db_config).await?;
            info!(path = %config.database_path.display(), "Using SQLite basket store");
            Ok(Arc::new(db.baskets()))
        }
    }
}
