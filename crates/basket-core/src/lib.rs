//! # basket-core: Pure Business Logic for the Basket Service
//!
//! This crate is the **heart** of the basket service. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Basket Service Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    basket-api (Axum)                            │   │
//! │  │       POST /api/baskets ──► GET /api/baskets/{id}               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │BasketItem │  │   Money   │  │  Receipt  │  │   rules   │  │   │
//! │  │   │ NewBasket │  │ (Decimal) │  │ Discount  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    basket-db (Store Layer)                      │   │
//! │  │           BasketStore trait, SQLite and in-memory stores        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BasketItem, NewBasket, Basket, BasketId)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`pricing`] - Subtotal, discount tier and final amount
//! - [`receipt`] - Printable receipt text
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{compute_receipt, BasketItem, Money};
//!
//! let items = vec![
//!     BasketItem::new("스마트폰 케이스", Money::from_units(12_000), 1).unwrap(),
//!     BasketItem::new("보호필름", Money::from_units(3_000), 1).unwrap(),
//! ];
//!
//! let receipt = compute_receipt(&items);
//! assert_eq!(receipt.subtotal, Money::from_units(15_000));
//! assert_eq!(receipt.discount, Money::from_units(750));
//! assert_eq!(receipt.final_amount, Money::from_units(14_250));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{compute_receipt, DiscountRate, DiscountTier, Receipt};
pub use receipt::render_receipt;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of decimal places in the currency's minor unit.
///
/// KRW has no minor unit, so every displayed amount is a whole number.
pub const MINOR_UNIT_SCALE: u32 = 0;

/// Subtotals at or below this amount get no discount.
pub const NO_DISCOUNT_CEILING: i64 = 10_000;

/// Subtotals at or above this amount get the top discount tier.
pub const PREMIUM_DISCOUNT_FLOOR: i64 = 20_000;

/// Maximum length of an item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 200;
