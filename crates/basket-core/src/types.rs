//! # Domain Types
//!
//! Core domain types used throughout the basket service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        save()        ┌─────────────────┐          │
//! │  │   NewBasket     │ ───────────────────► │     Basket      │          │
//! │  │  (Draft)        │   store assigns id   │  (Persisted)    │          │
//! │  │  ─────────────  │                      │  ─────────────  │          │
//! │  │  items (≥ 1)    │                      │  id (BasketId)  │          │
//! │  └────────┬────────┘                      │  items          │          │
//! │           │                               │  created_at     │          │
//! │           ▼                               └─────────────────┘          │
//! │  ┌─────────────────┐                                                   │
//! │  │   BasketItem    │  name, unit_price, quantity,                      │
//! │  │                 │  line_total (frozen at construction)              │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A basket never goes back to draft and has no update operation: once the
//! store hands back a [`Basket`], it is immutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{validate_item_name, validate_quantity, validate_unit_price};

// =============================================================================
// Basket Id
// =============================================================================

/// Store-assigned basket identifier.
///
/// Positive, unique and stable once issued. On the wire it is the decimal
/// string form (`"1"`, `"42"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasketId(i64);

impl BasketId {
    /// Wraps a raw identifier issued by a store.
    #[inline]
    pub const fn new(raw: i64) -> Self {
        BasketId(raw)
    }

    /// Returns the raw identifier.
    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BasketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a basket id string is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed basket id: {0:?}")]
pub struct ParseBasketIdError(pub String);

impl FromStr for BasketId {
    type Err = ParseBasketIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(raw) if raw > 0 => Ok(BasketId(raw)),
            _ => Err(ParseBasketIdError(s.to_string())),
        }
    }
}

// =============================================================================
// Basket Item
// =============================================================================

/// A line item in a basket.
///
/// The line total is computed once, at construction, and stored with the
/// item. Reading an item back never recomputes it, so a later change to
/// price rounding cannot alter a historical total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketItem {
    name: String,
    unit_price: Money,
    quantity: i64,
    line_total: Money,
}

impl BasketItem {
    /// Validates the inputs and builds an item with a frozen line total.
    ///
    /// ## Rules
    /// - `name` must not be blank and must fit [`crate::MAX_ITEM_NAME_LEN`]
    /// - `unit_price` must be `>= 0`
    /// - `quantity` must be `>= 1`
    /// - `unit_price × quantity` must be representable
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{BasketItem, Money};
    ///
    /// let item = BasketItem::new("충전 케이블", Money::from_units(8_000), 2).unwrap();
    /// assert_eq!(item.line_total(), Money::from_units(16_000));
    ///
    /// assert!(BasketItem::new("", Money::from_units(8_000), 1).is_err());
    /// assert!(BasketItem::new("충전 케이블", Money::from_units(8_000), 0).is_err());
    /// ```
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> CoreResult<Self> {
        let name = name.into();

        validate_item_name(&name)?;
        validate_unit_price(unit_price)?;
        validate_quantity(quantity)?;

        let line_total = unit_price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| ValidationError::Overflow {
                field: "line total".to_string(),
            })?;

        Ok(BasketItem {
            name,
            unit_price,
            quantity,
            line_total,
        })
    }

    /// Rebuilds an item from persisted parts.
    ///
    /// The stored line total is taken as-is.
    pub fn from_stored(name: String, unit_price: Money, quantity: i64, line_total: Money) -> Self {
        BasketItem {
            name,
            unit_price,
            quantity,
            line_total,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price at the time the basket was created.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Quantity ordered.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Frozen `unit_price × quantity`.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

// =============================================================================
// New Basket (Draft)
// =============================================================================

/// A validated basket that has not been persisted yet.
///
/// ## Invariants
/// - At least one item
/// - The sum of all line totals is representable, so pricing a stored
///   basket can never overflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBasket {
    items: Vec<BasketItem>,
}

impl NewBasket {
    /// Creates a draft basket.
    ///
    /// Fails with [`CoreError::EmptyBasket`] when `items` is empty.
    pub fn new(items: Vec<BasketItem>) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(CoreError::EmptyBasket);
        }

        if Money::checked_sum(items.iter().map(|item| &item.line_total)).is_none() {
            return Err(ValidationError::Overflow {
                field: "subtotal".to_string(),
            }
            .into());
        }

        Ok(NewBasket { items })
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    /// Consumes the draft, returning its items.
    pub fn into_items(self) -> Vec<BasketItem> {
        self.items
    }
}

// =============================================================================
// Basket (Persisted)
// =============================================================================

/// A persisted, immutable basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    /// Store-assigned identifier.
    pub id: BasketId,

    /// Items in insertion order.
    pub items: Vec<BasketItem>,

    /// When the store accepted the basket.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
