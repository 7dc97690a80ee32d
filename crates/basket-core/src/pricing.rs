//! # Pricing Module
//!
//! Computes the receipt for a basket: subtotal, discount tier, discount and
//! final amount.
//!
//! ## Discount Tiers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Subtotal → Tier                                 │
//! │                                                                         │
//! │        0 ─────────── 10,000 ──────────────── 20,000 ─────────────►      │
//! │        │   None (0%)    ]( Standard (5%)    )[   Premium (10%)          │
//! │                                                                         │
//! │  subtotal ≤ 10,000            → 0%    (10,000 itself: no discount)      │
//! │  10,000 < subtotal < 20,000   → 5%                                      │
//! │  subtotal ≥ 20,000            → 10%   (20,000 itself: already 10%)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lower threshold is exclusive and the upper one inclusive. Keep it
//! that way: existing receipts and tests depend on both edges.
//!
//! ## Usage
//! ```rust
//! use basket_core::{compute_receipt, BasketItem, DiscountTier, Money};
//!
//! let items = vec![
//!     BasketItem::new("스마트폰 케이스", Money::from_units(15_000), 1).unwrap(),
//!     BasketItem::new("보호필름", Money::from_units(5_000), 1).unwrap(),
//! ];
//!
//! let receipt = compute_receipt(&items);
//! assert_eq!(receipt.tier, DiscountTier::Premium);
//! assert_eq!(receipt.discount, Money::from_units(2_000));
//! assert_eq!(receipt.final_amount, Money::from_units(18_000));
//! ```

use std::fmt;

use crate::money::Money;
use crate::types::BasketItem;
use crate::{NO_DISCOUNT_CEILING, PREMIUM_DISCOUNT_FLOOR};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 500 bps = 5% and 1000 bps = 10%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a whole percentage (for display only).
    #[inline]
    pub const fn percentage(&self) -> u32 {
        self.0 / 100
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// The three discount bands, chosen solely by subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountTier {
    /// Subtotal at or below 10,000: no discount.
    None,
    /// Subtotal strictly between 10,000 and 20,000: 5%.
    Standard,
    /// Subtotal of 20,000 or more: 10%.
    Premium,
}

impl DiscountTier {
    /// Selects the tier for a subtotal.
    pub fn for_subtotal(subtotal: Money) -> Self {
        if subtotal >= Money::from_units(PREMIUM_DISCOUNT_FLOOR) {
            DiscountTier::Premium
        } else if subtotal > Money::from_units(NO_DISCOUNT_CEILING) {
            DiscountTier::Standard
        } else {
            DiscountTier::None
        }
    }

    /// The rate applied by this tier.
    pub const fn rate(&self) -> DiscountRate {
        match self {
            DiscountTier::None => DiscountRate::zero(),
            DiscountTier::Standard => DiscountRate::from_bps(500),
            DiscountTier::Premium => DiscountRate::from_bps(1_000),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The priced view of a basket. Derived on every read, never stored.
///
/// ## Guarantees
/// - `subtotal`, `discount` and `final_amount` are non-negative
/// - `final_amount == subtotal - discount` exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Tier selected by the subtotal.
    pub tier: DiscountTier,
    /// `subtotal × tier rate`, exact.
    pub discount: Money,
    /// `subtotal - discount`.
    pub final_amount: Money,
}

impl Receipt {
    /// Rate applied to produce `discount`.
    #[inline]
    pub fn rate(&self) -> DiscountRate {
        self.tier.rate()
    }
}

/// Prices a sequence of basket items.
///
/// ## Algorithm
/// ```text
/// items ──► Σ line_total ──► subtotal ──► DiscountTier::for_subtotal
///                               │                    │
///                               │                    ▼
///                               │        discount = subtotal × rate
///                               ▼                    │
///                  final_amount = subtotal - discount ◄┘
/// ```
///
/// Uses the frozen line totals; unit price and quantity are not consulted.
/// An empty slice prices to all zeros. Callers reject empty baskets before
/// they get here.
pub fn compute_receipt(items: &[BasketItem]) -> Receipt {
    let subtotal: Money = items.iter().map(BasketItem::line_total).sum();
    let tier = DiscountTier::for_subtotal(subtotal);
    let discount = subtotal.percentage_of_bps(tier.rate().bps());
    let final_amount = subtotal - discount;

    Receipt {
        subtotal,
        tier,
        discount,
        final_amount,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
