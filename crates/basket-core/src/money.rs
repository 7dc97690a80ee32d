//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    15000 × 0.05 may not land exactly on 750                             │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 fixed point (rust_decimal)                       │
//! │    15000 × 0.05 = 750 exactly                                           │
//! │    10000.01 stays 10000.01, never 10000.0099999...                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! // Create from whole currency units (KRW has no minor unit)
//! let price = Money::from_units(12_000);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // 24,000원
//! let total = price + Money::from_units(3_000); // 15,000원
//! assert_eq!(total.to_string(), "15,000원");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::MINOR_UNIT_SCALE;

/// Basis points in one whole (100%).
const BPS_PER_WHOLE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents an exact monetary value.
///
/// ## Design Decisions
/// - **Decimal (signed)**: exact base-10 arithmetic, allows fractional prices
///   such as `10000.01` even though KRW itself has no minor unit
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Serde**: a JSON number carrying the exact decimal text, never an `f64`
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  request.price ──► BasketItem.unit_price ──► BasketItem.line_total      │
/// │                                                   │                     │
/// │                                                   ▼                     │
/// │  Receipt.subtotal ──► Receipt.discount ──► Receipt.final_amount        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_units(5_000);
    /// assert_eq!(price.to_string(), "5,000원");
    /// ```
    #[inline]
    pub fn from_units(units: i64) -> Self {
        Money(Decimal::from(units))
    }

    /// Creates a Money value from an exact decimal.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_units(3_000);
    /// let line_total = unit_price.checked_multiply_quantity(3).unwrap();
    /// assert_eq!(line_total, Money::from_units(9_000));
    /// ```
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two values, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Sums an iterator of values, returning `None` on overflow.
    pub fn checked_sum<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        values
            .into_iter()
            .try_fold(Money::zero(), |acc, value| acc.checked_add(*value))
    }

    /// Returns the given share of this amount, expressed in basis points.
    ///
    /// The multiplication is exact; trailing zeros of the result are
    /// normalized away so `15000 × 5%` is `750`, not `750.0000`.
    /// Rates above 100% are clamped to 100%, which keeps the result no
    /// larger in magnitude than `self`.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let subtotal = Money::from_units(20_000);
    /// assert_eq!(subtotal.percentage_of_bps(1_000), Money::from_units(2_000));
    /// ```
    pub fn percentage_of_bps(&self, bps: u32) -> Money {
        let rate = Decimal::new(i64::from(bps.min(BPS_PER_WHOLE)), 4);
        Money((self.0 * rate).normalize())
    }

    /// Rounds to `scale` decimal places using round-half-up.
    ///
    /// Midpoints move away from zero, which is round-half-up for the
    /// non-negative amounts a basket produces.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let discount = Money::from_decimal(Decimal::new(5000005, 4)); // 500.0005
    /// assert_eq!(discount.round_to_minor_units(0), Money::from_units(500));
    ///
    /// let half = Money::from_decimal(Decimal::new(25, 1)); // 2.5
    /// assert_eq!(half.round_to_minor_units(0), Money::from_units(3));
    /// ```
    pub fn round_to_minor_units(&self, scale: u32) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display rounds to the currency's minor unit and groups thousands.
///
/// ## Example
/// `Money::from_units(18_000)` displays as `18,000원`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_minor_units(MINOR_UNIT_SCALE).0;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = rounded.abs().to_string();
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        write!(f, "{}{}", sign, group_thousands(whole))?;
        if let Some(fraction) = fraction {
            write!(f, ".{}", fraction)?;
        }
        write!(f, "원")
    }
}

/// Inserts `,` between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parses the canonical decimal text (used when loading from storage).
impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str_exact(s).map(Money)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, value| acc + *value)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(5_000);
        assert_eq!(money.amount(), dec!(5000));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(0).to_string(), "0원");
        assert_eq!(Money::from_units(750).to_string(), "750원");
        assert_eq!(Money::from_units(5_000).to_string(), "5,000원");
        assert_eq!(Money::from_units(14_250).to_string(), "14,250원");
        assert_eq!(Money::from_units(1_234_567).to_string(), "1,234,567원");
        assert_eq!(Money::from_units(-2_000).to_string(), "-2,000원");
    }

    #[test]
    fn test_display_rounds_half_up() {
        assert_eq!(Money::from_decimal(dec!(499.5)).to_string(), "500원");
        assert_eq!(Money::from_decimal(dec!(499.49)).to_string(), "499원");
        assert_eq!(Money::from_decimal(dec!(750.0000)).to_string(), "750원");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1_000);
        let b = Money::from_units(500);

        assert_eq!(a + b, Money::from_units(1_500));
        assert_eq!(a - b, Money::from_units(500));
        assert_eq!(a * 3, Money::from_units(3_000));

        let mut c = a;
        c += b;
        c -= Money::from_units(250);
        assert_eq!(c, Money::from_units(1_250));
    }

    #[test]
    fn test_decimal_is_exact() {
        // 0.1 + 0.2 is exactly 0.3 in base 10
        let sum = Money::from_decimal(dec!(0.1)) + Money::from_decimal(dec!(0.2));
        assert_eq!(sum, Money::from_decimal(dec!(0.3)));
    }

    #[test]
    fn test_percentage_of_bps() {
        assert_eq!(
            Money::from_units(15_000).percentage_of_bps(500),
            Money::from_units(750)
        );
        assert_eq!(
            Money::from_decimal(dec!(10000.01)).percentage_of_bps(500),
            Money::from_decimal(dec!(500.0005))
        );
        assert_eq!(Money::from_units(9_999).percentage_of_bps(0), Money::zero());
        // Clamped at 100%
        assert_eq!(
            Money::from_units(100).percentage_of_bps(50_000),
            Money::from_units(100)
        );
    }

    #[test]
    fn test_percentage_result_is_normalized() {
        let discount = Money::from_units(15_000).percentage_of_bps(500);
        assert_eq!(discount.amount().to_string(), "750");
    }

    #[test]
    fn test_round_to_minor_units() {
        let value = Money::from_decimal(dec!(2.5));
        assert_eq!(value.round_to_minor_units(0), Money::from_units(3));

        let value = Money::from_decimal(dec!(10.125));
        assert_eq!(
            value.round_to_minor_units(2),
            Money::from_decimal(dec!(10.13))
        );
    }

    #[test]
    fn test_checked_operations() {
        let unit = Money::from_units(3_000);
        assert_eq!(
            unit.checked_multiply_quantity(2),
            Some(Money::from_units(6_000))
        );

        let huge = Money::from_decimal(Decimal::MAX);
        assert_eq!(huge.checked_multiply_quantity(2), None);
        assert_eq!(huge.checked_add(Money::from_units(1)), None);

        let values = [Money::from_units(1), Money::from_units(2)];
        assert_eq!(Money::checked_sum(&values), Some(Money::from_units(3)));
        assert_eq!(Money::checked_sum(&[huge, huge]), None);
    }

    #[test]
    fn test_sum() {
        let values = vec![Money::from_units(12_000), Money::from_units(3_000)];
        let by_ref: Money = values.iter().sum();
        let by_value: Money = values.into_iter().sum();
        assert_eq!(by_ref, Money::from_units(15_000));
        assert_eq!(by_value, Money::from_units(15_000));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_units(100);
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_units(-100);
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "10000.01".parse::<Money>().ok(),
            Some(Money::from_decimal(dec!(10000.01)))
        );
        assert!("ten".parse::<Money>().is_err());
    }

    #[test]
    fn test_json_is_exact_number() {
        let money = Money::from_decimal(dec!(10000.01));
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "10000.01");

        let parsed: Money = serde_json::from_str("19999.99").unwrap();
        assert_eq!(parsed, Money::from_decimal(dec!(19999.99)));

        let parsed: Money = serde_json::from_str("5000").unwrap();
        assert_eq!(parsed, Money::from_units(5_000));
    }
}
