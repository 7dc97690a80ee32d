//! # Validation Module
//!
//! Input validation for basket items.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP (basket-api)                                            │
//! │  ├── JSON shape (deserialization, malformed body → 400)                │
//! │  └── Empty item list → EmptyBasket (before anything else)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Item construction (basket-core)                              │
//! │  └── THIS MODULE: name / price / quantity rules                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (quantity >= 1)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::{validate_item_name, validate_quantity};
//!
//! assert!(validate_item_name("보호필름").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item display name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - Must be at most [`MAX_ITEM_NAME_LEN`] characters
///
/// Length is counted in characters, not bytes, so Hangul names get the same
/// allowance as Latin ones.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (>= 1)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use basket_core::money::Money;
/// use basket_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_units(5_000)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_units(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("스마트폰 케이스").is_ok());
        assert!(validate_item_name("Charging cable").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(MAX_ITEM_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_name_length_counts_characters() {
        // 200 Hangul syllables are 600 bytes but still fit
        assert!(validate_item_name(&"가".repeat(MAX_ITEM_NAME_LEN)).is_ok());
        assert_eq!(
            validate_item_name(&"가".repeat(MAX_ITEM_NAME_LEN + 1)),
            Err(ValidationError::TooLong {
                field: "name".to_string(),
                max: MAX_ITEM_NAME_LEN,
            })
        );
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::zero()).is_ok());
        assert!(validate_unit_price(Money::from_units(12_000)).is_ok());
        assert!(validate_unit_price(Money::from_units(-1)).is_err());
    }
}
