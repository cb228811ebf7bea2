//! # Validation Module
//!
//! Input validation for the checked pricing path.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront (TypeScript)                                      │
//! │  └── Quantity pickers, size selectors                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Order API / quote CLI                                        │
//! │  ├── Deserialization (missing fields → defaults)                       │
//! │  └── THIS MODULE: line item and policy rules                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: PricingCalculator                                            │
//! │  └── Total functions, never fail                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::validation::{validate_cart, validate_quantity};
//! use bazaar_core::LineItem;
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_cart(&[LineItem::new("tee-01", 4000, 2)]).is_ok());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::LineItem;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MAX_UNIT_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product id accepted by the checked path.
pub const MAX_PRODUCT_ID_LEN: usize = 64;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "product_id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "product_id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// Zero is allowed (free items). The upper bound is MAX_UNIT_PRICE_CENTS.
///
/// ```rust
/// use bazaar_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(4000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(i64::MAX / 10).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_UNIT_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "unit_price_cents".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a fee rate in basis points (0% to 100%).
pub fn validate_fee_rate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates cart size (number of line items).
pub fn validate_cart_size(items: usize) -> ValidationResult<()> {
    if items > MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Line Item Validators
// =============================================================================

/// Validates one cart entry: product id, price and quantity.
///
/// COD flags are not checked; a missing flag is a legitimate "not eligible".
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_product_id(&item.product_id)?;
    validate_price_cents(item.unit_price_cents)?;
    validate_quantity(item.quantity)?;
    Ok(())
}

/// Validates a whole cart, reporting the position of the first bad item.
pub fn validate_cart(items: &[LineItem]) -> CoreResult<()> {
    validate_cart_size(items.len())?;

    for (index, item) in items.iter().enumerate() {
        validate_line_item(item).map_err(|source| CoreError::InvalidLineItem { index, source })?;
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
    fn test_validate_product_id() {
        assert!(validate_product_id("tee-01").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id(&"p".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents_caps_unit_price() {
        assert!(validate_price_cents(MAX_UNIT_PRICE_CENTS).is_ok());
        assert!(matches!(
            validate_price_cents(MAX_UNIT_PRICE_CENTS + 1),
            Err(ValidationError::OutOfRange { max: MAX_UNIT_PRICE_CENTS, .. })
        ));
        assert!(validate_price_cents(i64::MAX).is_err());
    }

    #[test]
    fn test_largest_valid_cart_fits_in_i64() {
        let worst = (MAX_UNIT_PRICE_CENTS as i128)
            * (MAX_ITEM_QUANTITY as i128)
            * (MAX_CART_ITEMS as i128);
        assert!(worst < i64::MAX as i128);
    }

    #[test]
    fn test_validate_fee_rate_bps() {
        assert!(validate_fee_rate_bps("rate", 0).is_ok());
        assert!(validate_fee_rate_bps("rate", 10_000).is_ok());
        assert!(validate_fee_rate_bps("rate", 10_001).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS + 1).is_err());
    }

    #[test]
    fn test_validate_cart_reports_index() {
        let items = vec![
            LineItem::new("tee-01", 4000, 1),
            LineItem::new("mug-02", -1, 1),
        ];
        match validate_cart(&items) {
            Err(CoreError::InvalidLineItem { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidLineItem, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_cart_ignores_missing_cod_flags() {
        let items = vec![LineItem::new("tee-01", 4000, 2)];
        assert!(validate_cart(&items).is_ok());
    }
}
