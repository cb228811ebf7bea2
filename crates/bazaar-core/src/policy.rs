//! # Pricing Policy
//!
//! The fee table the calculator is built with.
//!
//! ## Fee Curves (defaults)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  COD fee                                                                │
//! │    subtotal <  150.00  → clamp(10% of subtotal, 10.00, 15.00)          │
//! │    subtotal >= 150.00  → 0                                             │
//! │                                                                         │
//! │    fee ▲                                                                │
//! │  15.00 │                 ╱│                                             │
//! │  10.00 ├────────────────╱ │                                             │
//! │      0 │                  └──────────────────►                          │
//! │        0             100  150       subtotal                            │
//! │                                                                         │
//! │  Online shipping fee                                                    │
//! │    subtotal <= 100.00  → 10% of subtotal                               │
//! │    subtotal >  100.00  → 0                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both curves drop to zero at their threshold: a 149.00 COD cart pays 14.90
//! while a 150.00 cart pays nothing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::FeeRate;
use crate::validation::{validate_fee_rate_bps, ValidationResult};

/// Subtotal at or above which COD is free.
pub const DEFAULT_COD_FREE_THRESHOLD_CENTS: i64 = 15_000;
pub const DEFAULT_COD_FEE_RATE_BPS: u32 = 1_000;
pub const DEFAULT_COD_FEE_MIN_CENTS: i64 = 1_000;
pub const DEFAULT_COD_FEE_MAX_CENTS: i64 = 1_500;
/// Subtotal above which prepaid shipping is free.
pub const DEFAULT_SHIPPING_FREE_THRESHOLD_CENTS: i64 = 10_000;
pub const DEFAULT_SHIPPING_FEE_RATE_BPS: u32 = 1_000;

/// Thresholds and rates for the COD fee and the prepaid shipping fee.
///
/// Stored as plain cents and basis points so the table can be read straight
/// from TOML or environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct PricingPolicy {
    pub cod_free_threshold_cents: i64,
    pub cod_fee_rate_bps: u32,
    pub cod_fee_min_cents: i64,
    pub cod_fee_max_cents: i64,
    pub shipping_free_threshold_cents: i64,
    pub shipping_fee_rate_bps: u32,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            cod_free_threshold_cents: DEFAULT_COD_FREE_THRESHOLD_CENTS,
            cod_fee_rate_bps: DEFAULT_COD_FEE_RATE_BPS,
            cod_fee_min_cents: DEFAULT_COD_FEE_MIN_CENTS,
            cod_fee_max_cents: DEFAULT_COD_FEE_MAX_CENTS,
            shipping_free_threshold_cents: DEFAULT_SHIPPING_FREE_THRESHOLD_CENTS,
            shipping_fee_rate_bps: DEFAULT_SHIPPING_FEE_RATE_BPS,
        }
    }
}

impl PricingPolicy {
    #[inline]
    pub fn cod_free_threshold(&self) -> Money {
        Money::from_cents(self.cod_free_threshold_cents)
    }

    #[inline]
    pub fn cod_fee_rate(&self) -> FeeRate {
        FeeRate::from_bps(self.cod_fee_rate_bps)
    }

    #[inline]
    pub fn cod_fee_min(&self) -> Money {
        Money::from_cents(self.cod_fee_min_cents)
    }

    #[inline]
    pub fn cod_fee_max(&self) -> Money {
        Money::from_cents(self.cod_fee_max_cents)
    }

    #[inline]
    pub fn shipping_free_threshold(&self) -> Money {
        Money::from_cents(self.shipping_free_threshold_cents)
    }

    #[inline]
    pub fn shipping_fee_rate(&self) -> FeeRate {
        FeeRate::from_bps(self.shipping_fee_rate_bps)
    }

    /// Checks that the table describes a usable policy.
    ///
    /// ## Rules
    /// - Rates are at most 10000 bps (100%)
    /// - Thresholds and fee bounds are not negative
    /// - `cod_fee_min_cents <= cod_fee_max_cents`
    pub fn validate(&self) -> ValidationResult<()> {
        validate_fee_rate_bps("cod_fee_rate_bps", self.cod_fee_rate_bps)?;
        validate_fee_rate_bps("shipping_fee_rate_bps", self.shipping_fee_rate_bps)?;

        for (field, cents) in [
            ("cod_free_threshold_cents", self.cod_free_threshold_cents),
            ("cod_fee_min_cents", self.cod_fee_min_cents),
            ("cod_fee_max_cents", self.cod_fee_max_cents),
            ("shipping_free_threshold_cents", self.shipping_free_threshold_cents),
        ] {
            if cents < 0 {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    min: 0,
                    max: i64::MAX,
                });
            }
        }

        if self.cod_fee_min_cents > self.cod_fee_max_cents {
            return Err(ValidationError::Inverted {
                lower: "cod_fee_min_cents".to_string(),
                upper: "cod_fee_max_cents".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(PricingPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_default_policy_values() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.cod_free_threshold().cents(), 15_000);
        assert_eq!(policy.cod_fee_rate().bps(), 1_000);
        assert_eq!(policy.cod_fee_min().cents(), 1_000);
        assert_eq!(policy.cod_fee_max().cents(), 1_500);
        assert_eq!(policy.shipping_free_threshold().cents(), 10_000);
        assert_eq!(policy.shipping_fee_rate().bps(), 1_000);
    }

    #[test]
    fn test_inverted_fee_bounds_rejected() {
        let policy = PricingPolicy {
            cod_fee_min_cents: 2_000,
            ..PricingPolicy::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(ValidationError::Inverted { .. })
        ));
    }

    #[test]
    fn test_rate_above_hundred_percent_rejected() {
        let policy = PricingPolicy {
            shipping_fee_rate_bps: 10_001,
            ..PricingPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let policy = PricingPolicy {
            cod_free_threshold_cents: -1,
            ..PricingPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let policy: PricingPolicy =
            serde_json::from_str(r#"{"cod_fee_max_cents": 2000}"#).unwrap();
        assert_eq!(policy.cod_fee_max_cents, 2_000);
        assert_eq!(policy.cod_fee_min_cents, DEFAULT_COD_FEE_MIN_CENTS);
    }
}
