//! # Money Module
//!
//! Provides the `Money` type used for every price, fee and total.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A cart of 3 × 33.30 in binary floating point:                          │
//! │    33.3 * 3 = 99.89999999999999  → falls under the 100.00 threshold!    │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    3330 cents × 3 = 9990 cents, every comparison is exact              │
//! │    Fee thresholds (150.00, 100.00) become 15000 and 10000 cents        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::money::Money;
//!
//! let price = Money::from_cents(4000);         // 40.00
//! let line_total = price.multiply_quantity(2); // 80.00
//! assert_eq!(line_total.cents(), 8000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::types::FeeRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: permissive pricing accepts whatever the caller sends,
///   including negative prices
/// - **Saturating**: multiplication and addition stop at `i64::MIN`/`i64::MAX`
///   instead of panicking or wrapping. The checked path caps prices so a
///   valid cart never gets there
/// - **Newtype serde**: serialized as a bare integer
/// - **No currency**: the currency code is the caller's concern
///
/// ## Where Money Flows
/// ```text
/// LineItem.unit_price ──► line_total ──► subtotal ──┬──► cod_fee ──────┐
///                                                   └──► shipping_fee ─┤
///                                                                      ▼
///                                                         OrderTotals.total
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let fee = Money::from_cents(1490); // 14.90
    /// assert_eq!(fee.cents(), 1490);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a basis-point rate, rounding half away from zero to the cent.
    ///
    /// ## Implementation
    /// Integer math in i128: `(amount * bps ± 5000) / 10000`.
    ///
    /// ```rust
    /// use bazaar_core::money::Money;
    /// use bazaar_core::types::FeeRate;
    ///
    /// let subtotal = Money::from_cents(14_905); // 149.05
    /// let fee = subtotal.apply_rate(FeeRate::from_bps(1000));
    /// // 149.05 × 10% = 14.905 → 14.91
    /// assert_eq!(fee.cents(), 1491);
    /// ```
    pub fn apply_rate(&self, rate: FeeRate) -> Money {
        let scaled = self.0 as i128 * rate.bps() as i128;
        let half = if scaled < 0 { -5000 } else { 5000 };
        let cents = ((scaled + half) / 10_000).clamp(i64::MIN as i128, i64::MAX as i128);
        Money::from_cents(cents as i64)
    }

    /// Multiplies a unit price by a quantity, saturating at the i64 bounds.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Restricts the value to `[min, max]`, inclusive on both ends.
    ///
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let (min, max) = (Money::from_cents(1000), Money::from_cents(1500));
    /// assert_eq!(Money::from_cents(500).clamp_to(min, max), min);
    /// assert_eq!(Money::from_cents(1490).clamp_to(min, max).cents(), 1490);
    /// assert_eq!(Money::from_cents(1600).clamp_to(min, max), max);
    /// ```
    #[inline]
    pub fn clamp_to(self, min: Money, max: Money) -> Money {
        self.max(min).min(max)
    }

    /// Formats the amount with a currency code prefix, e.g. `USD 60.00`.
    pub fn display_with_code(&self, currency_code: &str) -> String {
        format!("{} {}", currency_code, self)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering. Currency symbols are left to the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
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

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(6000).to_string(), "60.00");
        assert_eq!(Money::from_cents(1490).to_string(), "14.90");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_display_with_code() {
        assert_eq!(Money::from_cents(8800).display_with_code("USD"), "USD 88.00");
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        let rate = FeeRate::from_bps(1000);
        assert_eq!(Money::from_cents(14_900).apply_rate(rate).cents(), 1490);
        assert_eq!(Money::from_cents(14_905).apply_rate(rate).cents(), 1491);
        assert_eq!(Money::from_cents(14_904).apply_rate(rate).cents(), 1490);
        assert_eq!(Money::from_cents(-14_905).apply_rate(rate).cents(), -1491);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 5].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 355);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_apply_rate_saturates_instead_of_truncating() {
        let fee = Money::from_cents(i64::MAX).apply_rate(FeeRate::from_bps(20_000));
        assert_eq!(fee.cents(), i64::MAX);
    }

    #[test]
    fn test_arithmetic_saturates_at_i64_bounds() {
        let huge = Money::from_cents(i64::MAX / 10);
        assert_eq!(huge.multiply_quantity(20).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN / 2).multiply_quantity(3).cents(), i64::MIN);

        let half = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!((half + half).cents(), i64::MAX);
        let total: Money = [half, half, Money::from_cents(-5)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX - 5);
    }

    #[test]
    fn test_serde_is_bare_integer() {
        let json = serde_json::to_string(&Money::from_cents(1500)).unwrap();
        assert_eq!(json, "1500");
        let back: Money = serde_json::from_str("1500").unwrap();
        assert_eq!(back, Money::from_cents(1500));
    }
}
