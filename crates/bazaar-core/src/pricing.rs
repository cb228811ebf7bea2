//! # Order Pricing
//!
//! Turns a cart and a payment mode into [`OrderTotals`].
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        quote(items, mode)                               │
//! │                                                                         │
//! │  items ──► compute_subtotal ──┬──────────────────────────────────┐     │
//! │                               │                                   │     │
//! │         ┌─── CashOnDelivery ──┴─── Online ───┐                    │     │
//! │         ▼                                    ▼                    │     │
//! │  evaluate_cart(items)             online_shipping_fee(subtotal)   │     │
//! │         │                                    │                    │     │
//! │  eligible? cod_fee(subtotal) : 0             │                    │     │
//! │         │                                    │                    │     │
//! │         └──────────────► total = subtotal + shipping + cod ◄──────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::{LineItem, PaymentMode, PricingCalculator};
//!
//! let calculator = PricingCalculator::default();
//! let items = vec![LineItem::new("tee-01", 5000, 1).with_cod(true)];
//!
//! let totals = calculator.quote(&items, PaymentMode::CashOnDelivery);
//! assert_eq!(totals.cod_fee.cents(), 1000); // 10% of 50.00 is below the 10.00 floor
//! assert_eq!(totals.total.cents(), 6000);
//! ```
//!
//! Every operation is a pure function of its inputs and the policy, so one
//! calculator can serve checkout and price previews from any thread.

use tracing::debug;

use crate::eligibility::evaluate_cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::policy::PricingPolicy;
use crate::types::{EligibilityVerdict, LineItem, OrderTotals, PaymentMode};
use crate::validation::validate_cart;

/// Σ(unit price × quantity). An empty cart is zero.
///
/// Saturates at the i64 bounds on absurd input rather than panicking.
pub fn compute_subtotal(items: &[LineItem]) -> Money {
    items.iter().map(LineItem::line_total).sum()
}

/// Applies a [`PricingPolicy`] to carts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingCalculator {
    policy: PricingPolicy,
}

impl PricingCalculator {
    /// Creates a calculator without checking the policy.
    pub const fn new(policy: PricingPolicy) -> Self {
        PricingCalculator { policy }
    }

    /// Creates a calculator after [`PricingPolicy::validate`] passes.
    pub fn try_new(policy: PricingPolicy) -> CoreResult<Self> {
        policy.validate().map_err(CoreError::InvalidPolicy)?;
        Ok(PricingCalculator { policy })
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// COD surcharge for a subtotal.
    ///
    /// ## Rules
    /// - `subtotal >= cod_free_threshold` → 0
    /// - otherwise `clamp(subtotal × cod_fee_rate, cod_fee_min, cod_fee_max)`
    ///
    /// The percentage is rounded half-up to the cent before clamping.
    pub fn cod_fee(&self, subtotal: Money) -> Money {
        if subtotal >= self.policy.cod_free_threshold() {
            return Money::zero();
        }

        subtotal
            .apply_rate(self.policy.cod_fee_rate())
            .clamp_to(self.policy.cod_fee_min(), self.policy.cod_fee_max())
    }

    /// Prepaid shipping fee for a subtotal.
    ///
    /// ## Rules
    /// - `subtotal <= shipping_free_threshold` → `subtotal × shipping_fee_rate`
    /// - otherwise → 0
    pub fn online_shipping_fee(&self, subtotal: Money) -> Money {
        if subtotal > self.policy.shipping_free_threshold() {
            return Money::zero();
        }

        subtotal.apply_rate(self.policy.shipping_fee_rate())
    }

    /// Totals for a cash-on-delivery order.
    ///
    /// `shipping_fee` is passed through unchanged into the total. A cart that
    /// is not COD eligible is never charged the COD fee; checkout is expected
    /// to block it using `eligibility.ineligible_items`.
    pub fn order_with_cod(&self, items: &[LineItem], shipping_fee: Money) -> OrderTotals {
        let subtotal = compute_subtotal(items);
        let eligibility = evaluate_cart(items);
        let cod_fee = if eligibility.all_eligible {
            self.cod_fee(subtotal)
        } else {
            Money::zero()
        };

        debug!(
            items = items.len(),
            subtotal = subtotal.cents(),
            cod_fee = cod_fee.cents(),
            eligible = eligibility.all_eligible,
            ineligible = eligibility.ineligible_items.len(),
            "Priced COD order"
        );

        build_totals(subtotal, cod_fee, shipping_fee, eligibility)
    }

    /// Totals for a prepaid order.
    ///
    /// The COD verdict is still reported so the storefront can offer COD.
    pub fn order_with_online_shipping(&self, items: &[LineItem]) -> OrderTotals {
        let subtotal = compute_subtotal(items);
        let shipping_fee = self.online_shipping_fee(subtotal);

        debug!(
            items = items.len(),
            subtotal = subtotal.cents(),
            shipping_fee = shipping_fee.cents(),
            "Priced online order"
        );

        build_totals(subtotal, Money::zero(), shipping_fee, evaluate_cart(items))
    }

    /// Prices a cart for the given payment mode.
    pub fn quote(&self, items: &[LineItem], mode: PaymentMode) -> OrderTotals {
        match mode {
            PaymentMode::CashOnDelivery => self.order_with_cod(items, Money::zero()),
            PaymentMode::Online => self.order_with_online_shipping(items),
        }
    }

    /// Like [`quote`](Self::quote), but rejects malformed line items first.
    ///
    /// Besides prices and quantities, the marketplace also requires every
    /// line item to carry a product id here. The permissive path accepts an
    /// empty one.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidLineItem`] for a negative price, a price above
    ///   [`MAX_UNIT_PRICE_CENTS`](crate::MAX_UNIT_PRICE_CENTS), a bad quantity,
    ///   or an empty product id
    /// - [`CoreError::Validation`] when the cart has too many items
    pub fn quote_checked(&self, items: &[LineItem], mode: PaymentMode) -> CoreResult<OrderTotals> {
        validate_cart(items)?;
        Ok(self.quote(items, mode))
    }
}

fn build_totals(
    subtotal: Money,
    cod_fee: Money,
    shipping_fee: Money,
    eligibility: EligibilityVerdict,
) -> OrderTotals {
    OrderTotals {
        subtotal,
        cod_fee,
        shipping_fee,
        total: subtotal + shipping_fee + cod_fee,
        eligibility,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
