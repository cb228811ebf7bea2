//! # Bazaar Quote
//!
//! Prices a cart from the command line, the same way the checkout and
//! price-preview endpoints do.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  args ──► QuoteConfig::load ──► PricingCalculator::try_new             │
//! │                                        │                                │
//! │  cart.json / stdin ──► Vec<LineItem> ──┤                                │
//! │                                        ▼                                │
//! │                           quote / quote_checked                         │
//! │                                        │                                │
//! │                 stdout ◄── OrderTotals (JSON)   stderr ◄── tracing      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod args;
pub mod config;

use std::io::{Read, Write};

use anyhow::Context;
use bazaar_core::validation::validate_cart;
use bazaar_core::{LineItem, OrderTotals, PaymentMode, PricingCalculator};
use tracing::{info, warn};

use crate::args::QuoteArgs;
use crate::config::QuoteConfig;

/// Prices the cart read from `input` and writes the totals to `output`.
pub fn run_quote<R, W>(
    config: &QuoteConfig,
    args: &QuoteArgs,
    input: R,
    mut output: W,
) -> anyhow::Result<OrderTotals>
where
    R: Read,
    W: Write,
{
    let calculator =
        PricingCalculator::try_new(config.policy).context("Pricing policy rejected")?;

    let items: Vec<LineItem> =
        serde_json::from_reader(input).context("Cart is not a JSON array of line items")?;

    if config.strict || args.strict {
        validate_cart(&items).context("Cart rejected in strict mode")?;
    }

    let totals = match args.mode {
        PaymentMode::CashOnDelivery => calculator.order_with_cod(&items, args.shipping_fee),
        PaymentMode::Online => {
            if !args.shipping_fee.is_zero() {
                warn!(
                    shipping_cents = args.shipping_fee.cents(),
                    "Shipping fee override ignored for online orders"
                );
            }
            calculator.order_with_online_shipping(&items)
        }
    };

    if args.mode == PaymentMode::CashOnDelivery && !totals.eligibility.all_eligible {
        for entry in &totals.eligibility.ineligible_items {
            warn!(product_id = %entry.item.product_id, reason = %entry.reason, "Not COD eligible");
        }
    }

    info!(
        mode = ?args.mode,
        items = items.len(),
        subtotal = %totals.subtotal.display_with_code(&config.currency_code),
        total = %totals.total.display_with_code(&config.currency_code),
        "Quote ready"
    );

    serde_json::to_writer_pretty(&mut output, &totals).context("Failed to write totals")?;
    writeln!(output)?;

    Ok(totals)
}
