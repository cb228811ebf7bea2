//! # bazaar-core: Pricing and COD Eligibility for the Bazaar Marketplace
//!
//! This crate prices marketplace carts. It contains the checkout math as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront (React / TypeScript)                 │   │
//! │  │      Product page ──► Cart ──► Checkout (COD | Online)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST (order API, out of tree)          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │     Order creation  /  price preview  /  bazaar-quote CLI       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ bazaar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ eligibility │  │  policy  │  │   │
//! │  │   │ LineItem  │  │ Calculator│  │ resolution  │  │ fee table│  │   │
//! │  │   │OrderTotals│  │  fees     │  │  order      │  │          │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Line items, totals, eligibility verdicts
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`eligibility`] - COD resolution per item and per cart
//! - [`pricing`] - Subtotal, COD fee, shipping fee, order totals
//! - [`policy`] - Thresholds and rates injected into the calculator
//! - [`validation`] - Checks for the validating pricing path
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::{LineItem, PaymentMode, PricingCalculator};
//!
//! let calculator = PricingCalculator::default();
//! let cart = vec![LineItem::new("tee-01", 4000, 2)];
//!
//! let totals = calculator.quote(&cart, PaymentMode::Online);
//! assert_eq!(totals.subtotal.cents(), 8000);
//! assert_eq!(totals.shipping_fee.cents(), 800);
//! assert_eq!(totals.total.cents(), 8800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod eligibility;
pub mod error;
pub mod money;
pub mod policy;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use eligibility::{is_cart_cod_eligible, list_ineligible_items};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use policy::PricingPolicy;
pub use pricing::{compute_subtotal, PricingCalculator};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items accepted by the validating path.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Catches typos such as 1000 instead of 10 before an order is placed.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest unit price accepted by the validating path (100,000,000.00).
///
/// A full cart at this price and quantity stays far below `i64::MAX` cents,
/// so validated carts never reach the saturating bounds of [`Money`].
pub const MAX_UNIT_PRICE_CENTS: i64 = 10_000_000_000;
