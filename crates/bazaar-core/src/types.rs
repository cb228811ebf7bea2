//! # Domain Types
//!
//! Types exchanged between the checkout flow and the pricing calculator.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    LineItem     │   │   OrderTotals   │   │ EligibilityVerdict  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  product_id     │   │  subtotal       │   │  all_eligible       │   │
//! │  │  unit_price     │──►│  cod_fee        │◄──│  ineligible_items   │   │
//! │  │  quantity       │   │  shipping_fee   │   └─────────────────────┘   │
//! │  │  selected_size  │   │  total          │                             │
//! │  │  sizes[]        │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    FeeRate      │   │   PaymentMode   │                             │
//! │  │  bps (u32)      │   │  CashOnDelivery │                             │
//! │  │  1000 = 10%     │   │  Online         │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line items are owned by the caller and never mutated here. Totals are
//! computed values with no identity; they are built once and handed back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Fee Rate
// =============================================================================

/// A percentage expressed in basis points (1 bps = 0.01%).
///
/// 1000 bps = 10%, the marketplace's COD and shipping rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeeRate(u32);

impl FeeRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        FeeRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// COD data the seller declared for one size of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SizeOption {
    /// Size label as shown to the buyer ("M", "42", "500ml").
    pub size: String,

    /// Whether this size may be paid cash on delivery.
    #[serde(default)]
    pub cod_eligible: Option<bool>,
}

/// One entry of a cart: a product, optionally a size, and a quantity.
///
/// ## Permissive Input
/// Every field may be missing in JSON.
/// Missing flags resolve to "not eligible", a missing price or quantity to 0.
/// Use [`crate::validation::validate_line_item`] to reject malformed items.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    #[serde(default)]
    pub product_id: String,

    /// Display name, only used for messages.
    #[serde(default)]
    pub name: String,

    /// Price per unit in cents.
    #[serde(default)]
    pub unit_price_cents: i64,

    #[serde(default)]
    pub quantity: i64,

    /// Size the buyer picked, if the product comes in sizes.
    #[serde(default)]
    pub selected_size: Option<String>,

    /// Item-level COD flag (copied onto the cart entry at add time).
    #[serde(default)]
    pub cod_eligible: Option<bool>,

    /// Product-level COD flag.
    #[serde(default)]
    pub product_cod_eligible: Option<bool>,

    /// Per-size COD data of the product.
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
}

impl LineItem {
    /// Creates an unsized item without any COD data.
    pub fn new(product_id: impl Into<String>, unit_price_cents: i64, quantity: i64) -> Self {
        LineItem {
            product_id: product_id.into(),
            unit_price_cents,
            quantity,
            ..Default::default()
        }
    }

    pub fn with_cod(mut self, eligible: bool) -> Self {
        self.cod_eligible = Some(eligible);
        self
    }

    pub fn with_product_cod(mut self, eligible: bool) -> Self {
        self.product_cod_eligible = Some(eligible);
        self
    }

    pub fn with_selected_size(mut self, size: impl Into<String>) -> Self {
        self.selected_size = Some(size.into());
        self
    }

    /// Adds per-size COD data for the product.
    pub fn with_size(mut self, size: impl Into<String>, cod_eligible: bool) -> Self {
        self.sizes.push(SizeOption {
            size: size.into(),
            cod_eligible: Some(cod_eligible),
        });
        self
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Looks up the per-size entry matching the selected size.
    pub fn selected_size_option(&self) -> Option<&SizeOption> {
        let selected = self.selected_size.as_deref()?;
        self.sizes.iter().find(|option| option.size == selected)
    }
}

// =============================================================================
// Payment Mode
// =============================================================================

/// How the buyer pays, which decides the fee path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Pay the courier in cash. May add a COD fee.
    #[default]
    CashOnDelivery,
    /// Prepaid through the payment gateway. May add a shipping fee.
    Online,
}

impl FromStr for PaymentMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cod" | "cash_on_delivery" => Ok(PaymentMode::CashOnDelivery),
            "online" | "prepaid" => Ok(PaymentMode::Online),
            _ => Err(ValidationError::NotAllowed {
                field: "payment mode".to_string(),
                allowed: vec!["cod".to_string(), "online".to_string()],
            }),
        }
    }
}

// =============================================================================
// Eligibility Verdict
// =============================================================================

/// Why an item cannot be paid cash on delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IneligibleReason {
    /// A size was selected and that size does not allow COD.
    SizeNotEligible { size: String },
    /// No size was selected and the product does not allow COD.
    ProductNotEligible,
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibleReason::SizeNotEligible { size } => {
                write!(f, "Size {} is not eligible for Cash on Delivery", size)
            }
            IneligibleReason::ProductNotEligible => {
                write!(f, "This product is not eligible for Cash on Delivery")
            }
        }
    }
}

/// A line item that failed COD resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IneligibleItem {
    pub item: LineItem,
    pub kind: IneligibleReason,
    /// Human-readable form of `kind`, ready for the checkout page.
    pub reason: String,
}

impl IneligibleItem {
    pub fn new(item: LineItem, kind: IneligibleReason) -> Self {
        let reason = kind.to_string();
        IneligibleItem { item, kind, reason }
    }
}

/// Whether a whole cart may be paid cash on delivery.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EligibilityVerdict {
    /// True iff the cart is non-empty and every item resolved eligible.
    pub all_eligible: bool,
    /// Failing items, in cart order.
    pub ineligible_items: Vec<IneligibleItem>,
}

// =============================================================================
// Order Totals
// =============================================================================

/// Derived totals for one cart and one payment mode.
///
/// ## Invariant
/// `total == subtotal + shipping_fee + cod_fee`, exact to the cent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub cod_fee: Money,
    pub shipping_fee: Money,
    pub total: Money,
    pub eligibility: EligibilityVerdict,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = LineItem::new("tee", 4000, 2);
        assert_eq!(item.line_total().cents(), 8000);
    }

    #[test]
    fn test_selected_size_option() {
        let item = LineItem::new("tee", 4000, 1)
            .with_size("S", true)
            .with_size("M", false)
            .with_selected_size("M");
        let option = item.selected_size_option().unwrap();
        assert_eq!(option.size, "M");
        assert_eq!(option.cod_eligible, Some(false));

        let unsized_item = LineItem::new("mug", 900, 1).with_size("S", true);
        assert!(unsized_item.selected_size_option().is_none());
    }

    #[test]
    fn test_line_item_deserializes_with_missing_fields() {
        let item: LineItem =
            serde_json::from_str(r#"{"unit_price_cents": 5000, "quantity": 1}"#).unwrap();
        assert_eq!(item.unit_price_cents, 5000);
        assert!(item.cod_eligible.is_none());
        assert!(item.sizes.is_empty());
    }

    #[test]
    fn test_payment_mode_from_str() {
        assert_eq!("cod".parse::<PaymentMode>().unwrap(), PaymentMode::CashOnDelivery);
        assert_eq!(" Online ".parse::<PaymentMode>().unwrap(), PaymentMode::Online);
        assert!("card".parse::<PaymentMode>().is_err());
    }

    #[test]
    fn test_ineligible_reason_messages() {
        let size = IneligibleReason::SizeNotEligible {
            size: "XL".to_string(),
        };
        assert_eq!(size.to_string(), "Size XL is not eligible for Cash on Delivery");
        assert_eq!(
            IneligibleReason::ProductNotEligible.to_string(),
            "This product is not eligible for Cash on Delivery"
        );
    }

    #[test]
    fn test_ineligible_reason_serializes_tagged() {
        let json = serde_json::to_value(IneligibleReason::SizeNotEligible {
            size: "M".to_string(),
        })
        .unwrap();
        assert_eq!(json["kind"], "size_not_eligible");
        assert_eq!(json["size"], "M");
    }
}
