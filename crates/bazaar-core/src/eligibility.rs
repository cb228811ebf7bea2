//! # COD Eligibility
//!
//! Decides whether each line item, and the cart as a whole, may be paid
//! cash on delivery.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  For each line item, the first tier that has an answer wins:            │
//! │                                                                         │
//! │  1. Size     selected_size matches an entry in sizes[] with a flag      │
//! │       │ no answer                                                       │
//! │       ▼                                                                 │
//! │  2. Item     item.cod_eligible                                          │
//! │       │ no answer                                                       │
//! │       ▼                                                                 │
//! │  3. Product  item.product_cod_eligible                                  │
//! │       │ no answer                                                       │
//! │       ▼                                                                 │
//! │  4. Default  not eligible                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty cart is never eligible: no item has been confirmed.

use crate::types::{EligibilityVerdict, IneligibleItem, IneligibleReason, LineItem};

/// Which tier supplied an item's COD answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodTier {
    Size,
    Item,
    Product,
    /// No tier had data; the item is treated as not eligible.
    Default,
}

/// Outcome of resolving one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodResolution {
    pub eligible: bool,
    pub tier: CodTier,
}

/// A single tier: `Some(flag)` if it has data for the item, `None` to fall through.
pub type CodLookup = fn(&LineItem) -> Option<bool>;

/// Tiers in the order they are consulted.
pub const RESOLUTION_ORDER: [(CodTier, CodLookup); 3] = [
    (CodTier::Size, size_level),
    (CodTier::Item, item_level),
    (CodTier::Product, product_level),
];

/// Size tier: the per-size flag for the selected size.
pub fn size_level(item: &LineItem) -> Option<bool> {
    item.selected_size_option()?.cod_eligible
}

/// Item tier: the flag carried on the cart entry itself.
pub fn item_level(item: &LineItem) -> Option<bool> {
    item.cod_eligible
}

/// Product tier: the product's top-level flag.
pub fn product_level(item: &LineItem) -> Option<bool> {
    item.product_cod_eligible
}

/// Runs the resolution order against one item.
pub fn resolve_cod(item: &LineItem) -> CodResolution {
    RESOLUTION_ORDER
        .iter()
        .find_map(|(tier, lookup)| {
            lookup(item).map(|eligible| CodResolution {
                eligible,
                tier: *tier,
            })
        })
        .unwrap_or(CodResolution {
            eligible: false,
            tier: CodTier::Default,
        })
}

#[inline]
pub fn is_item_cod_eligible(item: &LineItem) -> bool {
    resolve_cod(item).eligible
}

/// True iff the cart is non-empty and every item resolves eligible.
///
/// Stops at the first ineligible item.
pub fn is_cart_cod_eligible(items: &[LineItem]) -> bool {
    !items.is_empty() && items.iter().all(is_item_cod_eligible)
}

/// Every item that fails resolution, in cart order, with a reason.
///
/// The reason names the size when one was selected, the product otherwise.
pub fn list_ineligible_items(items: &[LineItem]) -> Vec<IneligibleItem> {
    items
        .iter()
        .filter(|item| !is_item_cod_eligible(item))
        .map(|item| {
            let kind = match &item.selected_size {
                Some(size) => IneligibleReason::SizeNotEligible { size: size.clone() },
                None => IneligibleReason::ProductNotEligible,
            };
            IneligibleItem::new(item.clone(), kind)
        })
        .collect()
}

/// Combines [`is_cart_cod_eligible`] and [`list_ineligible_items`].
pub fn evaluate_cart(items: &[LineItem]) -> EligibilityVerdict {
    let ineligible_items = list_ineligible_items(items);
    EligibilityVerdict {
        all_eligible: !items.is_empty() && ineligible_items.is_empty(),
        ineligible_items,
    }
}
