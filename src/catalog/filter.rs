//! Catalog Filter
//!
//! Applies extracted criteria as hard predicates. No scoring, no reordering: the output is
//! always a sub-sequence of the input in its original order.

use super::types::CatalogItem;
use crate::search::types::ExtractedCriteria;

/// Relative width of the price band on each side of the target price.
pub const PRICE_TOLERANCE: f64 = 0.2;

/// Returns the items that satisfy every present criterion, in catalog order.
///
/// Color and item type are matched against the lower-cased item *name*, not the
/// item's own `color` attribute. An absent criterion imposes no predicate.
pub fn filter(items: &[CatalogItem], criteria: &ExtractedCriteria) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| matches_criteria(item, criteria))
        .cloned()
        .collect()
}

/// True if `item` passes all predicates derived from `criteria`.
pub fn matches_criteria(item: &CatalogItem, criteria: &ExtractedCriteria) -> bool {
    let name = item.name.to_lowercase();

    if let Some(color) = &criteria.color {
        if !name.contains(color.as_str()) {
            return false;
        }
    }

    if let Some(item_type) = &criteria.item_type {
        if !name.contains(item_type.as_str()) {
            return false;
        }
    }

    match criteria.target_price {
        Some(target) => within_price_band(item.price, target),
        None => true,
    }
}

/// `|price - target| <= target * PRICE_TOLERANCE`. A zero target only admits zero.
pub fn within_price_band(price: f64, target: f64) -> bool {
    (price - target).abs() <= target * PRICE_TOLERANCE
}
