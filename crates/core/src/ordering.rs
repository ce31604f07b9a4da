//! Display ordering for content collections.
//!
//! Every content row carries an `order` string. The store treats it as
//! opaque text; listings sort by its numeric value, lowest first. Values
//! that do not parse as a finite number rank as `0`. The sort is stable, so
//! rows with equal rank keep the order they were handed in (arrival order
//! when the caller lists by creation time).

use std::cmp::Ordering;

/// Order value assigned when a create request omits `order`.
pub const DEFAULT_ORDER: &str = "0";

/// Numeric rank of an `order` string.
pub fn order_rank(order: &str) -> f64 {
    match order.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Compare two `order` strings by rank.
pub fn compare_order(a: &str, b: &str) -> Ordering {
    order_rank(a).total_cmp(&order_rank(b))
}

/// Stable in-place sort of `items` by the rank of the `order` string that
/// `key` extracts from each item.
pub fn sort_by_order<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare_order(key(a), key(b)));
}

/// Serde default for `order` fields on create DTOs.
pub fn default_order() -> String {
    DEFAULT_ORDER.to_string()
}
