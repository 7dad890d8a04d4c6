//! # Domain Types
//!
//! The values an item is built from, and the item itself.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Item Construction                                │
//! │                                                                         │
//! │  ┌─────────────┐   ┌──────────────────┐   ┌──────────────────────┐     │
//! │  │  name       │   │  Discount        │   │  ItemDetails         │     │
//! │  │  (String)   │   │  percent 0..=100 │   │  key -> value        │     │
//! │  └──────┬──────┘   └────────┬─────────┘   └──────────┬───────────┘     │
//! │         │                   │ pricing::final_price   │                  │
//! │         │                   ▼                        │                  │
//! │         │            ┌─────────────┐                 │                  │
//! │         └──────────► │  CartItem   │ ◄───────────────┘                  │
//! │                      │  immutable  │                                    │
//! │                      └─────────────┘                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::MAX_DISCOUNT_PERCENT;

// =============================================================================
// Discount
// =============================================================================

/// A percentage discount in the inclusive range `[0, 100]`.
///
/// Discounts compound: each one applies to the price left over by the
/// previous one (see [`crate::pricing`]).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Discount(f64);

impl Discount {
    /// Creates a discount, or `None` if `percent` is outside `[0, 100]`
    /// (NaN is outside every range).
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::Discount;
    ///
    /// assert!(Discount::new(12.5).is_some());
    /// assert!(Discount::new(100.0).is_some());
    /// assert!(Discount::new(-1.0).is_none());
    /// assert!(Discount::new(f64::NAN).is_none());
    /// ```
    pub fn new(percent: f64) -> Option<Self> {
        (0.0..=MAX_DISCOUNT_PERCENT)
            .contains(&percent)
            .then_some(Discount(percent))
    }

    /// Returns the discount as a percentage.
    #[inline]
    pub const fn percent(&self) -> f64 {
        self.0
    }

    /// Returns the discount as a fraction of one (`25%` → `0.25`).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl TryFrom<f64> for Discount {
    type Error = String;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        Discount::new(percent)
            .ok_or_else(|| format!("discount {} is outside 0..=100", percent))
    }
}

impl From<Discount> for f64 {
    fn from(discount: Discount) -> f64 {
        discount.0
    }
}

// =============================================================================
// Item Details
// =============================================================================

/// One `key -> value` attribute of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub key: String,
    pub value: String,
}

/// Free-form attributes of an item (Color, Size, ...).
///
/// ## Invariants
/// - Keys are unique
/// - Re-inserting a key overwrites its value in place, so iteration keeps
///   the order in which each key was FIRST seen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemDetails(Vec<Detail>);

impl ItemDetails {
    /// Creates an empty detail map.
    pub fn new() -> Self {
        ItemDetails(Vec::new())
    }

    /// Inserts a detail, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        if let Some(existing) = self.0.iter_mut().find(|d| d.key == key) {
            return Some(std::mem::replace(&mut existing.value, value));
        }

        self.0.push(Detail { key, value });
        None
    }

    /// Iterates over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|d| (d.key.as_str(), d.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders `k=v, k=v`; empty details render as an empty string.
impl fmt::Display for ItemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the cart.
///
/// Built once, after every field of the item has been validated, and never
/// modified afterwards. The price is the FINAL price: discounts have
/// already been applied and the result rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    name: String,
    final_price: Money,
    details: ItemDetails,
}

impl CartItem {
    pub fn new(name: impl Into<String>, final_price: Money, details: ItemDetails) -> Self {
        CartItem {
            name: name.into(),
            final_price,
            details,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn final_price(&self) -> Money {
        self.final_price
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_bounds_are_inclusive() {
        assert_eq!(Discount::new(0.0).map(|d| d.percent()), Some(0.0));
        assert_eq!(Discount::new(100.0).map(|d| d.percent()), Some(100.0));
        assert!(Discount::new(100.01).is_none());
        assert!(Discount::new(-0.5).is_none());
        assert!(Discount::new(f64::INFINITY).is_none());
    }

    #[test]
    fn test_discount_deserialize_rejects_out_of_range() {
        let ok: Discount = serde_json::from_str("25").unwrap();
        assert_eq!(ok.fraction(), 0.25);
        assert!(serde_json::from_str::<Discount>("250").is_err());
    }

    #[test]
    fn test_details_last_write_wins_in_place() {
        let mut details = ItemDetails::new();
        assert_eq!(details.insert("Color", "Red"), None);
        assert_eq!(details.insert("Size", "L"), None);
        assert_eq!(details.insert("Color", "Blue"), Some("Red".to_string()));

        assert_eq!(details.len(), 2);
        let pairs: Vec<(&str, &str)> = details.iter().collect();
        assert_eq!(pairs, [("Color", "Blue"), ("Size", "L")]);
        assert_eq!(details.to_string(), "Color=Blue, Size=L");
    }

    #[test]
    fn test_empty_details_render_empty() {
        assert_eq!(ItemDetails::new().to_string(), "");
    }

    #[test]
    fn test_cart_item_serializes_camel_case() {
        let mut details = ItemDetails::new();
        details.insert("Color", "Blue");
        let item = CartItem::new("Pen", Money::from_cents(810), details);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Pen");
        assert_eq!(json["finalPrice"], 810);
        assert_eq!(json["details"][0]["key"], "Color");
        assert_eq!(json["details"][0]["value"], "Blue");
    }
}
