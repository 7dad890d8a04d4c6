//! # Pricing
//!
//! Sequential (compounding) discounts.
//!
//! ```text
//! base = 100.00, discounts = [20, 10]
//!
//!   100.00 ── 20% ──► 80.00 ── 10% ──► 72.00      (compounding)
//!   100.00 ── 30% ──► 70.00                       (NOT a sum of percentages)
//! ```
//!
//! Discounts are applied in the order they were entered; rounding to cents
//! happens once, on the final value.

use crate::money::Money;
use crate::types::Discount;

/// Applies `discounts` in order to `base`, without rounding.
pub fn apply_discounts(base: f64, discounts: &[Discount]) -> f64 {
    discounts
        .iter()
        .fold(base, |price, discount| price - price * discount.fraction())
}

/// Computes the final price of an item: the discounted base price,
/// rounded to cents.
///
/// Returns `None` when the result has no `Money` value. A base accepted by
/// `validation::parse_price` always yields `Some`, since discounts never
/// raise the price.
///
/// ## Example
/// ```rust
/// use shopcart_core::{pricing, Discount};
///
/// let ten = Discount::new(10.0).unwrap();
/// assert_eq!(pricing::final_price(10.0, &[ten, ten]).unwrap().cents(), 810);
/// assert_eq!(pricing::final_price(10.0, &[]).unwrap().cents(), 1000);
/// assert!(pricing::final_price(1e40, &[]).is_none());
/// ```
pub fn final_price(base: f64, discounts: &[Discount]) -> Option<Money> {
    Money::from_decimal(apply_discounts(base, discounts))
}
