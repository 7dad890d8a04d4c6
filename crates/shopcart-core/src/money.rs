//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Where Floating Point Stops
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base price (decimal) ──► discount chain (decimal) ──► ROUND ONCE      │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                             Money (integer cents)       │
//! │                                                          │              │
//! │                          Cart total = Σ cents ◄──────────┘              │
//! │                                                                         │
//! │  Rounding happens exactly once per item. Summing cents afterwards is   │
//! │  exact, so the total always equals the sum of the displayed prices.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Range
//! Cents are held in an `i128`, so any price up to roughly 1.7e36 is kept
//! exactly as rounded. Nothing is ever clamped: a decimal outside that
//! range has no `Money` value, and an addition past it returns `None`.
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! let price = Money::from_cents(810);
//! assert_eq!(price.to_string(), "8.1");
//!
//! let total = price.checked_add(Money::from_cents(1025)).unwrap();
//! assert_eq!(total.to_string(), "18.35");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i128 (signed)**: wide enough that no accepted price is truncated
/// - **Single field tuple struct**: zero-cost abstraction over i128
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i128);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i128) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to the nearest cent.
    ///
    /// Uses `f64::round` on the amount scaled to cents, so exact halves
    /// round away from zero. Returns `None` for non-finite amounts and for
    /// amounts whose cents do not fit in an `i128`.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(8.100000000000001).unwrap().cents(), 810);
    /// assert_eq!(Money::from_decimal(0.004).unwrap().cents(), 0);
    /// assert!(Money::from_decimal(1e40).is_none());
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        let cents = (amount * 100.0).round();

        // i128::MAX as f64 rounds up to 2^127, which is itself out of range.
        if !cents.is_finite() || cents.abs() >= i128::MAX as f64 {
            return None;
        }

        Some(Money(cents as i128))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i128 {
        self.0
    }

    /// Returns the whole-unit portion.
    #[inline]
    pub const fn dollars(&self) -> i128 {
        self.0 / 100
    }

    /// Returns the fractional portion in cents (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i128 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shortest decimal rendering with at least one fractional digit.
///
/// ```text
///   1000 cents → "10.0"
///    810 cents → "8.1"
///    825 cents → "8.25"
///      5 cents → "0.05"
/// ```
///
/// The currency symbol is not part of the value; the terminal layer
/// prefixes it.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = self.dollars().abs();
        let frac = self.cents_part();

        if frac % 10 == 0 {
            write!(f, "{}{}.{}", sign, whole, frac / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, whole, frac)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display_trims_trailing_zero() {
        assert_eq!(Money::from_cents(810).to_string(), "8.1");
        assert_eq!(Money::from_cents(1000).to_string(), "10.0");
        assert_eq!(Money::from_cents(825).to_string(), "8.25");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_string(), "0.0");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.5");
    }

    #[test]
    fn test_from_decimal_rounds_once_to_cents() {
        assert_eq!(Money::from_decimal(8.1).unwrap().cents(), 810);
        assert_eq!(Money::from_decimal(19.999).unwrap().cents(), 2000);
        assert_eq!(Money::from_decimal(0.125).unwrap().cents(), 13);
        assert_eq!(Money::from_decimal(0.0049).unwrap().cents(), 0);
    }

    #[test]
    fn test_from_decimal_keeps_large_prices_exact() {
        // Beyond the i64 cent range; must not clamp.
        let yacht = Money::from_decimal(1e20).unwrap();
        assert_eq!(yacht.cents(), 10_i128.pow(22));
        assert_eq!(yacht.to_string(), "100000000000000000000.0");
    }

    #[test]
    fn test_from_decimal_out_of_range() {
        assert!(Money::from_decimal(1e37).is_none());
        assert!(Money::from_decimal(-1e37).is_none());
        assert!(Money::from_decimal(f64::INFINITY).is_none());
        assert!(Money::from_decimal(f64::NAN).is_none());
    }

    #[test]
    fn test_checked_add_is_exact_in_cents() {
        // 0.1 + 0.2 in floating point is 0.30000000000000004
        let total = Money::from_cents(10).checked_add(Money::from_cents(20)).unwrap();
        assert_eq!(total.cents(), 30);
        assert_eq!(total.to_string(), "0.3");
    }

    #[test]
    fn test_checked_add_reports_overflow() {
        let big = Money::from_cents(i128::MAX);
        assert_eq!(big.checked_add(Money::from_cents(1)), None);
        assert_eq!(big.checked_add(Money::zero()), Some(big));
    }

    #[test]
    fn test_zero() {
        assert!(Money::zero().is_zero());
        assert!(!Money::from_cents(1).is_zero());
        assert_eq!(Money::default(), Money::zero());
    }
}
