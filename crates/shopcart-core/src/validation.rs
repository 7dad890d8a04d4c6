//! # Validation Module
//!
//! Turns raw lines typed by the user into validated domain values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Recovery Styles                                │
//! │                                                                         │
//! │  Whole-line values (name, price)                                       │
//! │  ├── Err(ValidationError) → caller prints it and asks again            │
//! │  └── Ok(value)            → caller moves on                             │
//! │                                                                         │
//! │  Token lists (discounts, details)                                      │
//! │  ├── every token is checked on its own                                 │
//! │  ├── bad tokens are collected in `rejected`, good ones in `value`      │
//! │  └── the line as a whole never fails                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::validation::{parse_discounts, parse_price};
//!
//! assert_eq!(parse_price(" 10 ").unwrap(), 10.0);
//! assert!(parse_price("0").is_err());
//!
//! let parsed = parse_discounts("10 abc 150 5");
//! assert_eq!(parsed.value.len(), 2);
//! assert_eq!(parsed.rejected.len(), 2);
//! ```

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Discount, ItemDetails};
use crate::DETAIL_SEPARATOR;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Outcome of validating a whitespace-separated list of tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    /// Everything that passed validation.
    pub value: T,

    /// One error per discarded token, in input order.
    pub rejected: Vec<ValidationError>,
}

// =============================================================================
// Item Name
// =============================================================================

/// A validated answer to the item-name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    /// The user asked to stop entering items.
    Finished,

    /// A new, non-empty name not yet in the cart.
    Name(String),
}

/// Validates an item name against the sentinel word and the cart.
///
/// ## Rules (checked in this order)
/// 1. Surrounding whitespace is trimmed; an empty result is rejected
/// 2. The sentinel, in any letter case, finishes the session
/// 3. A name already in the cart (case-sensitive) is rejected
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::{validate_item_name, NameInput};
/// use shopcart_core::Cart;
///
/// let cart = Cart::new();
/// assert_eq!(validate_item_name("DONE", "done", &cart), Ok(NameInput::Finished));
/// assert_eq!(
///     validate_item_name(" Pen ", "done", &cart),
///     Ok(NameInput::Name("Pen".to_string()))
/// );
/// assert!(validate_item_name("   ", "done", &cart).is_err());
/// ```
pub fn validate_item_name(input: &str, sentinel: &str, cart: &Cart) -> ValidationResult<NameInput> {
    let name = input.trim();

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name.to_lowercase() == sentinel.to_lowercase() {
        return Ok(NameInput::Finished);
    }

    if cart.contains_name(name) {
        return Err(ValidationError::DuplicateName {
            name: name.to_string(),
        });
    }

    Ok(NameInput::Name(name.to_string()))
}

// =============================================================================
// Price
// =============================================================================

/// Parses a base price.
///
/// ## Rules
/// - Must parse as a finite decimal number (`inf` and `NaN` are rejected
///   as non-numeric)
/// - Must be strictly positive
/// - Must be representable in cents; any discount only lowers it, so the
///   final price is then representable too
pub fn parse_price(input: &str) -> ValidationResult<f64> {
    let input = input.trim();

    let price = input
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ValidationError::PriceNotNumeric {
            input: input.to_string(),
        })?;

    if price <= 0.0 {
        return Err(ValidationError::PriceNotPositive {
            input: input.to_string(),
        });
    }

    if Money::from_decimal(price).is_none() {
        return Err(ValidationError::PriceTooLarge {
            input: input.to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Discounts
// =============================================================================

/// Parses a single discount token.
pub fn parse_discount(token: &str) -> ValidationResult<Discount> {
    let percent = token
        .parse::<f64>()
        .map_err(|_| ValidationError::DiscountNotNumeric {
            token: token.to_string(),
        })?;

    Discount::new(percent).ok_or_else(|| ValidationError::DiscountOutOfRange {
        token: token.to_string(),
    })
}

/// Parses a whitespace-separated list of discount percentages.
///
/// An empty line is valid and yields no discounts. Accepted discounts keep
/// their entry order, which matters because discounts compound.
pub fn parse_discounts(line: &str) -> Parsed<Vec<Discount>> {
    let mut value = Vec::new();
    let mut rejected = Vec::new();

    for token in line.split_whitespace() {
        match parse_discount(token) {
            Ok(discount) => value.push(discount),
            Err(e) => rejected.push(e),
        }
    }

    Parsed { value, rejected }
}

// =============================================================================
// Details
// =============================================================================

/// Parses a single `key->value` token.
///
/// ## Rules
/// - Exactly one `->` separator
/// - Key and value both non-empty
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::parse_detail;
///
/// assert_eq!(
///     parse_detail("Color->Blue").unwrap(),
///     ("Color".to_string(), "Blue".to_string())
/// );
/// assert!(parse_detail("ColorRed").is_err());
/// assert!(parse_detail("Key->").is_err());
/// assert!(parse_detail("a->b->c").is_err());
/// ```
pub fn parse_detail(token: &str) -> ValidationResult<(String, String)> {
    let invalid = || ValidationError::InvalidDetail {
        token: token.to_string(),
    };

    let (key, value) = token.split_once(DETAIL_SEPARATOR).ok_or_else(invalid)?;

    if key.is_empty() || value.is_empty() || value.contains(DETAIL_SEPARATOR) {
        return Err(invalid());
    }

    Ok((key.to_string(), value.to_string()))
}

/// Parses a whitespace-separated list of `key->value` tokens.
///
/// Malformed tokens are skipped; for repeated keys the last value wins.
pub fn parse_details(line: &str) -> Parsed<ItemDetails> {
    let mut value = ItemDetails::new();
    let mut rejected = Vec::new();

    for token in line.split_whitespace() {
        match parse_detail(token) {
            Ok((key, val)) => {
                value.insert(key, val);
            }
            Err(e) => rejected.push(e),
        }
    }

    Parsed { value, rejected }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CartItem;

    fn cart_with(names: &[&str]) -> Cart {
        let mut cart = Cart::new();
        for name in names {
            cart.add_item(CartItem::new(*name, Money::from_cents(100), ItemDetails::new()))
                .unwrap();
        }
        cart
    }

    #[test]
    fn test_sentinel_any_case() {
        let cart = Cart::new();
        for input in ["done", "DONE", "Done", "  dOnE  "] {
            assert_eq!(validate_item_name(input, "done", &cart), Ok(NameInput::Finished));
        }
    }

    #[test]
    fn test_custom_sentinel() {
        let cart = Cart::new();
        assert_eq!(validate_item_name("Quit", "quit", &cart), Ok(NameInput::Finished));
        assert_eq!(
            validate_item_name("done", "quit", &cart),
            Ok(NameInput::Name("done".to_string()))
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let cart = Cart::new();
        assert_eq!(validate_item_name("", "done", &cart), Err(ValidationError::EmptyName));
        assert_eq!(validate_item_name(" \t ", "done", &cart), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_duplicate_name_rejected_case_sensitive() {
        let cart = cart_with(&["Pen"]);
        assert_eq!(
            validate_item_name("Pen", "done", &cart),
            Err(ValidationError::DuplicateName {
                name: "Pen".to_string()
            })
        );
        assert_eq!(
            validate_item_name("pen", "done", &cart),
            Ok(NameInput::Name("pen".to_string()))
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("10"), Ok(10.0));
        assert_eq!(parse_price("  2.50 "), Ok(2.5));
        assert_eq!(parse_price("1e3"), Ok(1000.0));

        assert!(matches!(parse_price("abc"), Err(ValidationError::PriceNotNumeric { .. })));
        assert!(matches!(parse_price(""), Err(ValidationError::PriceNotNumeric { .. })));
        assert!(matches!(parse_price("inf"), Err(ValidationError::PriceNotNumeric { .. })));
        assert!(matches!(parse_price("NaN"), Err(ValidationError::PriceNotNumeric { .. })));
        assert!(matches!(parse_price("0"), Err(ValidationError::PriceNotPositive { .. })));
        assert!(matches!(parse_price("-5"), Err(ValidationError::PriceNotPositive { .. })));
    }

    #[test]
    fn test_parse_price_large_values() {
        assert_eq!(parse_price("1e20"), Ok(1e20));
        assert!(matches!(parse_price("1e40"), Err(ValidationError::PriceTooLarge { .. })));
    }

    #[test]
    fn test_parse_discounts_discards_bad_tokens() {
        let parsed = parse_discounts("10 abc 150 -1 0 100 12.5");

        let percents: Vec<f64> = parsed.value.iter().map(Discount::percent).collect();
        assert_eq!(percents, [10.0, 0.0, 100.0, 12.5]);
        assert_eq!(
            parsed.rejected,
            vec![
                ValidationError::DiscountNotNumeric {
                    token: "abc".to_string()
                },
                ValidationError::DiscountOutOfRange {
                    token: "150".to_string()
                },
                ValidationError::DiscountOutOfRange {
                    token: "-1".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_discounts_empty_line() {
        let parsed = parse_discounts("   ");
        assert!(parsed.value.is_empty());
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_details_skips_malformed() {
        let parsed = parse_details("ColorRed Size->L Key-> ->v Material->Steel Size->XL");

        assert_eq!(parsed.value.to_string(), "Size=XL, Material=Steel");
        assert_eq!(parsed.rejected.len(), 3);
        assert_eq!(
            parsed.rejected[0],
            ValidationError::InvalidDetail {
                token: "ColorRed".to_string()
            }
        );
    }

    #[test]
    fn test_parse_details_empty_line() {
        let parsed = parse_details("");
        assert!(parsed.value.is_empty());
        assert!(parsed.rejected.is_empty());
    }
}
