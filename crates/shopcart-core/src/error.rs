//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Rejected user input                            │
//! │                                                                         │
//! │  shopcart-cli errors (app)                                             │
//! │  └── CliError         - Terminal I/O failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → printed, re-prompt / skip token               │
//! │        CoreError       → CliError → anyhow at the binary boundary      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending token in the message
//! 3. The `Display` text of a `ValidationError` IS the message shown to the
//!    user, so the terminal layer prints it verbatim

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// An item with the same (case-sensitive) name is already in the cart.
    ///
    /// ## When This Occurs
    /// - `Cart::add_item` called with a name the registry already holds.
    ///   The prompt layer checks the registry first, so reaching this
    ///   error means a caller skipped that check.
    #[error("Item '{0}' is already in the cart")]
    DuplicateItem(String),

    /// Adding the item would push the cart total past what `Money` holds.
    /// The item is not added.
    #[error("Item '{name}' not added: cart total would exceed the largest supported amount.")]
    TotalOverflow { name: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Each variant renders as the exact line the user sees before being
/// asked again (name, price) or before the token is dropped (discounts,
/// details).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Item name is empty or whitespace only.
    #[error("Item name cannot be empty. Please try again.")]
    EmptyName,

    /// Item name is already used in this session.
    #[error("Item already in cart. Select another item.")]
    DuplicateName { name: String },

    /// Price is not a finite decimal number.
    #[error("Invalid Price. Please enter a numeric value.")]
    PriceNotNumeric { input: String },

    /// Price parsed but is zero or negative.
    #[error("Price cannot be negative or zero. Please enter a valid price.")]
    PriceNotPositive { input: String },

    /// Price is finite and positive but too large to hold in cents.
    #[error("Price is too large. Please enter a smaller price.")]
    PriceTooLarge { input: String },

    /// Discount token is not a number.
    #[error("Invalid discount: {token}. Please enter a numeric value.")]
    DiscountNotNumeric { token: String },

    /// Discount token is a number outside [0, 100].
    #[error("Invalid discount figure: {token}. Discount must be between 0 and 100.")]
    DiscountOutOfRange { token: String },

    /// Detail token is not of the form `key->value`.
    #[error("Invalid detail format: {token}. Skipping. Use Key->Value format.")]
    InvalidDetail { token: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_prompts() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Item name cannot be empty. Please try again."
        );
        assert_eq!(
            ValidationError::DiscountOutOfRange {
                token: "150".to_string()
            }
            .to_string(),
            "Invalid discount figure: 150. Discount must be between 0 and 100."
        );
        assert_eq!(
            ValidationError::InvalidDetail {
                token: "ColorRed".to_string()
            }
            .to_string(),
            "Invalid detail format: ColorRed. Skipping. Use Key->Value format."
        );
    }

    #[test]
    fn test_duplicate_item_message() {
        let err = CoreError::DuplicateItem("Pen".to_string());
        assert_eq!(err.to_string(), "Item 'Pen' is already in the cart");
    }

    #[test]
    fn test_total_overflow_message() {
        let err = CoreError::TotalOverflow {
            name: "Yacht".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Item 'Yacht' not added: cart total would exceed the largest supported amount."
        );
    }

    #[test]
    fn test_validation_error_is_clone() {
        let err = ValidationError::PriceTooLarge {
            input: "1e40".to_string(),
        };
        assert_eq!(err.clone(), err);
    }
}
