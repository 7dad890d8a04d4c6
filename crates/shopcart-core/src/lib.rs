//! # shopcart-core: Pure Business Logic for Shopcart
//!
//! This crate holds everything the shopping-cart builder knows about
//! prices, discounts, item details and the cart itself, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shopcart-cli (terminal session)                 │   │
//! │  │    Name ──► Price ──► Discounts ──► Details ──► Summary         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopcart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ CartItem  │  │   Money   │  │   Cart    │  │  tokens   │  │   │
//! │  │   │ Discount  │  │  pricing  │  │  Totals   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDIN • NO STDOUT • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Discount, ItemDetails, CartItem)
//! - [`money`] - Money type held in integer cents
//! - [`pricing`] - Compounding discount computation
//! - [`cart`] - Append-only cart with unique item names
//! - [`validation`] - Parsing and validation of raw user tokens
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{pricing, Cart, CartItem, Discount, ItemDetails};
//!
//! let discounts = [Discount::new(10.0).unwrap(), Discount::new(10.0).unwrap()];
//! let price = pricing::final_price(10.0, &discounts).unwrap();
//! assert_eq!(price.cents(), 810);
//!
//! let mut cart = Cart::new();
//! cart.add_item(CartItem::new("Pen", price, ItemDetails::new())).unwrap();
//! assert_eq!(cart.total().to_string(), "8.1");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Word that ends item entry, compared case-insensitively.
pub const DEFAULT_SENTINEL: &str = "done";

/// Separator between key and value in a detail token (`Color->Blue`).
pub const DETAIL_SEPARATOR: &str = "->";

/// Upper bound (inclusive) for a single discount percentage.
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;
