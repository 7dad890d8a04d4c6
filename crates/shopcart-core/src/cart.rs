//! # Cart
//!
//! The append-only shopping cart and its name registry.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Prompt layer               Cart method            State change         │
//! │  ────────────               ───────────            ────────────         │
//! │                                                                         │
//! │  Name entered ─────────────► contains_name() ────► (read only)          │
//! │                                                                         │
//! │  Item complete ────────────► add_item() ─────────► items.push(item)     │
//! │                                                    names.insert(name)   │
//! │                                                    total += price       │
//! │                                                                         │
//! │  Session done ─────────────► items() / total() ──► (read only)          │
//! │                                                                         │
//! │  NOTE: there is no remove or update. The cart only grows.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CartItem;

/// The shopping cart.
///
/// ## Invariants
/// - Item names are unique (case-sensitive)
/// - `names` always equals the set of names in `items`; both are only
///   written by `add_item`
/// - `total` always equals the exact sum of the items' final prices
/// - Items keep insertion order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    names: HashSet<String>,
    total: Money,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Checks whether an item called `name` is already in the cart.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Appends an item to the cart.
    ///
    /// ## Returns
    /// - `Ok(&CartItem)` - the item as stored
    /// - `Err(CoreError::DuplicateItem)` - the name is taken
    /// - `Err(CoreError::TotalOverflow)` - the new total would not fit
    ///
    /// On error the cart is left untouched.
    pub fn add_item(&mut self, item: CartItem) -> CoreResult<&CartItem> {
        if self.contains_name(item.name()) {
            return Err(CoreError::DuplicateItem(item.name().to_string()));
        }

        let total = self
            .total
            .checked_add(item.final_price())
            .ok_or_else(|| CoreError::TotalOverflow {
                name: item.name().to_string(),
            })?;

        self.total = total;
        self.names.insert(item.name().to_string());
        let index = self.items.len();
        self.items.push(item);
        Ok(&self.items[index])
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all final prices.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary, used for structured logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_cents: i128,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_cents: cart.total().cents(),
        }
    }
}
