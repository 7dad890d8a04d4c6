//! # Session
//!
//! Drives item entry until the user types the sentinel, then prints the
//! summary.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │        ┌──────────────┐   add_to_cart() == true                         │
//! │  ────► │  COLLECTING  │ ◄──────────────┐                                │
//! │        └──────┬───────┘ ───────────────┘                                │
//! │               │                                                         │
//! │               │ add_to_cart() == false                                  │
//! │               │ (sentinel, or end of input)                             │
//! │               ▼                                                         │
//! │        ┌──────────────┐                                                 │
//! │        │     DONE     │ ──► write_summary() exactly once                │
//! │        └──────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Item
//! ```text
//! name ──► price ──► discounts ──► details ──► final_price ──► cart
//!   │        │           │            │
//!   └────────┴───────────┴────────────┴──► end of input: item dropped,
//!                                           session ends
//! ```

use std::io::Write;

use shopcart_core::validation::NameInput;
use shopcart_core::{pricing, Cart, CartItem, CartTotals, CoreError, ValidationError};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input::LineSource;
use crate::prompt::Prompter;
use crate::summary;

pub const WELCOME: &str = "Welcome to the Shopping Cart Program!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Collecting,
    Done,
}

/// Collects one item and appends it to `cart`.
///
/// ## Returns
/// - `Ok(true)` - keep collecting; the item was added, or refused
///   because its price or the new total is too large to hold
/// - `Ok(false)` - the user finished (or input ended); nothing was added
pub fn add_to_cart<I, W>(prompter: &mut Prompter<I, W>, cart: &mut Cart, sentinel: &str) -> CliResult<bool>
where
    I: LineSource,
    W: Write,
{
    let name = match prompter.item_name(cart, sentinel)? {
        NameInput::Finished => return Ok(false),
        NameInput::Name(name) => name,
    };

    let Some(base_price) = prompter.price()? else {
        warn!(%name, "Input closed while entering price; item dropped");
        return Ok(false);
    };
    let Some(discounts) = prompter.discounts()? else {
        warn!(%name, "Input closed while entering discounts; item dropped");
        return Ok(false);
    };
    let Some(details) = prompter.details()? else {
        warn!(%name, "Input closed while entering details; item dropped");
        return Ok(false);
    };

    let Some(final_price) = pricing::final_price(base_price, &discounts) else {
        let err = ValidationError::PriceTooLarge {
            input: base_price.to_string(),
        };
        warn!(%name, base_price, "Final price out of range; item dropped");
        writeln!(prompter.out(), "{}", err)?;
        return Ok(true);
    };

    let item = match cart.add_item(CartItem::new(name, final_price, details)) {
        Ok(item) => item,
        Err(err @ CoreError::TotalOverflow { .. }) => {
            warn!(error = %err, "Cart total out of range; item dropped");
            let out = prompter.out();
            writeln!(out, "{}", err)?;
            writeln!(out)?;
            return Ok(true);
        }
        Err(err) => return Err(err.into()),
    };

    info!(
        name = item.name(),
        final_price_cents = final_price.cents(),
        discounts = discounts.len(),
        details = item.details().len(),
        "Item added"
    );

    let out = prompter.out();
    writeln!(out, "Item added: {} - Final Price: ${}", item.name(), final_price)?;
    writeln!(out)?;

    Ok(true)
}

/// An interactive cart-building session.
///
/// Owns the cart; the cart is handed to [`add_to_cart`] by mutable
/// reference for each item.
pub struct Session<I, W> {
    prompter: Prompter<I, W>,
    cart: Cart,
    state: SessionState,
    sentinel: String,
    show_banner: bool,
}

impl<I: LineSource, W: Write> Session<I, W> {
    pub fn new(input: I, out: W, config: &CliConfig) -> Self {
        Session {
            prompter: Prompter::new(input, out),
            cart: Cart::new(),
            state: SessionState::Collecting,
            sentinel: config.sentinel.clone(),
            show_banner: config.show_banner,
        }
    }

    /// Runs the session to completion and prints the summary.
    pub fn run(&mut self) -> CliResult<CartTotals> {
        info!(sentinel = %self.sentinel, "Session started");
        if self.show_banner {
            writeln!(self.prompter.out(), "{}", WELCOME)?;
        }

        while self.state == SessionState::Collecting {
            if !add_to_cart(&mut self.prompter, &mut self.cart, &self.sentinel)? {
                self.state = SessionState::Done;
            }
        }

        summary::write_summary(self.prompter.out(), &self.cart)?;
        self.prompter.out().flush()?;

        let totals = CartTotals::from(&self.cart);
        info!(
            items = totals.item_count,
            total_cents = totals.total_cents,
            "Session finished"
        );
        Ok(totals)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}
