//! Cart summary rendering.

use std::io::{self, Write};

use shopcart_core::{Cart, CartItem};

pub const SUMMARY_HEADER: &str = "--- Cart Summary ---";
pub const EMPTY_CART: &str = "Your cart is empty!";

/// Renders one summary line: `Pen - $8.1 (Color=Blue)`.
pub fn item_line(item: &CartItem) -> String {
    format!(
        "{} - ${} ({})",
        item.name(),
        item.final_price(),
        item.details()
    )
}

/// Writes the end-of-session summary.
///
/// An empty cart gets a notice and no total line.
pub fn write_summary<W: Write>(out: &mut W, cart: &Cart) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", SUMMARY_HEADER)?;

    if cart.is_empty() {
        writeln!(out, "{}", EMPTY_CART)?;
        return Ok(());
    }

    for item in cart.items() {
        writeln!(out, "{}", item_line(item))?;
    }
    writeln!(out, "Total Cost: ${}", cart.total())?;

    Ok(())
}
