//! # Prompts
//!
//! The four questions asked for every item, each paired with its
//! validation and recovery rule.
//!
//! ```text
//! ┌──────────────┬──────────────────────────────┬───────────────────────────┐
//! │ Question     │ On invalid input             │ On end of input           │
//! ├──────────────┼──────────────────────────────┼───────────────────────────┤
//! │ item_name    │ print error, ask again       │ NameInput::Finished       │
//! │ price        │ print error, ask again       │ None                      │
//! │ discounts    │ print error per bad token    │ None                      │
//! │ details      │ print error per bad token    │ None                      │
//! └──────────────┴──────────────────────────────┴───────────────────────────┘
//! ```

use std::io::Write;

use shopcart_core::validation::{self, NameInput, Parsed};
use shopcart_core::{Cart, Discount, ItemDetails, ValidationError};
use tracing::debug;

use crate::error::CliResult;
use crate::input::LineSource;

pub const NAME_PROMPT: &str = "Enter item name (or done to finish): ";
pub const PRICE_PROMPT: &str = "Enter item price: ";
pub const DISCOUNTS_PROMPT: &str = "Enter discounts (if any, separated by spaces): ";
pub const DETAILS_PROMPT: &str = "Enter item details (e.g., Colour->Red Size->Large): ";

/// Asks questions on `out` and reads answers from `input`.
pub struct Prompter<I, W> {
    input: I,
    out: W,
}

impl<I: LineSource, W: Write> Prompter<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Prompter { input, out }
    }

    /// Output stream, for lines that are not answers to a question.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Asks for an item name until a usable one (or the sentinel) arrives.
    pub fn item_name(&mut self, cart: &Cart, sentinel: &str) -> CliResult<NameInput> {
        let prompt = NAME_PROMPT.replace(shopcart_core::DEFAULT_SENTINEL, sentinel);

        loop {
            let Some(line) = self.ask(&prompt)? else {
                debug!("Input closed at name prompt");
                return Ok(NameInput::Finished);
            };

            match validation::validate_item_name(&line, sentinel, cart) {
                Ok(answer) => return Ok(answer),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    /// Asks for a positive price until one parses.
    pub fn price(&mut self) -> CliResult<Option<f64>> {
        loop {
            let Some(line) = self.ask(PRICE_PROMPT)? else {
                return Ok(None);
            };

            match validation::parse_price(&line) {
                Ok(price) => return Ok(Some(price)),
                Err(e) => self.reject(&e)?,
            }
        }
    }

    /// Asks once for a list of discount percentages.
    pub fn discounts(&mut self) -> CliResult<Option<Vec<Discount>>> {
        let Some(line) = self.ask(DISCOUNTS_PROMPT)? else {
            return Ok(None);
        };

        self.keep_valid(validation::parse_discounts(&line)).map(Some)
    }

    /// Asks once for `key->value` details.
    pub fn details(&mut self) -> CliResult<Option<ItemDetails>> {
        let Some(line) = self.ask(DETAILS_PROMPT)? else {
            return Ok(None);
        };

        self.keep_valid(validation::parse_details(&line)).map(Some)
    }

    fn ask(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(self.input.next_line()?)
    }

    fn reject(&mut self, err: &ValidationError) -> CliResult<()> {
        debug!(?err, "Input rejected");
        writeln!(self.out, "{}", err)?;
        Ok(())
    }

    fn keep_valid<T>(&mut self, parsed: Parsed<T>) -> CliResult<T> {
        for err in &parsed.rejected {
            self.reject(err)?;
        }
        Ok(parsed.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(script.to_string()), Vec::new())
    }

    fn output(p: Prompter<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_name_retries_until_valid() {
        let mut cart = Cart::new();
        cart.add_item(shopcart_core::CartItem::new(
            "Pen",
            shopcart_core::Money::from_cents(100),
            ItemDetails::new(),
        ))
        .unwrap();

        let mut p = prompter("\n   \nPen\nPencil\n");
        let answer = p.item_name(&cart, "done").unwrap();
        assert_eq!(answer, NameInput::Name("Pencil".to_string()));

        let out = output(p);
        assert_eq!(out.matches(NAME_PROMPT).count(), 4);
        assert_eq!(out.matches("Item name cannot be empty. Please try again.").count(), 2);
        assert_eq!(out.matches("Item already in cart. Select another item.").count(), 1);
    }

    #[test]
    fn test_name_eof_finishes() {
        let mut p = prompter("");
        assert_eq!(p.item_name(&Cart::new(), "done").unwrap(), NameInput::Finished);
    }

    #[test]
    fn test_name_prompt_mentions_custom_sentinel() {
        let mut p = prompter("quit\n");
        assert_eq!(p.item_name(&Cart::new(), "quit").unwrap(), NameInput::Finished);
        assert!(output(p).contains("Enter item name (or quit to finish): "));
    }

    #[test]
    fn test_price_retries_until_positive() {
        let mut p = prompter("abc\n0\n-3\n12.5\n");
        assert_eq!(p.price().unwrap(), Some(12.5));

        let out = output(p);
        assert_eq!(out.matches("Invalid Price. Please enter a numeric value.").count(), 1);
        assert_eq!(
            out.matches("Price cannot be negative or zero. Please enter a valid price.")
                .count(),
            2
        );
    }

    #[test]
    fn test_price_eof() {
        let mut p = prompter("abc\n");
        assert_eq!(p.price().unwrap(), None);
    }

    #[test]
    fn test_discounts_single_prompt_reports_bad_tokens() {
        let mut p = prompter("10 x 200\n5\n");
        let discounts = p.discounts().unwrap().unwrap();
        assert_eq!(discounts.len(), 1);

        let out = output(p);
        assert_eq!(out.matches(DISCOUNTS_PROMPT).count(), 1);
        assert!(out.contains("Invalid discount: x. Please enter a numeric value."));
        assert!(out.contains("Invalid discount figure: 200. Discount must be between 0 and 100."));
    }

    #[test]
    fn test_details_skip_malformed() {
        let mut p = prompter("ColorRed Size->L\n");
        let details = p.details().unwrap().unwrap();
        assert_eq!(details.to_string(), "Size=L");
        assert!(output(p).contains("Invalid detail format: ColorRed. Skipping. Use Key->Value format."));
    }
}
