//! Validation of values typed by the operator.

use crate::error::{Error, ErrorType};
use crate::model::Price;
use crate::Result;

/// The message shown when a price is rejected.
pub const INVALID_PRICE: &str = "Please enter a valid price.";

/// Accepts `input` if it is a number greater than zero.
///
/// Returns a `Validation` error carrying `INVALID_PRICE` otherwise.
pub fn validate_price(input: &str) -> Result<Price> {
    match input.parse::<Price>() {
        Ok(price) if price.is_positive() => Ok(price),
        _ => Err(Error::msg(ErrorType::Validation, INVALID_PRICE)),
    }
}
