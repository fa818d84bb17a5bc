//! Price type for the amounts stored on a deal.
//!
//! This module provides the `Price` type which wraps `Decimal`. Prices are written to the deals
//! file as decimal strings (the form the operator typed them in) and can be read back from either
//! JSON strings or JSON numbers.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// A price in the catalog's currency.
///
/// # Examples
///
/// ```
/// # use mini_deals::model::Price;
/// # use std::str::FromStr;
/// let price = Price::from_str(" 499.90 ").unwrap();
/// assert_eq!(price.to_string(), "499.90");
/// assert_eq!(Price::from_str("1e3").unwrap().to_string(), "1000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the price is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

/// An error that can occur when parsing strings into `Price` values.
pub struct PriceError(rust_decimal::Error);

impl Debug for PriceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for PriceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for PriceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = match Decimal::from_str(trimmed) {
            Ok(value) => value,
            Err(e) => {
                if trimmed.contains(['e', 'E']) {
                    Decimal::from_scientific(trimmed).map_err(PriceError)?
                } else {
                    return Err(PriceError(e));
                }
            }
        };
        Ok(Self(value))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PriceVisitor)
    }
}

struct PriceVisitor;

impl Visitor<'_> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a price as a number or a numeric string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Price::from_str(v).map_err(|e| E::custom(format!("invalid price '{v}': {e}")))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Price(Decimal::from(v)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Decimal::from_f64(v)
            .map(Price)
            .ok_or_else(|| E::custom(format!("invalid price {v}")))
    }
}

/// The percentage saved by paying `discount` instead of `initial`, rounded to the nearest whole
/// percent (halves away from zero).
///
/// Returns `None` ("no discount") unless both prices are positive and `discount < initial`, or
/// when the saving rounds to 0%.
pub fn discount_percent(initial: Price, discount: Price) -> Option<u32> {
    let (initial, discount) = (initial.value(), discount.value());
    if initial <= Decimal::ZERO || discount <= Decimal::ZERO || discount >= initial {
        return None;
    }
    let saved = initial - discount;
    // Very large prices overflow when multiplied first.
    let percent = saved
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(initial))
        .or_else(|| {
            saved
                .checked_div(initial)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        })?;
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .filter(|percent| *percent > 0)
}
