//! Currency conversion between the two catalog currencies.
//!
//! A single scalar rate ("1 USD = R CAD") covers both directions: USD to
//! CAD multiplies, CAD to USD divides. The engine never fetches rates;
//! callers supply one per call, sourced and cached however they like.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Country, Currency};

/// Errors constructing an exchange rate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExchangeRateError {
    #[error("exchange rate must be positive, got {0}")]
    NonPositiveRate(Decimal),
}

/// A validated USD→CAD exchange rate: 1 USD buys `rate` CAD.
///
/// Construction is the only place positivity is checked; holding a value
/// of this type means division by it is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    pub fn new(rate: Decimal) -> Result<Self, ExchangeRateError> {
        if rate <= Decimal::ZERO {
            return Err(ExchangeRateError::NonPositiveRate(rate));
        }
        Ok(Self(rate))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for ExchangeRate {
    type Error = ExchangeRateError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<ExchangeRate> for Decimal {
    fn from(rate: ExchangeRate) -> Self {
        rate.0
    }
}

impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Converts `amount` from one currency to another. Identity when the
/// currencies already match.
pub fn convert(amount: Decimal, from: Currency, to: Currency, rate: ExchangeRate) -> Decimal {
    match (from, to) {
        (Currency::Usd, Currency::Cad) => amount * rate.value(),
        (Currency::Cad, Currency::Usd) => amount / rate.value(),
        _ => amount,
    }
}

/// Converts a user-entered income into the currency a jurisdiction's
/// brackets are denominated in. This changes which bracket thresholds the
/// income crosses, which is the point: tax is always computed natively.
pub fn to_native(
    income: Decimal,
    user_currency: Currency,
    country: Country,
    rate: ExchangeRate,
) -> Decimal {
    convert(income, user_currency, country.native_currency(), rate)
}
