//! Exchange rates between currencies
//!
//! An [`ExchangeRate`] is a strictly positive rational multiplier from a
//! source currency to a destination currency. Applying a rate is exact
//! rational multiplication: no rounding happens here, so exchanging and then
//! exchanging back with the flipped rate returns the original value exactly.
//! Any loss is deferred entirely to the rounding engine.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::dense::{parse_ratio, Dense};
use crate::error::{MoneyError, MoneyResult};

/// A positive rational multiplier from one currency to another
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExchangeRate {
    /// The currency amounts are converted from
    src: Currency,

    /// The currency amounts are converted to
    dst: Currency,

    /// Destination units per source unit; strictly positive
    rate: BigRational,
}

impl ExchangeRate {
    /// Create an exchange rate
    ///
    /// Returns `None` if the rate is zero or negative.
    pub fn new(src: Currency, dst: Currency, rate: BigRational) -> Option<Self> {
        if !rate.is_positive() {
            return None;
        }
        Some(Self { src, dst, rate })
    }

    /// Create an exchange rate from a decimal quote
    ///
    /// Returns `None` if the quote is zero or negative.
    pub fn from_decimal(src: Currency, dst: Currency, rate: Decimal) -> Option<Self> {
        let numer = BigInt::from(rate.mantissa());
        let denom = BigInt::from(10u8).pow(rate.scale());
        Self::new(src, dst, BigRational::new(numer, denom))
    }

    /// Get the source currency
    pub fn src(&self) -> &Currency {
        &self.src
    }

    /// Get the destination currency
    pub fn dst(&self) -> &Currency {
        &self.dst
    }

    /// Get the rate as an exact rational
    pub fn rate(&self) -> &BigRational {
        &self.rate
    }

    /// Get the inverse rate, converting in the opposite direction
    ///
    /// Exact reciprocal, so flipping twice returns a rate equal to the
    /// original.
    pub fn flip(&self) -> ExchangeRate {
        Self { src: self.dst.clone(), dst: self.src.clone(), rate: self.rate.recip() }
    }

    /// Convert a dense value from the source to the destination currency
    ///
    /// Exact multiplication; fails only when the value is not denominated in
    /// the source currency.
    pub fn exchange(&self, value: &Dense) -> MoneyResult<Dense> {
        if value.currency() != &self.src {
            return Err(MoneyError::CurrencyMismatch {
                left: self.src.clone(),
                right: value.currency().clone(),
            });
        }
        Ok(Dense::new(self.dst.clone(), value.amount() * &self.rate))
    }
}

/// Renders as `ExchangeRate <src> <dst> <n>/<d>`.
///
/// The text form tokenizes on whitespace, so it round-trips through
/// [`FromStr`] only for currency codes without whitespace.
impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExchangeRate {} {} {}/{}",
            self.src,
            self.dst,
            self.rate.numer(),
            self.rate.denom()
        )
    }
}

impl FromStr for ExchangeRate {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("ExchangeRate"), Some(src), Some(dst), Some(ratio), None) => {
                let rate = parse_ratio(ratio)
                    .ok_or_else(|| MoneyError::Parse(format!("bad rational literal: {s:?}")))?;
                Self::new(Currency::new(src), Currency::new(dst), rate)
                    .ok_or_else(|| MoneyError::Parse(format!("rate must be positive: {s:?}")))
            }
            _ => Err(MoneyError::Parse(format!(
                "expected `ExchangeRate <src> <dst> <n>/<d>`, got {s:?}"
            ))),
        }
    }
}

impl Serialize for ExchangeRate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExchangeRate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
