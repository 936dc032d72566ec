//! Dense monetary values
//!
//! A [`Dense`] value is an exact rational amount of money tagged with a
//! currency. All arithmetic is exact; nothing is ever rounded until the
//! caller asks for a [`Discrete`] value through one of the rounding
//! operations, and even then the exact remainder is reported back.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::discrete::Discrete;
use crate::error::{MoneyError, MoneyResult};
use crate::rounding::{round_with, Rounding};
use crate::scale::Scale;

/// An exact rational amount of money in a single currency
///
/// Immutable: every operation yields a new value. Two dense values combine
/// only when their currency tags match; mismatches are reported as
/// [`MoneyError::CurrencyMismatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dense {
    /// The exact rational amount, in currency units
    amount: BigRational,

    /// The currency this amount is denominated in
    currency: Currency,
}

impl Dense {
    /// Create a dense value from an exact rational amount
    ///
    /// Total: a `BigRational` cannot be infinite or NaN, so there is nothing
    /// to reject here. Non-finite inputs only exist on the floating-point
    /// boundary; see [`Dense::from_f64`].
    pub fn new(currency: Currency, amount: BigRational) -> Self {
        Self { amount, currency }
    }

    /// Create a zero-valued dense amount
    pub fn zero(currency: Currency) -> Self {
        Self::new(currency, BigRational::zero())
    }

    /// Create a dense value from a whole number of currency units
    pub fn from_integer(currency: Currency, units: impl Into<BigInt>) -> Self {
        Self::new(currency, BigRational::from_integer(units.into()))
    }

    /// Create a dense value from a decimal amount, exactly
    pub fn from_decimal(currency: Currency, value: Decimal) -> Self {
        let numer = BigInt::from(value.mantissa());
        let denom = BigInt::from(10u8).pow(value.scale());
        Self::new(currency, BigRational::new(numer, denom))
    }

    /// Create a dense value from a float
    ///
    /// Returns `None` if the value is infinite, NaN, or outside the decimal
    /// range. The decimal reading of the float is used, so `0.1` becomes
    /// exactly 1/10 rather than its binary approximation.
    pub fn from_f64(currency: Currency, value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let decimal = Decimal::try_from(value).ok()?;
        Some(Self::from_decimal(currency, decimal))
    }

    /// Get the currency of this value
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Get the exact rational amount
    pub fn amount(&self) -> &BigRational {
        &self.amount
    }

    /// Split this value into its currency and amount
    pub fn into_parts(self) -> (Currency, BigRational) {
        (self.currency, self.amount)
    }

    /// Check if this value is exactly zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Get the sign of this value: -1, 0, or 1
    pub fn sign(&self) -> i32 {
        if self.amount.is_zero() {
            0
        } else if self.amount.is_positive() {
            1
        } else {
            -1
        }
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self::new(self.currency.clone(), self.amount.abs())
    }

    /// Get the negated value
    pub fn negated(&self) -> Self {
        Self::new(self.currency.clone(), -&self.amount)
    }

    /// Add another dense value of the same currency
    pub fn checked_add(&self, other: &Dense) -> MoneyResult<Dense> {
        self.check_same_currency(other)?;
        Ok(Self::new(self.currency.clone(), &self.amount + &other.amount))
    }

    /// Subtract another dense value of the same currency
    pub fn checked_sub(&self, other: &Dense) -> MoneyResult<Dense> {
        self.check_same_currency(other)?;
        Ok(Self::new(self.currency.clone(), &self.amount - &other.amount))
    }

    /// Multiply by an exact rational scalar
    pub fn scale_by(&self, factor: &BigRational) -> Dense {
        Self::new(self.currency.clone(), &self.amount * factor)
    }

    /// Round to a discrete value, half to even (banker's rounding)
    ///
    /// Returns the discrete value together with the exact leftover, `None`
    /// when the amount was exactly representable at the given scale.
    pub fn round(&self, scale: &Scale) -> (Discrete, Option<Dense>) {
        round_with(self, scale, Rounding::HalfEven)
    }

    /// Round up to a discrete value; the result is always `>= self`
    pub fn ceiling(&self, scale: &Scale) -> (Discrete, Option<Dense>) {
        round_with(self, scale, Rounding::Ceiling)
    }

    /// Round down to a discrete value; the result is always `<= self`
    pub fn floor(&self, scale: &Scale) -> (Discrete, Option<Dense>) {
        round_with(self, scale, Rounding::Floor)
    }

    /// Round toward zero to a discrete value
    pub fn truncate(&self, scale: &Scale) -> (Discrete, Option<Dense>) {
        round_with(self, scale, Rounding::Truncate)
    }

    fn check_same_currency(&self, other: &Dense) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            })
        }
    }
}

impl Hash for Dense {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.amount.numer().hash(state);
        self.amount.denom().hash(state);
    }
}

impl PartialOrd for Dense {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Amounts in different currencies have no order
        if self.currency != other.currency {
            return None;
        }
        self.amount.partial_cmp(&other.amount)
    }
}

/// Renders as `Dense <currency> <n>/<d>`, an exact rational literal.
///
/// The text form tokenizes on whitespace, so it round-trips through
/// [`FromStr`] only for currency codes without whitespace. Values tagged
/// with arbitrary names cross boundaries via
/// [`DenseRep`](crate::repr::DenseRep), whose record form carries any name.
impl fmt::Display for Dense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dense {} {}/{}", self.currency, self.amount.numer(), self.amount.denom())
    }
}

impl FromStr for Dense {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("Dense"), Some(code), Some(ratio), None) => {
                let amount = parse_ratio(ratio)
                    .ok_or_else(|| MoneyError::Parse(format!("bad rational literal: {s:?}")))?;
                Ok(Self::new(Currency::new(code), amount))
            }
            _ => Err(MoneyError::Parse(format!("expected `Dense <currency> <n>/<d>`, got {s:?}"))),
        }
    }
}

impl Serialize for Dense {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dense {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse an exact rational literal of the form `<n>/<d>` or `<n>`
pub(crate) fn parse_ratio(s: &str) -> Option<BigRational> {
    let (numer, denom) = s.split_once('/').unwrap_or((s, "1"));
    let numer: BigInt = numer.parse().ok()?;
    let denom: BigInt = denom.parse().ok()?;
    if denom.is_zero() {
        return None;
    }
    Some(BigRational::new(numer, denom))
}

// Arithmetic operator implementations, over all value/reference combinations
impl Add for Dense {
    type Output = MoneyResult<Dense>;

    fn add(self, other: Dense) -> Self::Output {
        self.checked_add(&other)
    }
}

impl Add<&Dense> for Dense {
    type Output = MoneyResult<Dense>;

    fn add(self, other: &Dense) -> Self::Output {
        self.checked_add(other)
    }
}

impl Add<Dense> for &Dense {
    type Output = MoneyResult<Dense>;

    fn add(self, other: Dense) -> Self::Output {
        self.checked_add(&other)
    }
}

impl Add<&Dense> for &Dense {
    type Output = MoneyResult<Dense>;

    fn add(self, other: &Dense) -> Self::Output {
        self.checked_add(other)
    }
}

impl Sub for Dense {
    type Output = MoneyResult<Dense>;

    fn sub(self, other: Dense) -> Self::Output {
        self.checked_sub(&other)
    }
}

impl Sub<&Dense> for Dense {
    type Output = MoneyResult<Dense>;

    fn sub(self, other: &Dense) -> Self::Output {
        self.checked_sub(other)
    }
}

impl Sub<Dense> for &Dense {
    type Output = MoneyResult<Dense>;

    fn sub(self, other: Dense) -> Self::Output {
        self.checked_sub(&other)
    }
}

impl Sub<&Dense> for &Dense {
    type Output = MoneyResult<Dense>;

    fn sub(self, other: &Dense) -> Self::Output {
        self.checked_sub(other)
    }
}

impl Neg for Dense {
    type Output = Dense;

    fn neg(self) -> Dense {
        Dense::new(self.currency, -self.amount)
    }
}

impl Neg for &Dense {
    type Output = Dense;

    fn neg(self) -> Dense {
        self.negated()
    }
}

impl Mul<BigRational> for Dense {
    type Output = Dense;

    fn mul(self, factor: BigRational) -> Dense {
        Dense::new(self.currency, self.amount * factor)
    }
}

impl Mul<BigRational> for &Dense {
    type Output = Dense;

    fn mul(self, factor: BigRational) -> Dense {
        self.scale_by(&factor)
    }
}

impl Mul<BigInt> for Dense {
    type Output = Dense;

    fn mul(self, factor: BigInt) -> Dense {
        Dense::new(self.currency, self.amount * factor)
    }
}

impl Mul<BigInt> for &Dense {
    type Output = Dense;

    fn mul(self, factor: BigInt) -> Dense {
        self.scale_by(&BigRational::from_integer(factor))
    }
}

impl Mul<i64> for Dense {
    type Output = Dense;

    fn mul(self, factor: i64) -> Dense {
        Dense::new(self.currency, self.amount * BigInt::from(factor))
    }
}

impl Mul<i64> for &Dense {
    type Output = Dense;

    fn mul(self, factor: i64) -> Dense {
        self.scale_by(&BigRational::from_integer(BigInt::from(factor)))
    }
}
