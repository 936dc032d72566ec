//! Discrete monetary values
//!
//! A [`Discrete`] value is an integer count of some atomic unit of a
//! currency: 678 cents, 12 satoshi, 3 whole yen. It is tagged with both a
//! currency and the [`Scale`] relating its unit to that currency.
//!
//! There is deliberately no division on discrete values: dividing an integer
//! count by an arbitrary rational does not generally produce another count of
//! the same unit. Callers needing fractional results convert to [`Dense`]
//! first via [`Discrete::to_dense`], which is always exact.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::dense::Dense;
use crate::error::{MoneyError, MoneyResult};
use crate::scale::Scale;

/// An integer amount of atomic currency units
///
/// Immutable. Two discrete values combine only when both their currency and
/// their scale tags match exactly; proportional-but-different scales are
/// never coerced. Re-tagging to an equal scale is available through
/// [`Discrete::retag`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Discrete {
    /// The number of atomic units
    amount: BigInt,

    /// The currency this amount is denominated in
    currency: Currency,

    /// Atomic units per currency unit
    scale: Scale,
}

impl Discrete {
    /// Create a discrete value from an integer count of atomic units
    ///
    /// Total: the scale tag already carries the positivity invariant,
    /// enforced once at its construction site.
    pub fn new(currency: Currency, scale: Scale, amount: impl Into<BigInt>) -> Self {
        Self { amount: amount.into(), currency, scale }
    }

    /// Create a zero-valued discrete amount
    pub fn zero(currency: Currency, scale: Scale) -> Self {
        Self::new(currency, scale, 0)
    }

    /// Get the currency of this value
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Get the unit scale of this value
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Get the number of atomic units
    pub fn amount(&self) -> &BigInt {
        &self.amount
    }

    /// Split this value into its currency, scale, and amount
    pub fn into_parts(self) -> (Currency, Scale, BigInt) {
        (self.currency, self.scale, self.amount)
    }

    /// Convert to a dense value, exactly
    ///
    /// Computes `amount / scale` as an exact rational; always succeeds.
    pub fn to_dense(&self) -> Dense {
        let amount = BigRational::from_integer(self.amount.clone()) / self.scale.as_rational();
        Dense::new(self.currency.clone(), amount)
    }

    /// Re-tag this value with an equal scale
    ///
    /// A zero-cost relabeling: the integer amount is untouched. Returns
    /// `None` unless the target scale is numerically equal to the current
    /// one; values at genuinely different scales must go through
    /// [`Discrete::to_dense`] and be rounded again.
    pub fn retag(&self, scale: &Scale) -> Option<Discrete> {
        if &self.scale == scale {
            Some(Self::new(self.currency.clone(), scale.clone(), self.amount.clone()))
        } else {
            None
        }
    }

    /// Check if this value is zero
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
        Self::new(self.currency.clone(), self.scale.clone(), self.amount.abs())
    }

    /// Get the negated value
    pub fn negated(&self) -> Self {
        Self::new(self.currency.clone(), self.scale.clone(), -&self.amount)
    }

    /// Add another discrete value with the same currency and scale
    pub fn checked_add(&self, other: &Discrete) -> MoneyResult<Discrete> {
        self.check_compatible(other)?;
        Ok(Self::new(self.currency.clone(), self.scale.clone(), &self.amount + &other.amount))
    }

    /// Subtract another discrete value with the same currency and scale
    pub fn checked_sub(&self, other: &Discrete) -> MoneyResult<Discrete> {
        self.check_compatible(other)?;
        Ok(Self::new(self.currency.clone(), self.scale.clone(), &self.amount - &other.amount))
    }

    fn check_compatible(&self, other: &Discrete) -> MoneyResult<()> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        if self.scale != other.scale {
            return Err(MoneyError::ScaleMismatch {
                left: self.scale.clone(),
                right: other.scale.clone(),
            });
        }
        Ok(())
    }
}

impl PartialOrd for Discrete {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        // Counts of different units have no order
        if self.currency != other.currency || self.scale != other.scale {
            return None;
        }
        self.amount.partial_cmp(&other.amount)
    }
}

/// Renders as `Discrete <currency> <scale> <amount>`.
///
/// The text form tokenizes on whitespace, so it round-trips through
/// [`FromStr`] only for currency codes without whitespace. Values tagged
/// with arbitrary names cross boundaries via
/// [`DiscreteRep`](crate::repr::DiscreteRep), whose record form carries any
/// name.
impl fmt::Display for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Discrete {} {} {}", self.currency, self.scale, self.amount)
    }
}

impl FromStr for Discrete {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("Discrete"), Some(code), Some(scale), Some(amount), None) => {
                let scale: Scale = scale.parse()?;
                let amount: BigInt = amount
                    .parse()
                    .map_err(|_| MoneyError::Parse(format!("bad integer amount: {s:?}")))?;
                Ok(Self::new(Currency::new(code), scale, amount))
            }
            _ => Err(MoneyError::Parse(format!(
                "expected `Discrete <currency> <scale> <amount>`, got {s:?}"
            ))),
        }
    }
}

impl Serialize for Discrete {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Discrete {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// Arithmetic operator implementations, over all value/reference combinations
impl Add for Discrete {
    type Output = MoneyResult<Discrete>;

    fn add(self, other: Discrete) -> Self::Output {
        self.checked_add(&other)
    }
}

impl Add<&Discrete> for Discrete {
    type Output = MoneyResult<Discrete>;

    fn add(self, other: &Discrete) -> Self::Output {
        self.checked_add(other)
    }
}

impl Add<Discrete> for &Discrete {
    type Output = MoneyResult<Discrete>;

    fn add(self, other: Discrete) -> Self::Output {
        self.checked_add(&other)
    }
}

impl Add<&Discrete> for &Discrete {
    type Output = MoneyResult<Discrete>;

    fn add(self, other: &Discrete) -> Self::Output {
        self.checked_add(other)
    }
}

impl Sub for Discrete {
    type Output = MoneyResult<Discrete>;

    fn sub(self, other: Discrete) -> Self::Output {
        self.checked_sub(&other)
    }
}

impl Sub<&Discrete> for Discrete {
    type Output = MoneyResult<Discrete>;

    fn sub(self, other: &Discrete) -> Self::Output {
        self.checked_sub(other)
    }
}

impl Sub<Discrete> for &Discrete {
    type Output = MoneyResult<Discrete>;

    fn sub(self, other: Discrete) -> Self::Output {
        self.checked_sub(&other)
    }
}

impl Sub<&Discrete> for &Discrete {
    type Output = MoneyResult<Discrete>;

    fn sub(self, other: &Discrete) -> Self::Output {
        self.checked_sub(other)
    }
}

impl Neg for Discrete {
    type Output = Discrete;

    fn neg(self) -> Discrete {
        Discrete::new(self.currency, self.scale, -self.amount)
    }
}

impl Neg for &Discrete {
    type Output = Discrete;

    fn neg(self) -> Discrete {
        self.negated()
    }
}

impl Mul<BigInt> for Discrete {
    type Output = Discrete;

    fn mul(self, factor: BigInt) -> Discrete {
        Discrete::new(self.currency, self.scale, self.amount * factor)
    }
}

impl Mul<i64> for Discrete {
    type Output = Discrete;

    fn mul(self, factor: i64) -> Discrete {
        Discrete::new(self.currency, self.scale, self.amount * BigInt::from(factor))
    }
}

impl Mul<i64> for &Discrete {
    type Output = Discrete;

    fn mul(self, factor: i64) -> Discrete {
        Discrete::new(self.currency.clone(), self.scale.clone(), &self.amount * BigInt::from(factor))
    }
}
