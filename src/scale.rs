//! Unit scales
//!
//! A scale describes how many atomic units make up one unit of a currency:
//! 100/1 for cents per dollar, 1/1 for a currency counted in whole units,
//! 31103477/1000000 for troy-ounce gold quoted in micrograins, and so on. A
//! scale is always a strictly positive rational; the validating constructors
//! here are the only public way to build one.
//!
//! Which (currency, unit) pairs exist is the host application's business.
//! This module only fixes the shape of that association ([`UnitScales`]) and
//! provides a plain table implementation ([`ScaleTable`]) the host can fill.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::currency::Currency;
use crate::error::MoneyError;

/// Errors that can occur while resolving a scale
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("no scale registered for unit {unit:?} of currency {currency}")]
    UnknownUnit { currency: Currency, unit: String },
    #[error("currency {currency} has no canonical smallest unit; choose a unit explicitly")]
    NoCanonicalUnit { currency: Currency },
}

/// Result type for scale resolution
pub type ScaleResult<T> = Result<T, ScaleError>;

/// A strictly positive rational number of atomic units per currency unit
///
/// Stored in reduced form; both the numerator and the denominator are
/// guaranteed greater than zero for every value that exists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Scale(BigRational);

impl Scale {
    /// Create a scale from a numerator and denominator
    ///
    /// Returns `None` if either component is zero or negative.
    pub fn new(numer: BigInt, denom: BigInt) -> Option<Self> {
        if !numer.is_positive() || !denom.is_positive() {
            return None;
        }
        Some(Self(BigRational::new(numer, denom)))
    }

    /// Create a scale from an exact rational
    ///
    /// Returns `None` if the rational is zero or negative.
    pub fn from_rational(ratio: BigRational) -> Option<Self> {
        if !ratio.is_positive() {
            return None;
        }
        Some(Self(ratio))
    }

    /// Create a whole-number scale (`units` atomic units per currency unit)
    ///
    /// Returns `None` if `units` is zero.
    pub fn per_unit(units: u64) -> Option<Self> {
        Self::new(BigInt::from(units), BigInt::from(1u8))
    }

    /// Wrap a rational whose positivity was already established.
    ///
    /// Reaching this with a non-positive value means a structural validation
    /// step above was bypassed, which is a defect rather than an input error.
    pub(crate) fn from_raw(ratio: BigRational) -> Self {
        debug_assert!(ratio.is_positive(), "scale invariant bypassed: {}", ratio);
        Self(ratio)
    }

    /// Get the numerator (always positive)
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Get the denominator (always positive)
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Get the scale as an exact rational
    pub fn as_rational(&self) -> &BigRational {
        &self.0
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.numer(), self.0.denom())
    }
}

impl FromStr for Scale {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numer, denom) = s.split_once('/').unwrap_or((s, "1"));
        let numer: BigInt =
            numer.parse().map_err(|_| MoneyError::Parse(format!("bad scale numerator: {s:?}")))?;
        let denom: BigInt =
            denom.parse().map_err(|_| MoneyError::Parse(format!("bad scale denominator: {s:?}")))?;
        Self::new(numer, denom)
            .ok_or_else(|| MoneyError::Parse(format!("scale must be positive: {s:?}")))
    }
}

impl Serialize for Scale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// The host-supplied association between (currency, unit) pairs and scales
///
/// Implementors only define the two lookups; the `scale` and `canonical`
/// methods turn a missing association into the corresponding [`ScaleError`].
pub trait UnitScales {
    /// Look up the scale for a named unit of a currency, if one is defined
    fn lookup(&self, currency: &Currency, unit: &str) -> Option<Scale>;

    /// Look up the canonical smallest-unit scale of a currency, if it has one
    ///
    /// Currencies without an obvious smallest unit (e.g. precious metals)
    /// return `None` here and force callers to pick a unit explicitly.
    fn lookup_canonical(&self, currency: &Currency) -> Option<Scale>;

    /// Resolve the scale for a named unit of a currency
    fn scale(&self, currency: &Currency, unit: &str) -> ScaleResult<Scale> {
        self.lookup(currency, unit).ok_or_else(|| ScaleError::UnknownUnit {
            currency: currency.clone(),
            unit: unit.to_string(),
        })
    }

    /// Resolve the canonical smallest-unit scale of a currency
    fn canonical(&self, currency: &Currency) -> ScaleResult<Scale> {
        self.lookup_canonical(currency)
            .ok_or_else(|| ScaleError::NoCanonicalUnit { currency: currency.clone() })
    }
}

/// A plain table of unit scales
///
/// Starts empty; the host registers every (currency, unit) pair it cares
/// about. No currency data is built in.
#[derive(Debug, Clone, Default)]
pub struct ScaleTable {
    units: HashMap<Currency, HashMap<String, Scale>>,
    canonical: HashMap<Currency, Scale>,
}

impl ScaleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the scale for a named unit of a currency
    pub fn insert_unit(&mut self, currency: Currency, unit: impl Into<String>, scale: Scale) {
        self.units.entry(currency).or_default().insert(unit.into(), scale);
    }

    /// Register the canonical smallest-unit scale of a currency
    pub fn set_canonical(&mut self, currency: Currency, scale: Scale) {
        self.canonical.insert(currency, scale);
    }
}

impl UnitScales for ScaleTable {
    fn lookup(&self, currency: &Currency, unit: &str) -> Option<Scale> {
        self.units.get(currency).and_then(|units| units.get(unit)).cloned()
    }

    fn lookup_canonical(&self, currency: &Currency) -> Option<Scale> {
        self.canonical.get(currency).cloned()
    }
}
