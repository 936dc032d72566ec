//! Currency-erased boundary representations
//!
//! [`DenseRep`] and [`DiscreteRep`] are the serializable forms of [`Dense`]
//! and [`Discrete`]: plain records carrying the currency name and the exact
//! numeric payload, with no binding to any particular currency in the
//! calling context. They exist for trust boundaries where the currency is
//! not known ahead of time and must be validated on the way back in.
//!
//! Importing is explicit and fails closed: the typed-target importers
//! ([`DenseRep::into_dense`], [`DiscreteRep::into_discrete`]) succeed only
//! when the stored metadata matches the expected currency (and scale)
//! exactly, with no numeric coercion attempted. When the target is not known
//! in advance, the continuation-style importers ([`DenseRep::with_dense`],
//! [`DiscreteRep::with_discrete`]) mint a tag from the stored name and hand
//! the reconstructed value to the caller.
//!
//! The serde form follows the record shapes
//! `{ currency, numerator, denominator }` and
//! `{ currency, scaleNumerator, scaleDenominator, amount }`, with the
//! big-integer fields encoded as decimal strings so no precision is lost in
//! formats whose numbers are bounded. Deserialization re-runs the structural
//! validation and rejects non-positive denominators and scales.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::dense::Dense;
use crate::discrete::Discrete;
use crate::scale::Scale;

/// The currency-erased form of a [`Dense`] value
///
/// Holds the currency name and the exact rational amount, stored in reduced
/// form with the sign in the numerator and a strictly positive denominator.
///
/// The derived `Ord` compares the structural fields (currency name first,
/// then the rational amount) so reps can live in sorted containers. It is
/// **not** a monetary magnitude comparison: amounts in different currencies
/// are ordered by their name strings, which means nothing financially.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DenseRep {
    currency: String,
    amount: BigRational,
}

impl DenseRep {
    /// Create a dense representation from raw parts
    ///
    /// Returns `None` iff the denominator is zero or negative. The sign of
    /// the amount belongs in the numerator.
    pub fn new(currency: impl Into<String>, numer: BigInt, denom: BigInt) -> Option<Self> {
        if !denom.is_positive() {
            return None;
        }
        Some(Self { currency: currency.into(), amount: BigRational::new(numer, denom) })
    }

    /// Erase a typed dense value into its representation; total
    pub fn from_dense(value: &Dense) -> Self {
        Self { currency: value.currency().code().to_string(), amount: value.amount().clone() }
    }

    /// Get the stored currency name
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Get the numerator of the stored amount
    pub fn numer(&self) -> &BigInt {
        self.amount.numer()
    }

    /// Get the denominator of the stored amount (always positive)
    pub fn denom(&self) -> &BigInt {
        self.amount.denom()
    }

    /// Import as a value of a known target currency
    ///
    /// Returns `None` unless the stored currency name matches the target
    /// exactly.
    pub fn into_dense(self, target: &Currency) -> Option<Dense> {
        if self.currency == target.code() {
            Some(Dense::new(target.clone(), self.amount))
        } else {
            None
        }
    }

    /// Import with a freshly minted currency tag
    ///
    /// For boundaries where the currency is not known ahead of time: mints a
    /// tag from the stored name and passes the typed value to the
    /// continuation. Total for every structurally valid representation. The
    /// continuation's result type is independent of the minted tag, so the
    /// tag cannot outlive the call.
    pub fn with_dense<R>(self, f: impl FnOnce(Dense) -> R) -> R {
        let currency = Currency::new(&self.currency);
        f(Dense::new(currency, self.amount))
    }
}

impl fmt::Display for DenseRep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DenseRep {} {}/{}", self.currency, self.amount.numer(), self.amount.denom())
    }
}

impl Serialize for DenseRep {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("DenseRep", 3)?;
        state.serialize_field("currency", &self.currency)?;
        // Big integers as decimal strings, so precision survives any format
        state.serialize_field("numerator", &self.amount.numer().to_string())?;
        state.serialize_field("denominator", &self.amount.denom().to_string())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawDenseRep {
    currency: String,
    numerator: String,
    denominator: String,
}

impl<'de> Deserialize<'de> for DenseRep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDenseRep::deserialize(deserializer)?;
        let numer: BigInt = raw.numerator.parse().map_err(D::Error::custom)?;
        let denom: BigInt = raw.denominator.parse().map_err(D::Error::custom)?;
        DenseRep::new(raw.currency, numer, denom)
            .ok_or_else(|| D::Error::custom("denominator must be positive"))
    }
}

/// The currency-erased form of a [`Discrete`] value
///
/// Holds the currency name, the unit scale, and the integer amount.
///
/// As with [`DenseRep`], the derived `Ord` is structural (currency name,
/// scale, amount) for container use only, not a magnitude comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscreteRep {
    currency: String,
    scale: Scale,
    amount: BigInt,
}

impl DiscreteRep {
    /// Create a discrete representation from raw parts
    ///
    /// Returns `None` iff either scale component is zero or negative. The
    /// amount itself may be any integer.
    pub fn new(
        currency: impl Into<String>,
        scale_numer: BigInt,
        scale_denom: BigInt,
        amount: BigInt,
    ) -> Option<Self> {
        if !scale_numer.is_positive() || !scale_denom.is_positive() {
            return None;
        }
        // Positivity established above; the raw path skips re-validation
        let scale = Scale::from_raw(BigRational::new(scale_numer, scale_denom));
        Some(Self { currency: currency.into(), scale, amount })
    }

    /// Erase a typed discrete value into its representation; total
    pub fn from_discrete(value: &Discrete) -> Self {
        Self {
            currency: value.currency().code().to_string(),
            scale: value.scale().clone(),
            amount: value.amount().clone(),
        }
    }

    /// Get the stored currency name
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Get the numerator of the stored scale (always positive)
    pub fn scale_numer(&self) -> &BigInt {
        self.scale.numer()
    }

    /// Get the denominator of the stored scale (always positive)
    pub fn scale_denom(&self) -> &BigInt {
        self.scale.denom()
    }

    /// Get the stored integer amount
    pub fn amount(&self) -> &BigInt {
        &self.amount
    }

    /// Import as a value of a known target currency and scale
    ///
    /// Returns `None` unless both the stored currency name and the stored
    /// scale match the targets exactly. Proportional-but-different scales do
    /// not match; no coercion is attempted.
    pub fn into_discrete(self, currency: &Currency, scale: &Scale) -> Option<Discrete> {
        if self.currency == currency.code() && &self.scale == scale {
            Some(Discrete::new(currency.clone(), scale.clone(), self.amount))
        } else {
            None
        }
    }

    /// Import with freshly minted currency and scale tags
    ///
    /// Counterpart of [`DenseRep::with_dense`] for discrete values; total
    /// for every structurally valid representation, since the stored scale
    /// already satisfies the positivity invariant.
    pub fn with_discrete<R>(self, f: impl FnOnce(Discrete) -> R) -> R {
        let currency = Currency::new(&self.currency);
        f(Discrete::new(currency, self.scale, self.amount))
    }
}

impl fmt::Display for DiscreteRep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiscreteRep {} {} {}", self.currency, self.scale, self.amount)
    }
}

impl Serialize for DiscreteRep {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("DiscreteRep", 4)?;
        state.serialize_field("currency", &self.currency)?;
        state.serialize_field("scaleNumerator", &self.scale.numer().to_string())?;
        state.serialize_field("scaleDenominator", &self.scale.denom().to_string())?;
        state.serialize_field("amount", &self.amount.to_string())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawDiscreteRep {
    currency: String,
    #[serde(rename = "scaleNumerator")]
    scale_numerator: String,
    #[serde(rename = "scaleDenominator")]
    scale_denominator: String,
    amount: String,
}

impl<'de> Deserialize<'de> for DiscreteRep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawDiscreteRep::deserialize(deserializer)?;
        let scale_numer: BigInt = raw.scale_numerator.parse().map_err(D::Error::custom)?;
        let scale_denom: BigInt = raw.scale_denominator.parse().map_err(D::Error::custom)?;
        let amount: BigInt = raw.amount.parse().map_err(D::Error::custom)?;
        DiscreteRep::new(raw.currency, scale_numer, scale_denom, amount)
            .ok_or_else(|| D::Error::custom("scale components must be positive"))
    }
}
