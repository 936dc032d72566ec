//! Exact, loss-auditable monetary arithmetic
//!
//! This crate represents money two ways: as [`Dense`] values, which are
//! exact rational amounts with no unit granularity limit, and as
//! [`Discrete`] values, which are integer counts of a currency's atomic
//! unit, the form a ledger or payment rail actually stores. All arithmetic
//! is exact rational arithmetic
//! over arbitrary-precision integers; nothing is rounded until a dense value
//! is materialized into a discrete one, and every rounding reports its exact
//! leftover so no money is lost silently.
//!
//! Everything here is immutable and pure: values can be shared across
//! threads freely, and no operation mutates, blocks, logs, or retries.
//! Currency registries, formatting, and rate lookup are deliberately out of
//! scope; this is an in-memory value and conversion library.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod currency;
pub mod dense;
pub mod discrete;
pub mod error;
pub mod exchange;
pub mod repr;
pub mod rounding;
pub mod scale;

// Re-export main types
pub use currency::Currency;
pub use dense::Dense;
pub use discrete::Discrete;
pub use error::{MoneyError, MoneyResult};
pub use exchange::ExchangeRate;
pub use repr::{DenseRep, DiscreteRep};
pub use rounding::{round_with, Rounding};
pub use scale::{Scale, ScaleError, ScaleResult, ScaleTable, UnitScales};

// Re-export for convenience
pub use num_bigint::BigInt;
pub use num_rational::BigRational;
pub use rust_decimal::Decimal;
