//! Shared error types for monetary operations
//!
//! Cross-value operations (addition, subtraction, exchange) carry runtime
//! currency and scale tags, so tag mismatches surface here as errors rather
//! than as compile failures. Constructors that merely reject invalid input
//! return `Option` instead; see the individual modules.

use thiserror::Error;

use crate::currency::Currency;
use crate::scale::Scale;

/// Errors that can occur when combining or parsing monetary values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("cannot combine amounts in {left} with amounts in {right}")]
    CurrencyMismatch { left: Currency, right: Currency },
    #[error("discrete amounts use different unit scales: {left} vs {right}")]
    ScaleMismatch { left: Scale, right: Scale },
    #[error("cannot parse monetary value: {0}")]
    Parse(String),
}

/// Result type for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;
