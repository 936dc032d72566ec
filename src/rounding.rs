//! Rounding of dense values into discrete values
//!
//! One algorithm, four integer-rounding policies. Every rounding reports its
//! exact remainder: for any input `x`, the discrete result `y` and the
//! leftover `l` satisfy `x == to_dense(y) + l` exactly, so no money is ever
//! lost silently.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::dense::Dense;
use crate::discrete::Discrete;
use crate::scale::Scale;

/// Integer rounding policy applied to the scaled amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round to the nearest representable value, ties to the even unit count
    /// (banker's rounding)
    HalfEven,

    /// Round up; the result is never below the input
    Ceiling,

    /// Round down; the result is never above the input
    Floor,

    /// Round toward zero: floor for non-negative inputs, ceiling for
    /// negative ones
    Truncate,
}

/// Round a dense value to a discrete value at the given scale
///
/// Returns the discrete value and the exact leftover; the leftover is `None`
/// exactly when the input was representable at the scale, in which case all
/// four policies agree. Total for every valid scale.
pub fn round_with(value: &Dense, scale: &Scale, policy: Rounding) -> (Discrete, Option<Dense>) {
    let scaled = value.amount() * scale.as_rational();
    let units = match policy {
        Rounding::HalfEven => half_even(&scaled),
        Rounding::Ceiling => scaled.ceil().to_integer(),
        Rounding::Floor => scaled.floor().to_integer(),
        Rounding::Truncate => scaled.trunc().to_integer(),
    };

    // The exact value the chosen unit count stands for
    let represented = BigRational::from_integer(units.clone()) / scale.as_rational();
    let leftover = if &represented == value.amount() {
        None
    } else {
        Some(Dense::new(value.currency().clone(), value.amount() - &represented))
    };

    (Discrete::new(value.currency().clone(), scale.clone(), units), leftover)
}

/// Round a rational to the nearest integer, ties to even
///
/// `BigRational::round` resolves ties away from zero, so the tie case is
/// handled explicitly here.
fn half_even(value: &BigRational) -> BigInt {
    let below = value.floor().to_integer();
    let frac = value - BigRational::from_integer(below.clone());
    let half = BigRational::new(BigInt::one(), BigInt::from(2));
    match frac.cmp(&half) {
        Ordering::Less => below,
        Ordering::Greater => below + BigInt::one(),
        Ordering::Equal => {
            if (&below % BigInt::from(2)).is_zero() {
                below
            } else {
                below + BigInt::one()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(int(n), int(d))
    }

    #[test]
    fn half_even_resolves_ties_to_even() {
        assert_eq!(half_even(&ratio(1, 2)), int(0));
        assert_eq!(half_even(&ratio(3, 2)), int(2));
        assert_eq!(half_even(&ratio(5, 2)), int(2));
        assert_eq!(half_even(&ratio(-1, 2)), int(0));
        assert_eq!(half_even(&ratio(-3, 2)), int(-2));
        assert_eq!(half_even(&ratio(-5, 2)), int(-2));
    }

    #[test]
    fn half_even_rounds_to_nearest_off_ties() {
        assert_eq!(half_even(&ratio(7, 10)), int(1));
        assert_eq!(half_even(&ratio(3, 10)), int(0));
        assert_eq!(half_even(&ratio(-7, 10)), int(-1));
        assert_eq!(half_even(&ratio(-3, 10)), int(0));
    }

    #[test]
    fn half_even_is_identity_on_integers() {
        assert_eq!(half_even(&ratio(42, 1)), int(42));
        assert_eq!(half_even(&ratio(-42, 1)), int(-42));
        assert_eq!(half_even(&ratio(0, 1)), int(0));
    }
}
