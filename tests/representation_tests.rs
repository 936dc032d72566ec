// Tests for the currency-erased representations: structural validation,
// typed-target and continuation-style imports, container ordering, and the
// serde wire shapes.

use money_math::{Currency, Dense, DenseRep, Discrete, DiscreteRep, Scale};
use num_bigint::BigInt;
use num_rational::BigRational;

fn usd() -> Currency {
    Currency::new("USD")
}

fn eur() -> Currency {
    Currency::new("EUR")
}

fn int(value: i64) -> BigInt {
    BigInt::from(value)
}

fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(int(numer), int(denom))
}

fn scale(numer: i64, denom: i64) -> Scale {
    Scale::new(int(numer), int(denom)).unwrap()
}

#[cfg(test)]
mod dense_rep_tests {
    use super::*;

    #[test]
    fn test_structural_validation() {
        assert!(DenseRep::new("USD", int(1), int(0)).is_none());
        assert!(DenseRep::new("USD", int(1), int(-4)).is_none());
        // Negative numerators are fine; the sign lives in the numerator
        assert!(DenseRep::new("USD", int(-1), int(4)).is_some());
    }

    #[test]
    fn test_export_import_round_trip() {
        let x = Dense::new(usd(), ratio(12345, 100)); // 123.45 USD
        let rep = DenseRep::from_dense(&x);
        assert_eq!(rep.currency(), "USD");

        assert_eq!(rep.clone().into_dense(&usd()), Some(x));
        assert_eq!(rep.into_dense(&eur()), None);
    }

    #[test]
    fn test_import_validates_currency_not_value() {
        // Same numeric value, wrong currency name: import fails closed
        let rep = DenseRep::new("EUR", int(12345), int(100)).unwrap();
        assert!(rep.into_dense(&usd()).is_none());
    }

    #[test]
    fn test_with_dense_mints_stored_currency() {
        let rep = DenseRep::new("JPY", int(500), int(1)).unwrap();
        let code = rep.with_dense(|value| {
            assert_eq!(value.amount(), &ratio(500, 1));
            value.currency().code().to_string()
        });
        assert_eq!(code, "JPY");
    }

    #[test]
    fn test_stored_amount_is_reduced() {
        let rep = DenseRep::new("USD", int(50), int(100)).unwrap();
        assert_eq!(rep.numer(), &int(1));
        assert_eq!(rep.denom(), &int(2));
    }

    #[test]
    fn test_container_ordering_is_structural() {
        let one = DenseRep::new("USD", int(1), int(1)).unwrap();
        let hundred = DenseRep::new("USD", int(100), int(1)).unwrap();

        // Within one currency the tuple order happens to follow the amount
        assert!(one < hundred);

        // Across currencies it orders by name first; this says nothing
        // about monetary magnitude and must not be read as a comparison
        // of the amounts.
        let eur_large = DenseRep::new("EUR", int(1000000), int(1)).unwrap();
        assert!(eur_large < one);
    }

    #[test]
    fn test_rep_carries_whitespace_currency_names() {
        // Any string is a legal tag; names with whitespace cross
        // boundaries through the record form, not the display text
        let odd = Currency::new("TEST COIN");
        let x = Dense::new(odd.clone(), ratio(1, 3));

        let rep = DenseRep::from_dense(&x);
        let json = serde_json::to_string(&rep).unwrap();
        let back: DenseRep = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_dense(&odd), Some(x.clone()));

        // The tokenized text form cannot represent such a tag
        assert!(x.to_string().parse::<Dense>().is_err());
    }

    #[test]
    fn test_serde_shape() {
        let rep = DenseRep::new("USD", int(-271), int(40)).unwrap();
        let json = serde_json::to_value(&rep).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currency": "USD",
                "numerator": "-271",
                "denominator": "40",
            })
        );

        let back: DenseRep = serde_json::from_value(json).unwrap();
        assert_eq!(back, rep);
    }

    #[test]
    fn test_deserialize_fails_closed() {
        let bad: Result<DenseRep, _> = serde_json::from_str(
            r#"{"currency":"USD","numerator":"1","denominator":"0"}"#,
        );
        assert!(bad.is_err());

        let negative: Result<DenseRep, _> = serde_json::from_str(
            r#"{"currency":"USD","numerator":"1","denominator":"-4"}"#,
        );
        assert!(negative.is_err());

        let garbage: Result<DenseRep, _> = serde_json::from_str(
            r#"{"currency":"USD","numerator":"one","denominator":"4"}"#,
        );
        assert!(garbage.is_err());
    }
}

#[cfg(test)]
mod discrete_rep_tests {
    use super::*;

    #[test]
    fn test_structural_validation() {
        assert!(DiscreteRep::new("USD", int(0), int(1), int(5)).is_none());
        assert!(DiscreteRep::new("USD", int(1), int(0), int(5)).is_none());
        assert!(DiscreteRep::new("USD", int(-100), int(1), int(5)).is_none());
        // The amount may be any integer
        assert!(DiscreteRep::new("USD", int(100), int(1), int(-5)).is_some());
    }

    #[test]
    fn test_export_import_round_trip() {
        let cents = Discrete::new(usd(), scale(100, 1), 678);
        let rep = DiscreteRep::from_discrete(&cents);
        assert_eq!(rep.currency(), "USD");
        assert_eq!(rep.scale_numer(), &int(100));
        assert_eq!(rep.scale_denom(), &int(1));
        assert_eq!(rep.amount(), &int(678));

        assert_eq!(rep.clone().into_discrete(&usd(), &scale(100, 1)), Some(cents));
        assert_eq!(rep.clone().into_discrete(&eur(), &scale(100, 1)), None);
        // The scale must match exactly as well; no coercion between scales
        assert_eq!(rep.into_discrete(&usd(), &scale(1000, 1)), None);
    }

    #[test]
    fn test_with_discrete_mints_stored_tags() {
        let rep = DiscreteRep::new("CHF", int(100), int(1), int(995)).unwrap();
        let seen = rep.with_discrete(|value| {
            assert_eq!(value.currency().code(), "CHF");
            assert_eq!(value.scale(), &scale(100, 1));
            value.amount().clone()
        });
        assert_eq!(seen, int(995));
    }

    #[test]
    fn test_serde_shape() {
        let rep = DiscreteRep::new("USD", int(100), int(1), int(-678)).unwrap();
        let json = serde_json::to_value(&rep).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currency": "USD",
                "scaleNumerator": "100",
                "scaleDenominator": "1",
                "amount": "-678",
            })
        );

        let back: DiscreteRep = serde_json::from_value(json).unwrap();
        assert_eq!(back, rep);
    }

    #[test]
    fn test_deserialize_fails_closed() {
        let bad: Result<DiscreteRep, _> = serde_json::from_str(
            r#"{"currency":"USD","scaleNumerator":"0","scaleDenominator":"1","amount":"5"}"#,
        );
        assert!(bad.is_err());

        let negative: Result<DiscreteRep, _> = serde_json::from_str(
            r#"{"currency":"USD","scaleNumerator":"100","scaleDenominator":"-1","amount":"5"}"#,
        );
        assert!(negative.is_err());
    }
}

#[cfg(test)]
mod typed_value_serde_tests {
    use super::*;
    use money_math::ExchangeRate;

    #[test]
    fn test_dense_round_trips_through_exact_text() {
        let x = Dense::new(usd(), ratio(-271, 40));
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(json, r#""Dense USD -271/40""#);
        let back: Dense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn test_discrete_round_trips_through_exact_text() {
        let cents = Discrete::new(usd(), scale(100, 1), 678);
        let json = serde_json::to_string(&cents).unwrap();
        assert_eq!(json, r#""Discrete USD 100/1 678""#);
        let back: Discrete = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cents);
    }

    #[test]
    fn test_exchange_rate_round_trips_and_revalidates() {
        let rate = ExchangeRate::new(usd(), eur(), ratio(7, 8)).unwrap();
        let json = serde_json::to_string(&rate).unwrap();
        let back: ExchangeRate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rate);

        let bad: Result<ExchangeRate, _> =
            serde_json::from_str(r#""ExchangeRate USD EUR -7/8""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_scale_serde() {
        let s = scale(100, 1);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#""100/1""#);
        let back: Scale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);

        let bad: Result<Scale, _> = serde_json::from_str(r#""0/1""#);
        assert!(bad.is_err());
    }
}

// Property-based tests using proptest
#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_dense_rep_round_trip(
            numer in -1000000i64..1000000, denom in 1i64..10000,
        ) {
            let x = Dense::new(usd(), ratio(numer, denom));
            let rep = DenseRep::from_dense(&x);
            prop_assert_eq!(rep.clone().into_dense(&usd()), Some(x));
            prop_assert_eq!(rep.into_dense(&eur()), None);
        }

        #[test]
        fn prop_discrete_rep_round_trip(
            amount in -1000000i64..1000000,
            sn in 1i64..10000, sd in 1i64..100,
        ) {
            let d = Discrete::new(usd(), scale(sn, sd), amount);
            let rep = DiscreteRep::from_discrete(&d);
            prop_assert_eq!(rep.clone().into_discrete(&usd(), &scale(sn, sd)), Some(d));
            prop_assert_eq!(rep.into_discrete(&eur(), &scale(sn, sd)), None);
        }

        #[test]
        fn prop_rep_serde_round_trip(
            numer in -1000000i64..1000000, denom in 1i64..10000,
        ) {
            let rep = DenseRep::new("USD", int(numer), int(denom)).unwrap();
            let json = serde_json::to_string(&rep).unwrap();
            let back: DenseRep = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, rep);
        }
    }
}
