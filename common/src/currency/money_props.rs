//! Property-based checks of [`Money`] rounding and conversion.

use proptest::prelude::*;

use super::{Money, MoneyError};

const CODES: [&str; 3] = ["usd", "eur", "uah"];

fn round_half_away(x: f64) -> f64 {
    if x >= 0.0 { (x + 0.5).floor() } else { (x - 0.5).ceil() }
}

/// Major amounts between -1,000,000 and 1,000,000.
fn major_amount() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

/// Positive rates from 0.0001 to 10,000.
fn positive_rate() -> impl Strategy<Value = f64> {
    (1i64..100_000_000i64).prop_map(|v| v as f64 / 10_000.0)
}

fn small_precision() -> impl Strategy<Value = u32> {
    0u32..=6
}

fn any_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(CODES.to_vec())
}

fn any_money() -> impl Strategy<Value = Money> {
    (-1_000_000_000i64..1_000_000_000i64, any_code(), 0u32..=4)
        .prop_map(|(units, code, precision)| Money::from_minor_units(units, code, precision))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Rounding never moves an amount by more than half a minor unit.
    #[test]
    fn from_decimal_is_within_half_a_minor_unit(amount in major_amount(), precision in small_precision()) {
        let money = Money::from_decimal(amount, "usd", precision).unwrap();
        let tolerance = 0.5 / 10f64.powi(precision as i32) + 1e-9;
        let error = (money.to_decimal() - amount).abs();

        prop_assert!(error <= tolerance, "{} at precision {} drifted by {}", amount, precision, error);
    }

    /// Same-currency conversion ignores both the rate and the target precision.
    #[test]
    fn convert_to_own_currency_is_identity(
        money in any_money(),
        rate in any::<f64>(),
        to_precision in 0u32..=18,
    ) {
        let same = money.convert(money.currency_code(), rate, to_precision).unwrap();

        prop_assert_eq!(same.minor_units(), money.minor_units());
        prop_assert_eq!(same.precision(), money.precision());
        prop_assert_eq!(same.currency_code(), money.currency_code());
    }

    /// Cross-currency conversion rounds `amount * rate` half away from zero.
    #[test]
    fn convert_rounds_scaled_product(
        money in any_money(),
        rate in positive_rate(),
        to_precision in 0u32..=4,
    ) {
        let to_code = if money.currency_code() == "usd" { "eur" } else { "usd" };
        let expected = round_half_away(money.to_decimal() * rate * 10f64.powi(to_precision as i32));

        let converted = money.convert(to_code, rate, to_precision).unwrap();

        prop_assert_eq!(converted.minor_units(), expected as i64);
        prop_assert_eq!(converted.currency_code(), to_code);
        prop_assert_eq!(converted.precision(), to_precision);
    }

    /// Incompatible operands always fail, and in-place forms leave the value alone.
    #[test]
    fn incompatible_operands_always_fail(left in any_money(), right in any_money()) {
        prop_assume!(!left.is_compatible(&right));

        let is_mismatch = |r: Result<(), MoneyError>| matches!(r, Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(is_mismatch(left.try_add(&right).map(|_| ())));
        prop_assert!(is_mismatch(left.try_sub(&right).map(|_| ())));
        prop_assert!(is_mismatch(left.try_cmp(&right).map(|_| ())));

        let mut acc = left.clone();
        prop_assert!(is_mismatch(acc.try_add_assign(&right)));
        prop_assert!(is_mismatch(acc.try_sub_assign(&right)));
        prop_assert_eq!(acc.minor_units(), left.minor_units());
    }

    /// Adding then subtracting the same compatible amount restores the original.
    #[test]
    fn add_then_subtract_round_trips(
        units in -1_000_000_000i64..1_000_000_000i64,
        delta in -1_000_000_000i64..1_000_000_000i64,
        code in any_code(),
    ) {
        let base = Money::from_minor_units(units, code, 2);
        let delta = Money::from_minor_units(delta, code, 2);

        let round_trip = base.try_add(&delta).unwrap().try_sub(&delta).unwrap();

        prop_assert_eq!(round_trip.minor_units(), units);
    }
}
