// Property-based tests for cent rounding (round half away from zero)

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vitrine::core::{round_money, AppError, Money, MAX_AMOUNT};

#[test]
fn test_midpoints_round_up() {
    assert_eq!(round_money(dec!(4.985)), dec!(4.99));
    assert_eq!(round_money(dec!(17.275)), dec!(17.28));
    assert_eq!(round_money(dec!(0.125)), dec!(0.13));
    assert_eq!(round_money(dec!(0.135)), dec!(0.14));
}

#[test]
fn test_below_midpoint_rounds_down() {
    assert_eq!(round_money(dec!(10.2725)), dec!(10.27));
    assert_eq!(round_money(dec!(1.4949)), dec!(1.49));
}

#[test]
fn test_money_parses_from_str() {
    assert_eq!("105.99".parse::<Money>().unwrap(), Money::from_cents(10599));
    assert!("abc".parse::<Money>().is_err());
    assert!("-5".parse::<Money>().is_err());
    assert!("1.999".parse::<Money>().is_err());
}

#[test]
fn test_amount_above_maximum_is_rejected() {
    assert!("1000000000000.00".parse::<Money>().is_ok());
    for raw in ["1000000000000.01", "79228162514264337593543950335"] {
        assert!(matches!(raw.parse::<Money>(), Err(AppError::InvalidInput(_))));
    }
    assert!(serde_json::from_str::<Money>("\"79228162514264337593543950335\"").is_err());
}

#[test]
fn test_sums_past_maximum_fail_instead_of_overflowing() {
    let max = Money::new(MAX_AMOUNT).unwrap();
    assert!(matches!(max.checked_add(max), Err(AppError::InvalidInput(_))));
    assert!(matches!(
        Money::try_sum([max, Money::from_cents(1)]),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(max.checked_times(u32::MAX), Err(AppError::InvalidInput(_))));
    assert_eq!(max.checked_add(Money::ZERO).unwrap().amount().scale(), 2);
}

proptest! {
    /// Property: rounding is idempotent
    #[test]
    fn prop_rounding_is_idempotent(raw in 0i64..1_000_000_000i64, scale in 0u32..8u32) {
        let value = Decimal::new(raw, scale);
        let once = round_money(value);
        prop_assert_eq!(round_money(once), once);
    }

    /// Property: rounding moves a value by at most half a cent
    #[test]
    fn prop_rounding_error_is_bounded(raw in 0i64..1_000_000_000i64) {
        let value = Decimal::new(raw, 4);
        let rounded = round_money(value);
        prop_assert!((rounded - value).abs() <= dec!(0.005));
    }

    /// Property: rounding preserves order
    #[test]
    fn prop_rounding_is_monotonic(a in 0i64..1_000_000i64, b in 0i64..1_000_000i64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(round_money(Decimal::new(lo, 4)) <= round_money(Decimal::new(hi, 4)));
    }

    /// Property: sums of cent amounts stay exact
    #[test]
    fn prop_money_addition_is_exact(a in 0u64..100_000_000u64, b in 0u64..100_000_000u64) {
        let sum = Money::from_cents(a).checked_add(Money::from_cents(b)).unwrap();
        prop_assert_eq!(sum, Money::from_cents(a + b));
        prop_assert_eq!(sum.amount().scale(), 2);
    }
}
