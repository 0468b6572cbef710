// Property-based tests for the platform/producer commission split
//
// Validates:
// - platform_fee + producer_amount == gross_amount, to the cent
// - Fee is the rounded product of gross and rate
// - Out-of-range rates are rejected

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vitrine::commissions::CommissionCalculator;
use vitrine::core::{round_money, AppError, Money};

#[test]
fn test_one_cent_sale() {
    let split = CommissionCalculator::split(Money::from_cents(1), dec!(0.03)).unwrap();
    assert_eq!(split.platform_fee, Money::ZERO);
    assert_eq!(split.producer_amount, Money::from_cents(1));
}

#[test]
fn test_three_cent_sale() {
    let split = CommissionCalculator::split(Money::from_cents(3), dec!(0.03)).unwrap();
    assert_eq!(split.platform_fee, Money::ZERO);
    assert_eq!(split.producer_amount, Money::from_cents(3));
}

#[test]
fn test_zero_sale() {
    let split = CommissionCalculator::split(Money::ZERO, dec!(0.03)).unwrap();
    assert_eq!(split.platform_fee, Money::ZERO);
    assert_eq!(split.producer_amount, Money::ZERO);
}

#[test]
fn test_split_ignores_card_surcharge() {
    // commission is taken on the product price only
    let split = CommissionCalculator::split(Money::from_cents(10000), dec!(0.03)).unwrap();
    assert_eq!(split.gross_amount, Money::from_cents(10000));
    assert_eq!(split.platform_fee, Money::from_cents(300));
}

#[test]
fn test_invalid_rates() {
    for rate in [dec!(-0.0001), dec!(1.0001), dec!(3)] {
        assert!(matches!(
            CommissionCalculator::split(Money::from_cents(100), rate),
            Err(AppError::InvalidInput(_))
        ));
    }
}

proptest! {
    /// Property: money is conserved across the split
    #[test]
    fn prop_split_conserves_gross(
        cents in 0u64..1_000_000_000u64,
        rate_bp in 0u32..=10_000u32,
    ) {
        let gross = Money::from_cents(cents);
        let rate = Decimal::from(rate_bp) / Decimal::from(10_000);

        let split = CommissionCalculator::split(gross, rate).unwrap();

        prop_assert_eq!(split.platform_fee.checked_add(split.producer_amount).unwrap(), gross);
        prop_assert_eq!(split.platform_fee, Money::new(round_money(gross.amount() * rate)).unwrap());
    }

    /// Property: conservation holds for small, awkwardly rounding amounts
    #[test]
    fn prop_split_conserves_cents(cents in 0u64..1_000u64) {
        let gross = Money::from_cents(cents);
        let split = CommissionCalculator::split(gross, dec!(0.03)).unwrap();
        prop_assert_eq!(split.platform_fee.checked_add(split.producer_amount).unwrap(), gross);
        prop_assert!(split.platform_fee <= gross);
    }

    /// Property: same inputs, same outputs
    #[test]
    fn prop_split_idempotent(cents in 0u64..1_000_000_000u64) {
        let gross = Money::from_cents(cents);
        prop_assert_eq!(
            CommissionCalculator::split(gross, dec!(0.03)).unwrap(),
            CommissionCalculator::split(gross, dec!(0.03)).unwrap()
        );
    }
}
