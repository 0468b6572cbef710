use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

/// Number of fraction digits carried by every BRL amount
pub const MONEY_SCALE: u32 = 2;

/// Largest amount a `Money` can hold (R$ 1 trillion)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_232, 23_283, 0, false, MONEY_SCALE);

const MAX_CENTS: u64 = 100_000_000_000_000;

/// Rounds a computed quantity to cents, half away from zero.
///
/// Applied once per quantity (each fee, each total); rounding an already
/// rounded value returns it unchanged.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Validates that a rate lies within [0, 1]
pub fn validate_rate(name: &str, rate: Decimal) -> Result<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(AppError::invalid_input(format!(
            "{} must be between 0 and 1, got {}",
            name, rate
        )));
    }
    Ok(())
}

/// Non-negative amount in Brazilian Real, always held at 2 fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Validates an externally supplied amount.
    ///
    /// Rejects negative values, values above `MAX_AMOUNT` and values with
    /// sub-cent precision.
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(AppError::invalid_input(format!(
                "amount cannot be negative, got {}",
                amount
            )));
        }

        if amount > MAX_AMOUNT {
            return Err(AppError::invalid_input(format!(
                "amount exceeds the maximum of {}, got {}",
                MAX_AMOUNT, amount
            )));
        }

        let normalized = amount.normalize();
        if normalized.scale() > MONEY_SCALE {
            return Err(AppError::invalid_input(format!(
                "amount must have at most {} decimal places, got {}",
                MONEY_SCALE, amount
            )));
        }

        Ok(Self::at_scale(normalized))
    }

    /// Wraps a computed quantity, rounding it to cents first.
    pub fn round_from(value: Decimal) -> Result<Self> {
        Self::new(round_money(value))
    }

    /// Builds an amount from whole cents, clamped to `MAX_AMOUNT`
    pub fn from_cents(cents: u64) -> Self {
        Money(Decimal::from_i128_with_scale(
            cents.min(MAX_CENTS) as i128,
            MONEY_SCALE,
        ))
    }

    fn at_scale(mut amount: Decimal) -> Self {
        // -0 would otherwise survive normalize() and print as "-0.00"
        amount.set_sign_positive(true);
        amount.rescale(MONEY_SCALE);
        Money(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Addition that stays within `MAX_AMOUNT`
    pub fn checked_add(self, other: Money) -> Result<Money> {
        self.0
            .checked_add(other.0)
            .ok_or_else(|| AppError::invalid_input("amount overflow"))
            .and_then(Money::new)
    }

    /// Subtraction that refuses to go below zero
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        if other.0 > self.0 {
            None
        } else {
            Some(Self::at_scale(self.0 - other.0))
        }
    }

    /// Multiplies by a whole quantity (cart line totals)
    pub fn checked_times(self, quantity: u32) -> Result<Money> {
        self.0
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| AppError::invalid_input("amount overflow"))
            .and_then(Money::new)
    }

    /// Sums amounts, failing instead of exceeding `MAX_AMOUNT`
    pub fn try_sum<I>(amounts: I) -> Result<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, m| acc.checked_add(m))
    }

    /// Formats as shown on the storefront, e.g. `R$ 1.234,56`
    pub fn format_brl(&self) -> String {
        let text = format!("{:.2}", self.0);
        let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }

        format!("R$ {},{}", grouped, cents)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = AppError;

    fn try_from(value: Decimal) -> Result<Self> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl std::str::FromStr for Money {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str_exact(s.trim())
            .map_err(|_| AppError::invalid_input(format!("invalid amount: {}", s)))?;
        Money::new(value)
    }
}
