use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{validate_rate, AppError, Money, Result};

/// Largest installment count a card payment may be split into
pub const MAX_INSTALLMENTS: u32 = 12;

/// Card pricing parameters injected into `PricingCalculator`.
///
/// `interest_rates[0]` is the rate for a single installment, `interest_rates[11]`
/// the rate for twelve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    /// Processing rate applied to every card payment (e.g. 0.0499)
    pub card_rate: Decimal,
    /// Fixed per-transaction service fee
    pub fixed_service_fee: Money,
    /// Interest by installment count, 1x first
    pub interest_rates: Vec<Decimal>,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            card_rate: Decimal::new(499, 4),
            fixed_service_fee: Money::from_cents(100),
            interest_rates: vec![
                Decimal::ZERO,
                Decimal::new(459, 4),
                Decimal::new(597, 4),
                Decimal::new(733, 4),
                Decimal::new(866, 4),
                Decimal::new(996, 4),
                Decimal::new(1124, 4),
                Decimal::new(1250, 4),
                Decimal::new(1373, 4),
                Decimal::new(1494, 4),
                Decimal::new(1612, 4),
                Decimal::new(1728, 4),
            ],
        }
    }
}

/// Rejects installment counts outside 1..=12
pub fn validate_installment_count(installments: u32) -> Result<()> {
    if installments < 1 || installments > MAX_INSTALLMENTS {
        return Err(AppError::InvalidInstallmentCount(installments));
    }
    Ok(())
}

impl FeeSchedule {
    /// Interest rate for the given installment count.
    ///
    /// A count outside 1..=12 is the caller's mistake (`InvalidInstallmentCount`); a count
    /// the table does not cover is a configuration mistake (`Configuration`).
    pub fn interest_rate(&self, installments: u32) -> Result<Decimal> {
        validate_installment_count(installments)?;

        self.interest_rates
            .get(installments as usize - 1)
            .copied()
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "fee schedule defines {} interest rates, no entry for {} installments",
                    self.interest_rates.len(),
                    installments
                ))
            })
    }

    /// True when more installments never carry a lower interest rate
    pub fn is_monotonic(&self) -> bool {
        self.interest_rates.windows(2).all(|pair| pair[0] <= pair[1])
    }

    pub fn validate(&self) -> Result<()> {
        validate_rate("card_rate", self.card_rate)
            .map_err(|e| AppError::configuration(e.to_string()))?;

        if self.interest_rates.is_empty() {
            return Err(AppError::configuration(
                "fee schedule must define at least the 1x interest rate",
            ));
        }

        if self.interest_rates.len() > MAX_INSTALLMENTS as usize {
            return Err(AppError::configuration(format!(
                "fee schedule defines {} interest rates, at most {} allowed",
                self.interest_rates.len(),
                MAX_INSTALLMENTS
            )));
        }

        for (i, rate) in self.interest_rates.iter().enumerate() {
            validate_rate(&format!("interest rate for {}x", i + 1), *rate)
                .map_err(|e| AppError::configuration(e.to_string()))?;
        }

        Ok(())
    }
}
