use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{Money, Result};
use crate::modules::pricing::models::{
    validate_installment_count, CardCharge, FeeSchedule, InstallmentPlan, PaymentMethod,
    MAX_INSTALLMENTS,
};

/// Turns a base price into what the buyer is charged.
///
/// Every fee is rounded to cents on its own before being added, so the total
/// never carries sub-cent drift from the intermediate products.
#[derive(Debug, Clone)]
pub struct PricingCalculator {
    schedule: FeeSchedule,
}

impl PricingCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        Self { schedule }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// PIX carries no surcharge
    pub fn pix_total(&self, base_price: Money) -> Money {
        base_price
    }

    /// Itemized card charge
    ///
    /// # Arguments
    /// * `base_price` - Cart subtotal plus order bumps
    /// * `installments` - Number of installments, 1 to 12
    ///
    /// # Errors
    /// * `InvalidInstallmentCount` when `installments` is outside 1..=12
    /// * `InvalidInput` when the total exceeds `MAX_AMOUNT`
    /// * `Configuration` when the schedule has no rate for `installments`
    pub fn card_charge(&self, base_price: Money, installments: u32) -> Result<CardCharge> {
        validate_installment_count(installments)?;
        let interest_rate = self.schedule.interest_rate(installments)?;

        let base = base_price.amount();
        let processing_fee = Money::round_from(base * self.schedule.card_rate)?;
        let interest_fee = Money::round_from(base * interest_rate)?;
        let service_fee = self.schedule.fixed_service_fee;

        let total = Money::try_sum([base_price, processing_fee, interest_fee, service_fee])?;

        debug!(
            base_price = %base_price,
            installments,
            processing_fee = %processing_fee,
            interest_fee = %interest_fee,
            total = %total,
            "Computed card charge"
        );

        Ok(CardCharge {
            base_price,
            installments,
            processing_fee,
            interest_fee,
            service_fee,
            total,
        })
    }

    pub fn card_total(&self, base_price: Money, installments: u32) -> Result<Money> {
        Ok(self.card_charge(base_price, installments)?.total)
    }

    /// All twelve installment options for a base price.
    ///
    /// Each installment is `round(total / count)`; the last one is not
    /// adjusted, so `count * per_installment_amount` may differ from the total
    /// by a few cents.
    pub fn installment_options(&self, base_price: Money) -> Result<Vec<InstallmentPlan>> {
        (1..=MAX_INSTALLMENTS)
            .map(|count| self.installment_plan(base_price, count))
            .collect()
    }

    pub fn installment_plan(&self, base_price: Money, installments: u32) -> Result<InstallmentPlan> {
        let charge = self.card_charge(base_price, installments)?;
        let interest_rate = self.schedule.interest_rate(installments)?;
        let per_installment_amount =
            Money::round_from(charge.total.amount() / Decimal::from(installments))?;

        Ok(InstallmentPlan {
            installment_count: installments,
            interest_rate,
            per_installment_amount,
            total_amount: charge.total,
            interest_free: interest_rate.is_zero(),
        })
    }

    /// Total shown in the checkout summary.
    ///
    /// Card payments are summarized at a single installment; the buyer picks
    /// the final count at the payment processor.
    pub fn final_total(&self, base_price: Money, method: PaymentMethod) -> Result<Money> {
        match method {
            PaymentMethod::Pix => Ok(self.pix_total(base_price)),
            PaymentMethod::Card => self.card_total(base_price, 1),
        }
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(FeeSchedule::default())
    }
}
