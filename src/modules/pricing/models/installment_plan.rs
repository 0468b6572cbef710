use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Money, Result};

/// One row of the installment table shown before the buyer pays by card.
///
/// Derived on demand from a base price; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub installment_count: u32,
    pub interest_rate: Decimal,
    /// `round(total_amount / installment_count)`; every installment is equal
    pub per_installment_amount: Money,
    pub total_amount: Money,
    /// No interest for this count ("sem juros")
    pub interest_free: bool,
}

/// Itemized card charge for a base price and installment count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCharge {
    pub base_price: Money,
    pub installments: u32,
    pub processing_fee: Money,
    pub interest_fee: Money,
    pub service_fee: Money,
    pub total: Money,
}

impl CardCharge {
    /// Everything the buyer pays on top of the base price
    pub fn surcharge(&self) -> Result<Money> {
        Money::try_sum([self.processing_fee, self.interest_fee, self.service_fee])
    }
}
