use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Money;

/// Platform/producer split of a sale.
///
/// `platform_fee + producer_amount == gross_amount` holds for every value
/// built by `CommissionCalculator::split`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSplit {
    pub gross_amount: Money,
    pub platform_rate: Decimal,
    pub platform_fee: Money,
    pub producer_amount: Money,
}
