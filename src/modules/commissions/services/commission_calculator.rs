use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{validate_rate, AppError, Money, Result};
use crate::modules::commissions::models::CommissionSplit;

/// Current platform commission (3% of each sale)
pub const DEFAULT_PLATFORM_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Splits a sale between the platform and the producer
pub struct CommissionCalculator;

impl CommissionCalculator {
    /// Compute the platform fee and producer payout for a sale.
    ///
    /// The fee is rounded to cents; the producer receives the exact remainder,
    /// so no cent is lost or created by the split.
    ///
    /// # Arguments
    /// * `gross_amount` - Product price of the sale (card surcharges excluded)
    /// * `platform_rate` - Commission rate in [0, 1]
    pub fn split(gross_amount: Money, platform_rate: Decimal) -> Result<CommissionSplit> {
        validate_rate("platform_rate", platform_rate)?;

        let platform_fee = Money::round_from(gross_amount.amount() * platform_rate)?;
        let producer_amount = gross_amount.checked_sub(platform_fee).ok_or_else(|| {
            AppError::internal(format!(
                "platform fee {} exceeds gross amount {}",
                platform_fee, gross_amount
            ))
        })?;

        debug!(
            gross_amount = %gross_amount,
            platform_rate = %platform_rate,
            platform_fee = %platform_fee,
            producer_amount = %producer_amount,
            "Computed commission split"
        );

        Ok(CommissionSplit {
            gross_amount,
            platform_rate,
            platform_fee,
            producer_amount,
        })
    }
}
