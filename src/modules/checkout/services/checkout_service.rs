use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::PricingConfig;
use crate::core::traits::{CommissionLedger, OrderGateway};
use crate::core::{AppError, Money, Result};
use crate::modules::checkout::models::{CheckoutQuote, OrderRedirect, OrderSubmission};
use crate::modules::commissions::models::{CommissionRecord, CommissionStatus};
use crate::modules::commissions::services::CommissionCalculator;
use crate::modules::pricing::models::{CartSnapshot, PaymentMethod};
use crate::modules::pricing::services::PricingCalculator;

/// Glue between the storefront cart, the calculators and the backend.
///
/// Holds only read-only configuration, so one instance can serve any number
/// of concurrent checkouts.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    pricing: PricingCalculator,
    platform_rate: Decimal,
}

impl CheckoutService {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            pricing: PricingCalculator::new(config.fee_schedule),
            platform_rate: config.platform_rate,
        }
    }

    pub fn pricing(&self) -> &PricingCalculator {
        &self.pricing
    }

    pub fn platform_rate(&self) -> Decimal {
        self.platform_rate
    }

    /// Price a cart for the chosen payment method
    ///
    /// # Errors
    /// * `EmptyCart` when the cart is empty
    /// * `InvalidInput` when the cart or card total exceeds `MAX_AMOUNT`
    pub fn quote(&self, cart: &CartSnapshot, method: PaymentMethod) -> Result<CheckoutQuote> {
        if cart.is_empty() {
            return Err(AppError::EmptyCart);
        }

        let base_price = cart.base_price()?;
        let total = self.pricing.final_total(base_price, method)?;

        let (card, installment_options) = match method {
            PaymentMethod::Pix => (None, Vec::new()),
            PaymentMethod::Card => (
                Some(self.pricing.card_charge(base_price, 1)?),
                self.pricing.installment_options(base_price)?,
            ),
        };

        Ok(CheckoutQuote {
            base_price,
            payment_method: method,
            total,
            card,
            installment_options,
        })
    }

    /// Create the order with the backend, passing the priced total unchanged
    pub async fn submit(
        &self,
        cart: &CartSnapshot,
        method: PaymentMethod,
        gateway: &dyn OrderGateway,
    ) -> Result<OrderRedirect> {
        let quote = self.quote(cart, method)?;

        let submission = OrderSubmission {
            cart: *cart,
            payment_method: method,
            total: quote.total,
        };

        let redirect = gateway.submit_order(submission).await?;

        info!(
            order_id = %redirect.order_id,
            payment_method = %method,
            total = %quote.total,
            "Order submitted"
        );

        Ok(redirect)
    }

    /// Record the commission for a confirmed sale.
    ///
    /// `gross_amount` is the product price, never the buyer's card total.
    pub async fn settle(
        &self,
        order_id: &str,
        gross_amount: Money,
        ledger: &dyn CommissionLedger,
    ) -> Result<CommissionRecord> {
        let split = CommissionCalculator::split(gross_amount, self.platform_rate)?;
        let record = CommissionRecord::new(order_id, split)?;

        let stored = ledger.record(record).await?;

        info!(
            commission_id = %stored.id,
            order_id = %stored.order_id,
            platform_fee = %stored.split.platform_fee,
            producer_amount = %stored.split.producer_amount,
            "Commission recorded"
        );

        Ok(stored)
    }

    /// Move a recorded commission along the payout flow
    pub async fn advance_commission(
        &self,
        commission_id: &str,
        next: CommissionStatus,
        ledger: &dyn CommissionLedger,
    ) -> Result<CommissionRecord> {
        let mut record = ledger.find_by_id(commission_id).await?.ok_or_else(|| {
            AppError::validation(format!("commission {} not found", commission_id))
        })?;

        if let Err(e) = record.transition(next) {
            warn!(
                commission_id,
                from = %record.status,
                to = %next,
                "Rejected commission status change"
            );
            return Err(e);
        }

        ledger.update_status(commission_id, next).await
    }
}
