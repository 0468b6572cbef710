use serde::{Deserialize, Serialize};

use crate::core::Money;
use crate::modules::pricing::models::{CardCharge, InstallmentPlan, PaymentMethod};

/// Checkout summary for a non-empty cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutQuote {
    pub base_price: Money,
    pub payment_method: PaymentMethod,
    /// Amount sent with the order (single-installment total for cards)
    pub total: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardCharge>,
    /// Empty for PIX
    pub installment_options: Vec<InstallmentPlan>,
}
