use serde::{Deserialize, Serialize};

use crate::core::Money;
use crate::modules::pricing::models::{CartSnapshot, PaymentMethod};

/// What the storefront sends to the backend order endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub cart: CartSnapshot,
    pub payment_method: PaymentMethod,
    pub total: Money,
}

/// Backend answer: the created order and where the buyer pays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRedirect {
    pub order_id: String,
    pub redirect_url: String,
}
