use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::AppError;

/// How the buyer pays at checkout
///
/// Serialized as `PIX` / `CARD`; deserialized through `FromStr`, so any case
/// and the `CREDIT_CARD` alias are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum PaymentMethod {
    /// Instant interbank transfer, no surcharge
    Pix,
    /// Credit card, subject to processing fee and installment interest
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Card => "CARD",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PIX" => Ok(Self::Pix),
            "CARD" | "CREDIT_CARD" => Ok(Self::Card),
            _ => Err(AppError::UnknownPaymentMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for PaymentMethod {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
