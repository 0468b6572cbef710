use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::commissions::models::CommissionSplit;

/// Commission payout status as tracked by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommissionStatus {
    /// Recorded, awaiting payout
    Pending,
    /// Payout started
    Processing,
    /// Producer has been paid
    Paid,
    /// Payout failed
    Failed,
}

impl CommissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Paid => "PAID",
            Self::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Failed)
    }

    /// PENDING -> PROCESSING -> PAID, with FAILED reachable from either open state
    pub fn can_transition_to(&self, next: CommissionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Processing)
                | (Self::Pending, Self::Failed)
                | (Self::Processing, Self::Paid)
                | (Self::Processing, Self::Failed)
        )
    }
}

impl std::fmt::Display for CommissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CommissionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "PROCESSING" => Ok(Self::Processing),
            "PAID" => Ok(Self::Paid),
            "FAILED" => Ok(Self::Failed),
            _ => Err(AppError::invalid_input(format!(
                "invalid commission status: {}",
                s
            ))),
        }
    }
}

/// A split handed to the commission ledger for one confirmed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRecord {
    pub id: String,
    pub order_id: String,
    pub split: CommissionSplit,
    pub status: CommissionStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl CommissionRecord {
    pub fn new(order_id: impl Into<String>, split: CommissionSplit) -> Result<Self> {
        let order_id = order_id.into();
        if order_id.trim().is_empty() {
            return Err(AppError::invalid_input("order id cannot be empty"));
        }

        let now = chrono::Utc::now().naive_utc();

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            order_id,
            split,
            status: CommissionStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Move to `next`, refusing moves the payout flow does not allow
    pub fn transition(&mut self, next: CommissionStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(AppError::validation(format!(
                "commission {} cannot move from {} to {}",
                self.id, self.status, next
            )));
        }

        self.status = next;
        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(())
    }
}
