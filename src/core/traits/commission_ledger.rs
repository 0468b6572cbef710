use async_trait::async_trait;

use crate::core::Result;
use crate::modules::commissions::models::{CommissionRecord, CommissionStatus};

/// Backend ledger that persists commission splits once a sale is confirmed.
///
/// The ledger stores what it is given; the split itself is always computed
/// by `CommissionCalculator` before reaching this trait.
#[async_trait]
pub trait CommissionLedger: Send + Sync {
    /// Persist a freshly computed commission (status `Pending`)
    async fn record(&self, record: CommissionRecord) -> Result<CommissionRecord>;

    /// Find a commission by its ledger ID
    async fn find_by_id(&self, id: &str) -> Result<Option<CommissionRecord>>;

    /// Persist a status change already validated by `CommissionRecord::transition`
    async fn update_status(&self, id: &str, status: CommissionStatus) -> Result<CommissionRecord>;
}
