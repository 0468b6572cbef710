use async_trait::async_trait;

use crate::core::Result;
use crate::modules::checkout::models::{OrderRedirect, OrderSubmission};

/// Order-submission endpoint of the backend.
///
/// Receives the buyer's total exactly as priced and answers with the
/// payment processor URL the storefront should redirect to.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit_order(&self, submission: OrderSubmission) -> Result<OrderRedirect>;
}
