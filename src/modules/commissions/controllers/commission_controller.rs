// HTTP handlers for commission endpoints
//
// Endpoints:
// - POST /v1/commissions/split - Platform/producer split of a sale

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::{Money, Result};
use crate::modules::checkout::services::CheckoutService;
use crate::modules::commissions::services::CommissionCalculator;

/// Request for POST /v1/commissions/split
#[derive(Debug, Deserialize)]
pub struct SplitRequest {
    pub gross_amount: Money,
    /// Defaults to the configured platform rate
    pub platform_rate: Option<Decimal>,
}

/// POST /v1/commissions/split
///
/// # Returns
/// - 200: `CommissionSplit`
/// - 400: Negative amount or rate outside [0, 1]
pub async fn split_commission(
    request: web::Json<SplitRequest>,
    service: web::Data<CheckoutService>,
) -> Result<HttpResponse> {
    let rate = request.platform_rate.unwrap_or_else(|| service.platform_rate());
    let split = CommissionCalculator::split(request.gross_amount, rate)?;

    Ok(HttpResponse::Ok().json(split))
}
