// HTTP handlers for pricing endpoints
//
// Endpoints:
// - GET /v1/pricing/fee-schedule - Active card fee schedule and platform rate
// - POST /v1/pricing/installments - Twelve installment options for a base price

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Money, Result};
use crate::modules::checkout::services::CheckoutService;
use crate::modules::pricing::models::{FeeSchedule, InstallmentPlan};

/// Response for GET /v1/pricing/fee-schedule
#[derive(Debug, Serialize, Deserialize)]
pub struct FeeScheduleResponse {
    pub fee_schedule: FeeSchedule,
    pub platform_rate: Decimal,
}

/// Request for POST /v1/pricing/installments
#[derive(Debug, Deserialize)]
pub struct InstallmentOptionsRequest {
    pub base_price: Money,
}

/// Response for POST /v1/pricing/installments
#[derive(Debug, Serialize, Deserialize)]
pub struct InstallmentOptionsResponse {
    pub base_price: Money,
    pub installments: Vec<InstallmentPlan>,
}

/// GET /v1/pricing/fee-schedule
pub async fn get_fee_schedule(service: web::Data<CheckoutService>) -> HttpResponse {
    HttpResponse::Ok().json(FeeScheduleResponse {
        fee_schedule: service.pricing().schedule().clone(),
        platform_rate: service.platform_rate(),
    })
}

/// POST /v1/pricing/installments
///
/// # Request Body
/// ```json
/// { "base_price": "100.00" }
/// ```
///
/// # Returns
/// - 200: Exactly twelve plans, 1x to 12x
/// - 400: Negative or sub-cent base price
/// - 500: Fee schedule does not cover all twelve counts
pub async fn get_installment_options(
    request: web::Json<InstallmentOptionsRequest>,
    service: web::Data<CheckoutService>,
) -> Result<HttpResponse> {
    let base_price = request.base_price;
    let installments = service.pricing().installment_options(base_price)?;

    Ok(HttpResponse::Ok().json(InstallmentOptionsResponse {
        base_price,
        installments,
    }))
}
