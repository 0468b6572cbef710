// HTTP handlers for checkout endpoints
//
// Endpoints:
// - POST /v1/pricing/quote - Checkout summary for a cart and payment method

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::core::{Money, Result};
use crate::middleware::request_id_of;
use crate::modules::checkout::services::CheckoutService;
use crate::modules::pricing::models::{CartSnapshot, PaymentMethod};

/// Request for POST /v1/pricing/quote
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub subtotal: Money,
    #[serde(default)]
    pub order_bump_total: Money,
    pub payment_method: PaymentMethod,
}

/// POST /v1/pricing/quote
///
/// # Request Body
/// ```json
/// { "subtotal": "49.90", "order_bump_total": "19.90", "payment_method": "PIX" }
/// ```
///
/// # Returns
/// - 200: `CheckoutQuote`
/// - 400: Invalid amount or payment method, or empty cart
pub async fn create_quote(
    req: HttpRequest,
    request: web::Json<QuoteRequest>,
    service: web::Data<CheckoutService>,
) -> Result<HttpResponse> {
    let span = tracing::info_span!("create_quote", request_id = %request_id_of(&req));
    let _guard = span.enter();

    let cart = CartSnapshot::new(request.subtotal, request.order_bump_total);
    let quote = service.quote(&cart, request.payment_method)?;

    info!(
        payment_method = %quote.payment_method,
        total = %quote.total,
        "Quote created"
    );

    Ok(HttpResponse::Ok().json(quote))
}
