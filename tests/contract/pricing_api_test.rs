// Contract tests for the pricing endpoints
//
// - POST /v1/pricing/quote
// - POST /v1/pricing/installments
// - GET /v1/pricing/fee-schedule

use actix_web::{test, web, App};
use serde_json::{json, Value};
use vitrine::config::PricingConfig;
use vitrine::modules::{checkout::CheckoutService, configure_routes};

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(CheckoutService::new(PricingConfig::default())))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_pix_quote_with_order_bump() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/v1/pricing/quote")
        .set_json(json!({
            "subtotal": "49.90",
            "order_bump_total": "19.90",
            "payment_method": "PIX"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["base_price"], "69.80");
    assert_eq!(body["total"], "69.80");
    assert_eq!(body["payment_method"], "PIX");
    assert!(body.get("card").is_none());
    assert_eq!(body["installment_options"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_card_quote() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/v1/pricing/quote")
        .set_json(json!({ "subtotal": "100.00", "payment_method": "CARD" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], "105.99");
    assert_eq!(body["card"]["processing_fee"], "4.99");
    assert_eq!(body["card"]["service_fee"], "1.00");

    let options = body["installment_options"].as_array().unwrap();
    assert_eq!(options.len(), 12);
    assert_eq!(options[11]["total_amount"], "123.27");
    assert_eq!(options[11]["per_installment_amount"], "10.27");
    assert_eq!(options[0]["interest_free"], true);
}

#[actix_web::test]
async fn test_empty_cart_quote_is_rejected() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/v1/pricing/quote")
        .set_json(json!({ "subtotal": "0.00", "payment_method": "PIX" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["user_message"], "carrinho vazio");
}

#[actix_web::test]
async fn test_negative_subtotal_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/v1/pricing/quote")
        .set_json(json!({ "subtotal": "-10.00", "payment_method": "PIX" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_unknown_payment_method_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/v1/pricing/quote")
        .set_json(json!({ "subtotal": "10.00", "payment_method": "BOLETO" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_payment_method_is_case_insensitive() {
    let app = init_app!();

    for (method, expected) in [("pix", "PIX"), ("card", "CARD"), ("CREDIT_CARD", "CARD")] {
        let req = test::TestRequest::post()
            .uri("/v1/pricing/quote")
            .set_json(json!({ "subtotal": "10.00", "payment_method": method }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200, "method {}", method);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["payment_method"], expected);
    }
}

#[actix_web::test]
async fn test_quote_above_maximum_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/v1/pricing/quote")
        .set_json(json!({
            "subtotal": "1000000000000.00",
            "order_bump_total": "1000000000000.00",
            "payment_method": "PIX"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["user_message"], "valor inválido");
}

#[actix_web::test]
async fn test_installments_above_maximum_are_bad_request() {
    let app = init_app!();

    for base_price in ["79228162514264337593543950335", "1000000000000.00"] {
        let req = test::TestRequest::post()
            .uri("/v1/pricing/installments")
            .set_json(json!({ "base_price": base_price }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "base price {}", base_price);
    }
}

#[actix_web::test]
async fn test_installment_options() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/v1/pricing/installments")
        .set_json(json!({ "base_price": "100.00" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let installments = body["installments"].as_array().unwrap();
    assert_eq!(installments.len(), 12);

    for (i, plan) in installments.iter().enumerate() {
        assert_eq!(plan["installment_count"], i as u64 + 1);
        assert!(plan.get("per_installment_amount").is_some());
        assert!(plan.get("interest_rate").is_some());
    }
}

#[actix_web::test]
async fn test_short_schedule_is_server_error() {
    let mut config = PricingConfig::default();
    config.fee_schedule.interest_rates.truncate(6);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(CheckoutService::new(config)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/pricing/installments")
        .set_json(json!({ "base_price": "100.00" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["user_message"], "erro de configuração");
}

#[actix_web::test]
async fn test_fee_schedule() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/v1/pricing/fee-schedule")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["fee_schedule"]["card_rate"], "0.0499");
    assert_eq!(body["fee_schedule"]["fixed_service_fee"], "1.00");
    assert_eq!(
        body["fee_schedule"]["interest_rates"].as_array().unwrap().len(),
        12
    );
    assert_eq!(body["platform_rate"], "0.03");
}
