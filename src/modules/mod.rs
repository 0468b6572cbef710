pub mod checkout;
pub mod commissions;
pub mod health;
pub mod pricing;

use actix_web::web;

use crate::middleware::json_error_handler;

/// Registers every HTTP route; shared by the binary and the contract tests
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/v1")
                .route(
                    "/pricing/fee-schedule",
                    web::get().to(pricing::get_fee_schedule),
                )
                .route(
                    "/pricing/installments",
                    web::post().to(pricing::get_installment_options),
                )
                .route("/pricing/quote", web::post().to(checkout::create_quote))
                .route(
                    "/commissions/split",
                    web::post().to(commissions::split_commission),
                ),
        );
}
