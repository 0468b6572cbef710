pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::{get_fee_schedule, get_installment_options};
pub use models::{CardCharge, CartLine, CartSnapshot, FeeSchedule, InstallmentPlan, PaymentMethod};
pub use services::PricingCalculator;
