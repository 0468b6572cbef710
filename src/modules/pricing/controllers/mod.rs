pub mod pricing_controller;

pub use pricing_controller::{get_fee_schedule, get_installment_options};
