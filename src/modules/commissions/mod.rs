pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::split_commission;
pub use models::{CommissionRecord, CommissionSplit, CommissionStatus};
pub use services::CommissionCalculator;
