pub mod commission_controller;

pub use commission_controller::split_commission;
