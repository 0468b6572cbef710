pub mod health_controller;

pub use health_controller::health_check;
