pub mod commission_calculator;

pub use commission_calculator::{CommissionCalculator, DEFAULT_PLATFORM_RATE};
