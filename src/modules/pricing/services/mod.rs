pub mod pricing_calculator;

pub use pricing_calculator::PricingCalculator;
