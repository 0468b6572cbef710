//! Vitrine checkout pricing engine
//!
//! Prices storefront carts (PIX or card, 1 to 12 installments) and splits
//! confirmed sales between the platform and the producer. All amounts are
//! exact decimals rounded to cents.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::checkout;
pub use modules::commissions;
pub use modules::pricing;
