pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::create_quote;
pub use models::{CheckoutQuote, OrderRedirect, OrderSubmission};
pub use services::CheckoutService;
