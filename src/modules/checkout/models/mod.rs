pub mod checkout_quote;
pub mod order;

pub use checkout_quote::CheckoutQuote;
pub use order::{OrderRedirect, OrderSubmission};
