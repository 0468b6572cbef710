pub mod error;
pub mod money;
pub mod traits;

pub use error::{AppError, Result};
pub use money::{round_money, validate_rate, Money, MAX_AMOUNT};
