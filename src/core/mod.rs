pub mod error;
pub mod money;

pub use error::{AppError, Result};
pub use money::{percent_to_rate, round_money};
