pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::calculator::MortgageCalculator;
pub use crate::domain::model::{DownPaymentShare, DownPaymentSplit, MortgageBreakdown};
pub use crate::utils::error::{MortgageError, Result};
