pub mod calculator;
pub mod formulas;

pub use crate::domain::model::{DownPaymentShare, DownPaymentSplit, MortgageBreakdown};
pub use crate::utils::error::Result;
