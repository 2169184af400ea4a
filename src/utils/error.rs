use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },
}

impl MortgageError {
    /// Name of the input that failed validation.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidArgument { field, .. } => field,
        }
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;
