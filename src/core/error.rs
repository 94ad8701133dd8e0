//! Error types for the payoff analyser

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayoffError {
    #[error("Invalid input for {field}: {value:?} is not a floating point number")]
    InvalidInputFormat { field: &'static str, value: String },
}

pub type PayoffResult<T> = Result<T, PayoffError>;

impl PayoffError {
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInputFormat {
            field,
            value: value.into(),
        }
    }

    /// Name of the field that failed to parse
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidInputFormat { field, .. } => field,
        }
    }
}
