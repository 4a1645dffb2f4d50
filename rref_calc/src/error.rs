use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    /// Ragged rows, or a matrix without any row or column.
    #[error("invalid matrix shape: {0}")]
    InvalidShape(String),

    #[error("invalid fraction: denominator cannot be zero")]
    InvalidFraction,

    #[error("fraction arithmetic overflowed")]
    FractionOverflow,

    /// A text cell that is not a number. Positions are 1-based.
    #[error("invalid entry at row {row}, column {column}: {token:?} is not a number")]
    InvalidEntry {
        row: usize,
        column: usize,
        token: String,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type CalcResult<T> = Result<T, CalcError>;
