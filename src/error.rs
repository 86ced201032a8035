use std::fmt;

use thiserror::Error;

/// Which of the two inputs a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    First,
    Second,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Argument::First => write!(f, "First"),
            Argument::Second => write!(f, "Second"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevenshteinError {
    /// An input arriving as untyped data was not a string.
    #[error("{argument} argument is not a string (found {found})")]
    TypeMismatch { argument: Argument, found: String },

    /// Ratio requested for two empty sequences, i.e. 0/0.
    #[error("ratio is undefined for two empty sequences")]
    DivisionUndefined,
}

pub type Result<T> = std::result::Result<T, LevenshteinError>;
