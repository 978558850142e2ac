//! Error types for peripheral setup

use thiserror::Error;

/// Animation bank construction errors
#[derive(Debug, Error, Eq, PartialEq)]
pub enum BankError {
    /// More animations than there are phases
    #[error("{len} animation slots given, at most {max} allowed")]
    TooManySlots { len: usize, max: usize },
}

/// Result type for animation bank operations
pub type BankResult<T> = Result<T, BankError>;
