//! Fixed-point error types

use thiserror::Error;

/// Failure to parse a decimal string into a fixed-point value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFixedError {
    #[error("cannot parse fixed-point value from empty string")]
    Empty,

    #[error("invalid digit at byte {position}")]
    InvalidDigit { position: usize },

    #[error("value out of range for the fixed-point type")]
    OutOfRange,
}

pub type Result<T> = core::result::Result<T, ParseFixedError>;
