//! Error types for fpbits

use thiserror::Error;

/// Codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FpBitsError {
    #[error("illegal hex digit {0:?}")]
    IllegalHexDigit(char),
}

pub type Result<T> = std::result::Result<T, FpBitsError>;
