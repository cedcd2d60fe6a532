// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid base64: {0}")]
    Format(#[from] base64::DecodeError),

    #[error("{what} length mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unsupported {what} size: {bits} bits")]
    UnsupportedSize { what: &'static str, bits: usize },

    #[error("cipher transform failed: {0}")]
    Transform(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
