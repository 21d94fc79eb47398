//! Error types for the outer edges of the crate
//!
//! The calculators themselves are total and report problems as value-level
//! markers. `Error` only appears where raw text, files or configuration
//! enter the crate.

use std::io;
use thiserror::Error;

/// Result type alias for parsing and configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning raw input into typed values
#[derive(Debug, Error)]
pub enum Error {
    /// Raw text could not be read as a number
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Unit selector not one of bit/nat/dit (strict parsing only)
    #[error("unknown unit: {0:?} (expected bit, nat or dit)")]
    UnknownUnit(String),

    /// A distribution needs at least one outcome
    #[error("distribution has no outcomes")]
    EmptyDistribution,

    /// Configuration value out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_number() {
        let err = Error::InvalidNumber("abc".to_string());
        let msg = err.to_string();
        assert!(msg.contains("invalid number"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn test_error_display_unknown_unit() {
        let msg = Error::UnknownUnit("hartley".to_string()).to_string();
        assert!(msg.contains("hartley"));
        assert!(msg.contains("bit, nat or dit"));
    }

    #[test]
    fn test_error_from_io() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
