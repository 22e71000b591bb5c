//! Error types for record mapping.

use thiserror::Error;

/// Fatal parse failures. Everything else in the engine degrades to absent;
/// an error here aborts mapping of the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A non-blank date string matched neither accepted format.
    #[error("invalid date format: {0}")]
    InvalidDate(String),
    /// A currency string's numeric remainder failed decimal parsing.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
