//! # Error Types
//!
//! Construction-time validation errors for the domain newtypes. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! The row functions in [`crate::normalize`] never produce these: they
//! are total, and encode invalid-shaped input as a sentinel value
//! instead of a failure.

use thiserror::Error;

/// Validation failure when constructing a domain newtype.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a well-formed CNPJ (wrong digit count, non-digit
    /// content, or misplaced punctuation).
    #[error("invalid CNPJ: {0:?}")]
    InvalidCnpj(String),
}
