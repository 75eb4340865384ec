//! Error types for the profile records.
//!
//! Errors raised by the typegen flow live in
//! [`typegen_cli`](crate::typegen_cli) next to the code that produces them.

use thiserror::Error;

/// Errors that can occur when constructing or parsing a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The record JSON is malformed or missing required fields.
    #[error("invalid record JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// A gender code outside the allowed set was supplied.
    #[error("invalid gender code {value}: expected 0 or 1")]
    InvalidGenderCode {
        /// The rejected code.
        value: u8,
    },
}
