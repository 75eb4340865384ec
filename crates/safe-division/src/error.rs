//! Error type for the division operation.

use thiserror::Error;

/// Errors returned by [`divide`](crate::divide).
///
/// Division by zero is the only failure the operation can report; integer
/// overflow on `MIN / -1` wraps instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DivisionError {
    /// The divisor equalled the zero value of its numeric kind.
    #[error("division by zero")]
    DivisionByZero,
}
