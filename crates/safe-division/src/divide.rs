//! The generic division operation.

use crate::error::DivisionError;
use crate::numeric::Numeric;

/// Divides `dividend` by `divisor`, rejecting a zero divisor.
///
/// Integer kinds truncate toward zero. Float kinds follow IEEE-754 for every
/// non-zero divisor, but `0.0` and `-0.0` are rejected like integer zero
/// rather than producing an infinity or NaN. The dividend is never inspected
/// when the divisor is zero.
///
/// Callers that want the kind's zero value on failure can use
/// `unwrap_or(T::ZERO)`.
///
/// # Errors
///
/// Returns [`DivisionError::DivisionByZero`] when `divisor` equals
/// [`Numeric::ZERO`].
///
/// # Examples
///
/// ```
/// use safe_division::{DivisionError, Numeric, divide};
///
/// assert_eq!(divide(-7_i8, 2), Ok(-3));
/// assert_eq!(divide(1.0_f32, -0.0), Err(DivisionError::DivisionByZero));
/// assert_eq!(divide(10_i64, 0).unwrap_or(i64::ZERO), 0);
/// ```
pub fn divide<T: Numeric>(dividend: T, divisor: T) -> Result<T, DivisionError> {
    if divisor == T::ZERO {
        return Err(DivisionError::DivisionByZero);
    }
    Ok(dividend.quotient(divisor))
}
