//! Demonstration glue behind the `divide-demo` binary.
//!
//! The binary divides [`DEMO_DIVIDEND`] by [`DEMO_DIVISOR`] and prints a
//! single line. Rendering lives here so it can be exercised without spawning
//! a process.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::divide::divide;
use crate::error::DivisionError;
use crate::numeric::Numeric;

/// Dividend used by the demonstration binary.
pub const DEMO_DIVIDEND: i64 = 10;

/// Divisor used by the demonstration binary.
pub const DEMO_DIVISOR: i64 = 0;

/// Renders the outcome of a division as the line the demo prints.
///
/// # Examples
///
/// ```
/// use safe_division::DivisionError;
/// use safe_division::demo::render_outcome;
///
/// assert_eq!(render_outcome(Ok(5_i64)), "The result is: 5");
/// assert_eq!(
///     render_outcome::<i64>(Err(DivisionError::DivisionByZero)),
///     "Error: division by zero"
/// );
/// ```
#[must_use]
pub fn render_outcome<T>(outcome: Result<T, DivisionError>) -> String
where
    T: Numeric + fmt::Display,
{
    match outcome {
        Ok(quotient) => format!("The result is: {quotient}"),
        Err(err) => format!("Error: {err}"),
    }
}

/// Divides `dividend` by `divisor` and writes the rendered line to `out`.
///
/// A division error is reported in the output, not returned; only write
/// failures surface as errors.
///
/// # Errors
///
/// Returns any I/O error raised while writing to `out`.
///
/// # Examples
///
/// ```
/// use safe_division::demo::run;
///
/// let mut out = Vec::new();
/// run(&mut out, 10, 2).expect("write to buffer");
/// assert_eq!(out, b"The result is: 5\n");
/// ```
pub fn run<W: Write>(out: &mut W, dividend: i64, divisor: i64) -> io::Result<()> {
    let outcome = divide(dividend, divisor);
    match outcome {
        Ok(quotient) => debug!(dividend, divisor, quotient, "division succeeded"),
        Err(err) => debug!(dividend, divisor, error = %err, "division rejected"),
    }
    writeln!(out, "{}", render_outcome(outcome))
}
