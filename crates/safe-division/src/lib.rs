//! Division that reports a zero divisor instead of panicking.
//!
//! The crate exposes one generic operation, [`divide`], usable with every
//! signed integer width and both floating-point precisions through the sealed
//! [`Numeric`] trait. A divisor equal to the kind's zero value always yields
//! [`DivisionError::DivisionByZero`], including `0.0` and `-0.0` for floats.
//!
//! # Example
//!
//! ```
//! use safe_division::{DivisionError, divide};
//!
//! assert_eq!(divide(7_i32, 2), Ok(3));
//! assert_eq!(divide(7.0_f64, 2.0), Ok(3.5));
//! assert_eq!(divide(10_i64, 0), Err(DivisionError::DivisionByZero));
//! ```

pub mod demo;
mod divide;
mod error;
mod numeric;

pub use divide::divide;
pub use error::DivisionError;
pub use numeric::Numeric;
