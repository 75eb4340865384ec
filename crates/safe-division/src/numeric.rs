//! Numeric kinds accepted by [`divide`](crate::divide).
//!
//! The set is closed: signed integers of every width plus `f32` and `f64`.
//! Downstream crates can name [`Numeric`] in bounds but cannot implement it.

use std::fmt;

pub(crate) mod sealed {
    /// Kind-specific quotient, only reachable from inside the crate.
    pub trait Sealed {
        /// Divides `self` by a divisor already known to be non-zero.
        fn quotient(self, divisor: Self) -> Self;
    }
}

/// A numeric kind supported by [`divide`](crate::divide).
///
/// # Example
///
/// ```
/// use safe_division::Numeric;
///
/// fn zero_of<T: Numeric>() -> T {
///     T::ZERO
/// }
///
/// assert_eq!(zero_of::<i16>(), 0);
/// assert_eq!(zero_of::<f32>(), 0.0);
/// ```
pub trait Numeric: sealed::Sealed + Copy + PartialEq + fmt::Debug {
    /// The zero value of the kind.
    const ZERO: Self;
}

macro_rules! impl_signed_integer {
    ($($kind:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $kind {
                fn quotient(self, divisor: Self) -> Self {
                    // Truncates toward zero; `MIN / -1` wraps back to `MIN`.
                    self.wrapping_div(divisor)
                }
            }

            impl Numeric for $kind {
                const ZERO: Self = 0;
            }
        )+
    };
}

impl_signed_integer!(i8, i16, i32, i64, isize);

impl sealed::Sealed for f32 {
    #[expect(
        clippy::float_arithmetic,
        reason = "floating-point quotient is the operation being provided"
    )]
    fn quotient(self, divisor: Self) -> Self {
        self / divisor
    }
}

impl Numeric for f32 {
    const ZERO: Self = 0.0;
}

impl sealed::Sealed for f64 {
    #[expect(
        clippy::float_arithmetic,
        reason = "floating-point quotient is the operation being provided"
    )]
    fn quotient(self, divisor: Self) -> Self {
        self / divisor
    }
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
}
