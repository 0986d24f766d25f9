//! Error types for akima-rs.
//!
//! Every failure the interpolation engine can report is a variant of a single
//! `thiserror`-derived enum.  Generic preconditions go through the `ensure!`
//! convenience macro defined here.

use thiserror::Error;

use crate::{Real, Size};

/// The top-level error type used throughout akima-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Fewer samples than the interpolation needs.
    #[error("insufficient points: got {got}, need at least {min}")]
    InsufficientPoints {
        /// Number of samples supplied.
        got: Size,
        /// Minimum number of samples required.
        min: Size,
    },

    /// The abscissa and ordinate arrays differ in length.
    #[error("length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch {
        /// Length of the x array.
        x_len: Size,
        /// Length of the y array.
        y_len: Size,
    },

    /// A fixed-arity entry point received the wrong number of samples.
    #[error("expected exactly {expected} points, got {got}")]
    FixedArity {
        /// Required sample count.
        expected: Size,
        /// Supplied sample count.
        got: Size,
    },

    /// Two samples share an abscissa, so a slope or segment width is undefined.
    #[error("degenerate input: duplicate abscissa x = {x}")]
    DegenerateInput {
        /// The repeated abscissa.
        x: Real,
    },

    /// Data promised to be sorted was not ascending.
    #[error("abscissae not sorted: x[{index}] is smaller than its predecessor")]
    Unsorted {
        /// Position of the first out-of-order abscissa.
        index: Size,
    },

    /// A NaN or infinite value was supplied.
    #[error("non-finite {what} at index {index}")]
    NonFinite {
        /// Which input held the value (`"x"`, `"y"` or `"query"`).
        what: &'static str,
        /// Position of the value in its input.
        index: Size,
    },

    /// The interpolant is not representable in floating point at `x`, e.g.
    /// because a secant or segment coefficient overflows.
    #[error("interpolant overflows at x = {x}")]
    Overflow {
        /// The abscissa at which evaluation overflowed.
        x: Real,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: Size,
        /// The size of the container.
        size: Size,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout akima-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use akima_core::{ensure, errors::Error};
/// fn positive(x: f64) -> akima_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = Error::LengthMismatch { x_len: 3, y_len: 2 };
        assert_eq!(e.to_string(), "length mismatch: x has 3 values, y has 2");

        let e = Error::DegenerateInput { x: 1.0 };
        assert_eq!(e.to_string(), "degenerate input: duplicate abscissa x = 1");

        let e = Error::FixedArity { expected: 4, got: 5 };
        assert_eq!(e.to_string(), "expected exactly 4 points, got 5");

        let e = Error::Overflow { x: 0.5 };
        assert_eq!(e.to_string(), "interpolant overflows at x = 0.5");
    }

    #[test]
    fn ensure_macro_short_circuits() {
        fn check(n: usize) -> Result<usize> {
            crate::ensure!(n > 0, "capacity must be positive");
            Ok(n)
        }
        assert_eq!(check(3), Ok(3));
        assert_eq!(
            check(0),
            Err(Error::Precondition("capacity must be positive".into()))
        );
    }
}
