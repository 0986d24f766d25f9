//! Sample validation.
//!
//! Checks are ordered from cheap to expensive and stop at the first
//! violation.  Nothing here sorts or transforms data.

use akima_core::{
    errors::{Error, Result},
    Real, Size,
};

/// Minimum number of samples any interpolation needs.
pub const MIN_POINTS: Size = 2;

/// Validate raw sample arrays.
///
/// # Errors
/// - `Error::LengthMismatch` if `xs` and `ys` differ in length.
/// - `Error::InsufficientPoints` if fewer than [`MIN_POINTS`] samples are given.
/// - `Error::NonFinite` if any value is NaN or infinite.
pub fn validate_samples(xs: &[Real], ys: &[Real]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    if xs.len() < MIN_POINTS {
        return Err(Error::InsufficientPoints {
            got: xs.len(),
            min: MIN_POINTS,
        });
    }
    for (index, (x, y)) in xs.iter().zip(ys).enumerate() {
        if !x.is_finite() {
            return Err(Error::NonFinite { what: "x", index });
        }
        if !y.is_finite() {
            return Err(Error::NonFinite { what: "y", index });
        }
    }
    Ok(())
}

/// Validate an exact sample count for a fixed-arity entry point.
///
/// # Errors
/// Returns `Error::FixedArity` naming whichever array has the wrong length.
pub fn validate_arity(xs: &[Real], ys: &[Real], expected: Size) -> Result<()> {
    for got in [xs.len(), ys.len()] {
        if got != expected {
            return Err(Error::FixedArity { expected, got });
        }
    }
    Ok(())
}

/// Verify that `xs` never decreases.
///
/// # Errors
/// Returns `Error::Unsorted` at the first descending step.
pub fn ensure_ascending(xs: &[Real]) -> Result<()> {
    match xs.windows(2).position(|w| w[1] < w[0]) {
        Some(i) => Err(Error::Unsorted { index: i + 1 }),
        None => Ok(()),
    }
}

/// Reject repeated abscissae in sorted `xs`.
///
/// # Errors
/// Returns `Error::DegenerateInput` carrying the first repeated value.
pub fn reject_duplicates(xs: &[Real]) -> Result<()> {
    match xs.windows(2).find(|w| w[0] == w[1]) {
        Some(w) => Err(Error::DegenerateInput { x: w[0] }),
        None => Ok(()),
    }
}

/// Reject a NaN or infinite query abscissa.
///
/// # Errors
/// Returns `Error::NonFinite` with `what = "query"`.
pub fn validate_query(x: Real) -> Result<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite {
            what: "query",
            index: 0,
        })
    }
}
