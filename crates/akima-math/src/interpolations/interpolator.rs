//! Arity-gated entry points.
//!
//! Every entry point validates its sample count, prepares (or fetches from a
//! [`TangentCache`]) one [`AkimaSpline`], and evaluates it.  The fixed-four,
//! general and cached variants differ only in the gate and in where the
//! prepared spline comes from.
//!
//! ```
//! use akima_math::interpolations::{interpolate_fixed_four, interpolate_n};
//!
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [0.0, 1.0, 4.0, 9.0];
//! let v = interpolate_fixed_four(&x, &y, 1.5).unwrap();
//! assert!(v > 1.0 && v < 4.0);
//! assert_eq!(interpolate_n(&x, &y, 1.0).unwrap(), 1.0);
//! ```

use std::sync::Arc;

use akima_core::{errors::Result, settings::Settings, Real, Size};

use super::{
    akima::AkimaSpline,
    cache::TangentCache,
    validation::{validate_arity, validate_samples},
    Interpolation1D,
};

/// Sample count accepted by the fixed-four entry points.
pub const FIXED_ARITY: Size = 4;

#[derive(Debug, Clone, Copy)]
enum Arity {
    Exactly(Size),
    Any,
}

impl Arity {
    fn check(self, xs: &[Real], ys: &[Real]) -> Result<()> {
        match self {
            Arity::Exactly(n) => validate_arity(xs, ys, n),
            Arity::Any => validate_samples(xs, ys),
        }
    }
}

fn prepare(
    xs: &[Real],
    ys: &[Real],
    arity: Arity,
    cache: Option<&TangentCache>,
) -> Result<Arc<AkimaSpline>> {
    arity.check(xs, ys)?;
    match cache {
        Some(cache) => cache.get_or_prepare(xs, ys),
        None => Ok(Arc::new(AkimaSpline::with_settings(
            xs,
            ys,
            &Settings::default(),
        )?)),
    }
}

/// Interpolate `(xs, ys)` at `x`.  Same contract as [`interpolate_n`].
pub fn interpolate(xs: &[Real], ys: &[Real], x: Real) -> Result<Real> {
    interpolate_n(xs, ys, x)
}

/// Akima interpolation through exactly four samples, given in any order.
///
/// # Errors
/// `Error::FixedArity` unless both arrays hold exactly [`FIXED_ARITY`]
/// values, then the errors of [`interpolate_n`].
pub fn interpolate_fixed_four(xs: &[Real], ys: &[Real], x: Real) -> Result<Real> {
    prepare(xs, ys, Arity::Exactly(FIXED_ARITY), None)?.value(x)
}

/// Akima interpolation through `n >= 2` samples, given in any order.
///
/// Queries at or beyond either end extrapolate linearly through the two
/// nearest boundary samples.
///
/// # Errors
/// - `Error::LengthMismatch` if the arrays differ in length.
/// - `Error::InsufficientPoints` for fewer than two samples.
/// - `Error::NonFinite` for a NaN or infinite sample or query.
/// - `Error::DegenerateInput` if two samples share an abscissa.
/// - `Error::Overflow` if the interpolant is not representable at `x`.
pub fn interpolate_n(xs: &[Real], ys: &[Real], x: Real) -> Result<Real> {
    prepare(xs, ys, Arity::Any, None)?.value(x)
}

/// [`interpolate_fixed_four`] backed by `cache`.
pub fn interpolate_fixed_four_cached(
    cache: &TangentCache,
    xs: &[Real],
    ys: &[Real],
    x: Real,
) -> Result<Real> {
    prepare(xs, ys, Arity::Exactly(FIXED_ARITY), Some(cache))?.value(x)
}

/// [`interpolate_n`] backed by `cache`.
///
/// The first call for a dataset sorts it and computes its tangents; later
/// calls with identical `(xs, ys)` reuse them.  Results are bit-identical to
/// the uncached path.
pub fn interpolate_n_cached(
    cache: &TangentCache,
    xs: &[Real],
    ys: &[Real],
    x: Real,
) -> Result<Real> {
    prepare(xs, ys, Arity::Any, Some(cache))?.value(x)
}

/// [`interpolate_n`] at every query in `queries`, preparing the dataset once.
pub fn interpolate_n_many(xs: &[Real], ys: &[Real], queries: &[Real]) -> Result<Vec<Real>> {
    prepare(xs, ys, Arity::Any, None)?.values(queries)
}

/// [`interpolate_n_cached`] at every query in `queries`.
pub fn interpolate_n_cached_many(
    cache: &TangentCache,
    xs: &[Real],
    ys: &[Real],
    queries: &[Real],
) -> Result<Vec<Real>> {
    prepare(xs, ys, Arity::Any, Some(cache))?.values(queries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use akima_core::errors::Error;
    use approx::assert_abs_diff_eq;

    #[test]
    fn four_point_parabola() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 4.0, 9.0];
        let v = interpolate_fixed_four(&x, &y, 1.5).unwrap();
        assert!(v > 1.0 && v < 4.0, "got {v}");
        // tangents [1, 2, 4, 5]; segment 1: a=1, b=2, c=1, d=0
        assert_eq!(v, 2.25);
        assert_eq!(interpolate_fixed_four(&x, &y, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn six_point_parabola_midpoint() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
        let v = interpolate_n(&x, &y, 2.5).unwrap();
        assert_abs_diff_eq!(v, 6.25, epsilon = 0.05);
        assert_eq!(interpolate(&x, &y, 2.5).unwrap(), v);
    }

    #[test]
    fn fixed_four_rejects_other_counts() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0, 4.0];
        assert_eq!(
            interpolate_fixed_four(&x, &y, 1.0),
            Err(Error::FixedArity {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            interpolate_fixed_four(&[0.0, 1.0, 2.0, 3.0], &y, 1.0),
            Err(Error::FixedArity {
                expected: 4,
                got: 3
            })
        );
    }

    #[test]
    fn general_path_errors() {
        assert_eq!(
            interpolate_n(&[0.0, 1.0, 2.0], &[0.0, 1.0], 0.5),
            Err(Error::LengthMismatch { x_len: 3, y_len: 2 })
        );
        assert_eq!(
            interpolate_n(&[0.0], &[1.0], 0.5),
            Err(Error::InsufficientPoints { got: 1, min: 2 })
        );
        for q in [0.0, 1.0, 2.0] {
            assert_eq!(
                interpolate_n(&[1.0, 1.0], &[5.0, 7.0], q),
                Err(Error::DegenerateInput { x: 1.0 })
            );
        }
    }

    #[test]
    fn cached_paths_match_uncached() {
        let cache = TangentCache::new(4).unwrap();
        let x = [3.0, 1.0, 0.0, 2.0];
        let y = [2.0, -1.0, 0.5, 4.0];
        for q in [-1.0, 0.0, 0.3, 1.0, 1.7, 2.9, 3.0, 4.2] {
            let fresh = interpolate_fixed_four(&x, &y, q).unwrap();
            assert_eq!(interpolate_fixed_four_cached(&cache, &x, &y, q).unwrap(), fresh);
            assert_eq!(interpolate_n_cached(&cache, &x, &y, q).unwrap(), fresh);
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn cached_fixed_four_gates_before_touching_the_cache() {
        let cache = TangentCache::new(4).unwrap();
        assert!(interpolate_fixed_four_cached(&cache, &[0.0, 1.0], &[0.0, 1.0], 0.5).is_err());
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn vector_queries_repeat_the_scalar_call() {
        let cache = TangentCache::new(4).unwrap();
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 0.1, 2.2, 1.0, 5.1];
        let qs = [-0.5, 0.5, 1.5, 2.5, 3.5, 4.5];
        let expected: Vec<Real> = qs.iter().map(|&q| interpolate_n(&x, &y, q).unwrap()).collect();
        assert_eq!(interpolate_n_many(&x, &y, &qs).unwrap(), expected);
        assert_eq!(interpolate_n_cached_many(&cache, &x, &y, &qs).unwrap(), expected);
    }
}
