//! Secant slopes between consecutive samples.

use akima_core::Real;

/// Compute `m[i] = (y[i+1] - y[i]) / (x[i+1] - x[i])` for every adjacent pair.
///
/// `xs` must be sorted ascending and as long as `ys`.  A ratio that is not
/// finite (zero x-step, overflow) is floored to `0.0` instead of being
/// propagated.  Fewer than two samples yield an empty vector.
pub fn secant_slopes(xs: &[Real], ys: &[Real]) -> Vec<Real> {
    debug_assert_eq!(xs.len(), ys.len());
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| secant(y[1] - y[0], x[1] - x[0]))
        .collect()
}

/// `dy / dx`, or `0.0` when the ratio is not finite.
#[inline]
pub(crate) fn secant(dy: Real, dx: Real) -> Real {
    let m = dy / dx;
    if m.is_finite() {
        m
    } else {
        0.0
    }
}
