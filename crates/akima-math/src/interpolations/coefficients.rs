//! Per-segment cubic coefficients.
//!
//! On `[x_i, x_{i+1}]` the interpolant is the cubic Hermite polynomial
//!
//!   `P_i(x) = a + b·δ + c·δ² + d·δ³`,  `δ = x - x_i`
//!
//! whose value and first derivative match the samples and tangents at both
//! ends of the segment.

use akima_core::{
    errors::{Error, Result},
    Real, Size,
};

/// Monomial coefficients of one Hermite cubic segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCoefficients {
    /// Constant term, `y_i`.
    pub a: Real,
    /// Linear term, the tangent at `x_i`.
    pub b: Real,
    /// Quadratic term.
    pub c: Real,
    /// Cubic term.
    pub d: Real,
}

impl SegmentCoefficients {
    /// Derive the coefficients of segment `i` from sorted samples and their
    /// tangents `ts`.
    ///
    /// # Errors
    /// - `Error::IndexOutOfRange` if `i` is not in `[0, n-2]`.
    /// - `Error::DegenerateInput` if the segment has zero width.
    /// - `Error::Overflow` if a coefficient is not finite, e.g. when the
    ///   segment's secant overflows.
    pub fn for_segment(xs: &[Real], ys: &[Real], ts: &[Real], i: Size) -> Result<Self> {
        let segments = xs.len().saturating_sub(1);
        if i >= segments {
            return Err(Error::IndexOutOfRange {
                index: i,
                size: segments,
            });
        }
        let h = xs[i + 1] - xs[i];
        if h == 0.0 {
            return Err(Error::DegenerateInput { x: xs[i] });
        }
        let m = (ys[i + 1] - ys[i]) / h;
        let coeffs = Self {
            a: ys[i],
            b: ts[i],
            c: (3.0 * m - 2.0 * ts[i] - ts[i + 1]) / h,
            d: (ts[i] + ts[i + 1] - 2.0 * m) / (h * h),
        };
        if !coeffs.is_finite() {
            return Err(Error::Overflow { x: xs[i] });
        }
        Ok(coeffs)
    }

    fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d].iter().all(|v| v.is_finite())
    }

    /// Evaluate `a + δ(b + δ(c + δd))` at offset `delta` from the segment's
    /// left end.
    #[inline]
    pub fn evaluate(&self, delta: Real) -> Real {
        self.a + delta * (self.b + delta * (self.c + delta * self.d))
    }

    /// First derivative of the segment polynomial at offset `delta`.
    #[cfg(test)]
    pub(crate) fn derivative(&self, delta: Real) -> Real {
        self.b + delta * (2.0 * self.c + delta * 3.0 * self.d)
    }
}
