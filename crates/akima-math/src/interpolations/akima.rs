//! Akima spline interpolation.
//!
//! Akima splines avoid the overshooting problems of natural cubic splines by
//! using a weighted average of neighbouring slopes to determine the tangent at
//! each point.  A secant whose far-side neighbour pair changes sharply is
//! down-weighted, so an abrupt local change does not ripple into the
//! surrounding segments.

use akima_core::{
    errors::{Error, Result},
    settings::{DuplicateAbscissae, InputOrder, Settings},
    Real, Size,
};

use super::{
    coefficients::SegmentCoefficients,
    locate::{locate, Location},
    slopes::{secant, secant_slopes},
    sorting::{sort_by_x, SortedSamples},
    validation::{ensure_ascending, reject_duplicates, validate_query, validate_samples},
    Interpolation1D,
};

/// Compute the Akima tangent at every sample of sorted `xs`, `ys`.
///
/// With secants `m` (length `n-1`):
///
/// - the end nodes take the adjacent secant, `s[0] = m[0]`, `s[n-1] = m[n-2]`;
/// - the nodes next to them take the plain average of their two secants;
/// - interior nodes `2 <= i <= n-3` take
///   `(w1·m[i-1] + w2·m[i]) / (w1 + w2)` with `w1 = |m[i+1] - m[i]|`,
///   `w2 = |m[i-1] - m[i-2]|`, or the plain average when both weights vanish.
///
/// Two samples yield a single straight segment.  At least two samples are
/// required; fewer yield an empty vector.
pub fn akima_tangents(xs: &[Real], ys: &[Real]) -> Vec<Real> {
    let n = xs.len();
    if n < 2 {
        return Vec::new();
    }
    let m = secant_slopes(xs, ys);
    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut ts = vec![0.0; n];
    ts[0] = m[0];
    ts[1] = 0.5 * (m[0] + m[1]);
    for i in 2..n.saturating_sub(2) {
        let w1 = (m[i + 1] - m[i]).abs();
        let w2 = (m[i - 1] - m[i - 2]).abs();
        let w = w1 + w2;
        ts[i] = if w == 0.0 {
            // Locally linear on both sides
            0.5 * (m[i - 1] + m[i])
        } else {
            (w1 * m[i - 1] + w2 * m[i]) / w
        };
    }
    ts[n - 2] = 0.5 * (m[n - 3] + m[n - 2]);
    ts[n - 1] = m[n - 2];
    ts
}

/// Akima spline prepared from a sample set.
///
/// Holds the samples sorted by abscissa together with their Akima tangents.
/// Segment coefficients are derived per query for the located segment only.
/// Outside the sample range the spline continues as the straight line
/// through the two nearest boundary samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AkimaSpline {
    xs: Vec<Real>,
    ys: Vec<Real>,
    /// Hermite slopes at each knot
    ts: Vec<Real>,
}

impl AkimaSpline {
    /// Build an Akima spline through samples given in any order.
    ///
    /// # Errors
    /// Fails on mismatched lengths, fewer than 2 points, non-finite values,
    /// or a repeated abscissa.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        Self::with_settings(xs, ys, &Settings::default())
    }

    /// Build an Akima spline from samples the caller guarantees are sorted
    /// ascending by x.  No sort is performed; the order is verified in a
    /// single pass.
    ///
    /// # Errors
    /// As [`new`](Self::new), plus `Error::Unsorted` on a descending step.
    pub fn from_sorted(xs: &[Real], ys: &[Real]) -> Result<Self> {
        Self::with_settings(
            xs,
            ys,
            &Settings::new().with_input_order(InputOrder::Sorted),
        )
    }

    /// Build an Akima spline honouring the input-order and duplicate-abscissa
    /// policies in `settings`.
    pub fn with_settings(xs: &[Real], ys: &[Real], settings: &Settings) -> Result<Self> {
        validate_samples(xs, ys)?;
        let SortedSamples { x, y } = match settings.input_order() {
            InputOrder::Unsorted => sort_by_x(xs, ys),
            InputOrder::Sorted => {
                ensure_ascending(xs)?;
                SortedSamples {
                    x: xs.to_vec(),
                    y: ys.to_vec(),
                }
            }
        };
        if settings.duplicate_abscissae() == DuplicateAbscissae::Reject {
            reject_duplicates(&x)?;
        }
        let ts = akima_tangents(&x, &y);
        Ok(Self { xs: x, ys: y, ts })
    }

    /// Sorted abscissae.
    pub fn xs(&self) -> &[Real] {
        &self.xs
    }

    /// Ordinates, in abscissa order.
    pub fn ys(&self) -> &[Real] {
        &self.ys
    }

    /// Akima tangent at each sample.
    pub fn tangents(&self) -> &[Real] {
        &self.ts
    }

    /// Number of samples.
    pub fn len(&self) -> Size {
        self.xs.len()
    }

    /// Always `false`: a spline holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Cubic coefficients of segment `i`.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` for `i > n-2`; `Error::Overflow` for a
    /// segment that is not representable; `Error::DegenerateInput` for a
    /// zero-width segment.
    pub fn coefficients(&self, i: Size) -> Result<SegmentCoefficients> {
        SegmentCoefficients::for_segment(&self.xs, &self.ys, &self.ts, i)
    }

    /// Straight line through the samples at `i` and `j`, evaluated at `x`.
    /// A zero-width or overflowing pair has its slope floored to zero, so the
    /// line degenerates to the sample at `i`.
    fn extrapolate(&self, i: Size, j: Size, x: Real) -> Real {
        if x == self.xs[i] {
            return self.ys[i];
        }
        let slope = secant(self.ys[j] - self.ys[i], self.xs[j] - self.xs[i]);
        self.ys[i] + slope * (x - self.xs[i])
    }
}

impl Interpolation1D for AkimaSpline {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn value(&self, x: Real) -> Result<Real> {
        validate_query(x)?;
        let n = self.xs.len();
        let v = match locate(&self.xs, x) {
            Location::Below => self.extrapolate(0, 1, x),
            Location::Above => self.extrapolate(n - 1, n - 2, x),
            Location::Segment(i) if x == self.xs[i] => self.ys[i],
            Location::Segment(i) => self.coefficients(i)?.evaluate(x - self.xs[i]),
        };
        if !v.is_finite() {
            return Err(Error::Overflow { x });
        }
        Ok(v)
    }
}
