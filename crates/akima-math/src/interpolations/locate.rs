//! Segment lookup for a query abscissa.

use akima_core::{Real, Size};

/// Where a query abscissa falls relative to the sample range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// At or left of the first abscissa.
    Below,
    /// At or right of the last abscissa.
    Above,
    /// Strictly inside; `xs[i] <= x < xs[i+1]`.
    Segment(Size),
}

/// Find the segment of sorted `xs` containing `x`.
///
/// Queries on or beyond either end report [`Location::Below`] /
/// [`Location::Above`] so the caller can extrapolate.  Inside the range a
/// binary search returns `i` with `xs[i] <= x < xs[i+1]`, clamped to
/// `[0, n-2]`.  `xs` must hold at least two values.
pub fn locate(xs: &[Real], x: Real) -> Location {
    let n = xs.len();
    debug_assert!(n >= 2);
    if x <= xs[0] {
        return Location::Below;
    }
    if x >= xs[n - 1] {
        return Location::Above;
    }
    // Invariant: xs[lo] <= x < xs[hi]
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if xs[mid] <= x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Location::Segment(lo.min(n - 2))
}
