//! 1D Akima interpolation: the `Interpolation1D` trait, the building blocks
//! of the Akima scheme, and the entry points that tie them together.

use akima_core::{errors::Result, Real};

/// Akima tangent rule and the prepared [`AkimaSpline`].
pub mod akima;

/// Bounded LRU memo of prepared splines.
pub mod cache;

/// Per-segment cubic coefficients.
pub mod coefficients;

/// Arity-gated entry points.
pub mod interpolator;

/// Segment lookup for a query abscissa.
pub mod locate;

/// Secant slopes between consecutive samples.
pub mod slopes;

/// Joint sorting of samples by abscissa.
pub mod sorting;

/// Sample validation.
pub mod validation;

pub use akima::{akima_tangents, AkimaSpline};
pub use cache::{CacheStats, TangentCache};
pub use coefficients::SegmentCoefficients;
pub use interpolator::{
    interpolate, interpolate_fixed_four, interpolate_fixed_four_cached, interpolate_n,
    interpolate_n_cached, interpolate_n_cached_many, interpolate_n_many, FIXED_ARITY,
};
pub use locate::{locate, Location};
pub use slopes::secant_slopes;
pub use sorting::{sort_by_x, SortedSamples};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug {
    /// Evaluate the interpolation at `x`.
    ///
    /// # Errors
    /// Returns `Error::NonFinite` for a NaN or infinite query,
    /// `Error::DegenerateInput` if `x` falls in a zero-width segment, and
    /// `Error::Overflow` if the result is not representable.
    fn value(&self, x: Real) -> Result<Real>;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }

    /// Evaluate the interpolation at every point of `xs`, in order.
    ///
    /// Stops at the first failing query.
    fn values(&self, xs: &[Real]) -> Result<Vec<Real>> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}
