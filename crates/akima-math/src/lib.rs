//! # akima-math
//!
//! Akima piecewise-cubic interpolation: secant slopes, Akima's weighted
//! tangent rule, Hermite segment coefficients, segment lookup with linear
//! extrapolation, and a bounded cache of prepared datasets.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1D Akima interpolation.
pub mod interpolations;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolations::{
    interpolate, interpolate_fixed_four, interpolate_fixed_four_cached, interpolate_n,
    interpolate_n_cached, AkimaSpline, Interpolation1D, TangentCache,
};
