//! # akima
//!
//! Shape-preserving interpolation of 1D samples with Akima's piecewise-cubic
//! method.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than on the individual `akima-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use akima::prelude::*;
//!
//! let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [0.0, 1.0, 4.0, 9.0, 16.0, 25.0];
//!
//! // one-off query
//! let v = interpolate_n(&x, &y, 2.5)?;
//! assert!((v - 6.25).abs() < 0.1);
//!
//! // many queries against one dataset
//! let cache = TangentCache::new(32)?;
//! let w = interpolate_n_cached(&cache, &x, &y, 2.5)?;
//! assert_eq!(v, w);
//! # Ok::<(), akima::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, error definitions, and settings.
pub use akima_core as core;

/// Interpolation engine.
pub use akima_math as math;

/// The types and functions most callers need.
pub mod prelude {
    pub use akima_core::{DuplicateAbscissae, Error, InputOrder, Real, Result, Settings};
    pub use akima_math::interpolations::{
        interpolate, interpolate_fixed_four, interpolate_fixed_four_cached, interpolate_n,
        interpolate_n_cached, interpolate_n_cached_many, interpolate_n_many, AkimaSpline,
        CacheStats, Interpolation1D, Location, SegmentCoefficients, TangentCache,
    };
}
