//! # akima-core
//!
//! Core types, error definitions, and settings for akima-rs.
//!
//! This crate provides the building blocks shared by the rest of the
//! workspace: numeric type aliases, the error enum with its `ensure!` macro,
//! and the [`Settings`] value that configures the interpolation engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Engine configuration.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{DuplicateAbscissae, InputOrder, Settings};
