//! Interpolation settings.
//!
//! [`Settings`] is a plain value: callers build one, pass it to the engine
//! and the tangent cache, and own its lifetime.  Nothing here is global.
//!
//! ```
//! use akima_core::settings::{DuplicateAbscissae, InputOrder, Settings};
//!
//! let settings = Settings::new()
//!     .with_cache_capacity(16)
//!     .with_input_order(InputOrder::Sorted);
//! assert_eq!(settings.cache_capacity(), 16);
//! assert_eq!(settings.duplicate_abscissae(), DuplicateAbscissae::Reject);
//! ```

use crate::{errors::Result, Size};

/// Default number of prepared datasets a tangent cache retains.
pub const DEFAULT_CACHE_CAPACITY: Size = 128;

/// How the engine treats the ordering of incoming abscissae.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputOrder {
    /// Samples may arrive in any order; they are sorted jointly by x.
    #[default]
    Unsorted,
    /// The caller guarantees ascending x.  The order is still verified in a
    /// single linear pass, but no sort is performed.
    Sorted,
}

/// Policy for samples that share an abscissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DuplicateAbscissae {
    /// Any repeated x fails preparation with `Error::DegenerateInput`.
    #[default]
    Reject,
    /// Repeated x values are accepted.  The zero-width secant between them
    /// is floored to 0.0, and extrapolation across a zero-width boundary pair
    /// returns the boundary ordinate.
    Tolerate,
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    cache_capacity: Size,
    input_order: InputOrder,
    duplicate_abscissae: DuplicateAbscissae,
}

impl Settings {
    /// Default settings: defensive sorting, strict duplicate rejection,
    /// [`DEFAULT_CACHE_CAPACITY`] cache entries.
    pub fn new() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            input_order: InputOrder::default(),
            duplicate_abscissae: DuplicateAbscissae::default(),
        }
    }

    /// Set the maximum number of datasets a tangent cache keeps.
    pub fn with_cache_capacity(mut self, capacity: Size) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the input-ordering mode.
    pub fn with_input_order(mut self, order: InputOrder) -> Self {
        self.input_order = order;
        self
    }

    /// Set the duplicate-abscissa policy.
    pub fn with_duplicate_abscissae(mut self, policy: DuplicateAbscissae) -> Self {
        self.duplicate_abscissae = policy;
        self
    }

    /// Maximum number of datasets a tangent cache keeps.
    pub fn cache_capacity(&self) -> Size {
        self.cache_capacity
    }

    /// Input-ordering mode.
    pub fn input_order(&self) -> InputOrder {
        self.input_order
    }

    /// Duplicate-abscissa policy.
    pub fn duplicate_abscissae(&self) -> DuplicateAbscissae {
        self.duplicate_abscissae
    }

    /// Check that the settings are usable.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if the cache capacity is zero.
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.cache_capacity > 0,
            "cache capacity must be positive, got {}",
            self.cache_capacity
        );
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn defaults_are_strict_and_defensive() {
        let s = Settings::default();
        assert_eq!(s.cache_capacity(), DEFAULT_CACHE_CAPACITY);
        assert_eq!(s.input_order(), InputOrder::Unsorted);
        assert_eq!(s.duplicate_abscissae(), DuplicateAbscissae::Reject);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn builder_overrides_each_field() {
        let s = Settings::new()
            .with_cache_capacity(2)
            .with_input_order(InputOrder::Sorted)
            .with_duplicate_abscissae(DuplicateAbscissae::Tolerate);
        assert_eq!(s.cache_capacity(), 2);
        assert_eq!(s.input_order(), InputOrder::Sorted);
        assert_eq!(s.duplicate_abscissae(), DuplicateAbscissae::Tolerate);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let s = Settings::new().with_cache_capacity(0);
        assert!(matches!(s.validate(), Err(Error::Precondition(_))));
    }

    #[cfg(feature = "serde")]
    mod serialization {
        use super::super::*;

        #[test]
        fn settings_round_trip_through_json() {
            let s = Settings::new()
                .with_cache_capacity(7)
                .with_input_order(InputOrder::Sorted)
                .with_duplicate_abscissae(DuplicateAbscissae::Tolerate);
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(
                json,
                r#"{"cache_capacity":7,"input_order":"Sorted","duplicate_abscissae":"Tolerate"}"#
            );
            let back: Settings = serde_json::from_str(&json).unwrap();
            assert_eq!(back, s);
        }

        #[test]
        fn missing_fields_take_defaults() {
            let s: Settings = serde_json::from_str(r#"{"cache_capacity":3}"#).unwrap();
            assert_eq!(s, Settings::new().with_cache_capacity(3));

            let s: Settings = serde_json::from_str("{}").unwrap();
            assert_eq!(s, Settings::default());
        }

        #[test]
        fn unknown_policy_is_rejected() {
            let r = serde_json::from_str::<Settings>(r#"{"input_order":"Shuffled"}"#);
            assert!(r.is_err());
        }
    }
}
