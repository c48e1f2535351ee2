//! Numeric types used by the fitters.
//!
//! This module defines the [`Value`] trait, which abstracts the numeric
//! types that predictions and errors are computed in, ensuring
//! compatibility with nalgebra and floating-point operations.
//!
//! # Traits
//!
//! - [`Value`]: Extends `FloatCore`, `Scalar`, and `RealField` to provide:
//!   - A canonical `two()` constant.
//!   - `try_cast` for safe type conversion with error handling.
//!   - `is_valid` to reject `NaN` and infinities in one call.
//!   - `round_to_half` for the display value of a trend score.
//!
//! # Example
//!
//! ```rust
//! use trendfit::value::Value;
//!
//! let trend = 2.8_f64;
//! assert_eq!(trend.round_to_half(), 3.0);
//! assert!(trend.is_valid());
//! ```
use crate::error::Error;

/// Numeric type for predictions and errors
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
    + std::fmt::Display
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Get the absolute value for a numeric type
    #[must_use]
    fn abs(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }

    /// Returns the absolute difference (Δ) between two values.
    #[must_use]
    fn delta(self, other: Self) -> Self {
        nalgebra::ComplexField::abs(self - other)
    }

    /// True if the value is neither `NaN` nor infinite.
    fn is_valid(&self) -> bool {
        !num_traits::float::FloatCore::is_nan(*self)
            && !num_traits::float::FloatCore::is_infinite(*self)
    }

    /// Rounds to the nearest multiple of 0.5, halves rounding away from zero.
    ///
    /// ```rust
    /// # use trendfit::value::Value;
    /// assert_eq!(2.24_f64.round_to_half(), 2.0);
    /// assert_eq!(2.25_f64.round_to_half(), 2.5);
    /// assert_eq!(3.76_f64.round_to_half(), 4.0);
    /// ```
    #[must_use]
    fn round_to_half(self) -> Self {
        nalgebra::ComplexField::round(self * Self::two()) / Self::two()
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(Self::infinity())
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
        + std::fmt::Display
{
}
