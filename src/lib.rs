//! Exact integer division of time intervals.
//!
//! A [`TimeInterval`] is a duration with microsecond resolution, displayed in days, seconds and microseconds.
//! Dividing one by another yields an integer quotient and a remainder interval, such that
//! `numerator == denominator * quotient + remainder` and `0 <= remainder < denominator`.
//!
//! The quotient can get huge (500 days divided by 0.2 seconds is 216 million), so the division is not done by repeated
//! subtraction, but by long division in a configurable base, see [`ExponentialDivider`].
//!
//! ```
//! use interval_division::{divide, TimeInterval};
//! let numerator = TimeInterval::new(500, 0, 0).unwrap();
//! let denominator = TimeInterval::new(0, 0, 200_000).unwrap();
//! let result = divide(&numerator, &denominator).unwrap();
//! assert_eq!(result.quotient, 216_000_000);
//! assert!(result.remainder.is_zero());
//! ```

mod division;
mod time_interval;

use std::error::Error;
use std::fmt::Display;

pub use division::{DivisionResult, IntervalDivision, Reduction};
pub use division::exponential::{ExponentialDivider, DEFAULT_FACTOR};
pub use division::repeated_subtraction::RepeatedSubtraction;
pub use time_interval::{TimeInterval, TimeUnit, IntervalOverflow, NegativeInterval};

/// Divides `numerator` by `denominator` using an [`ExponentialDivider`] with the [`DEFAULT_FACTOR`].
///
/// A zero denominator is an error. Negative operands are not divided at all: the quotient is 0 and the remainder is the
/// numerator.
pub fn divide(numerator : &TimeInterval, denominator : &TimeInterval) -> Result<DivisionResult, DivisionError> {
    ExponentialDivider::default().divide(numerator, denominator)
}

/// Error returned if a division could not produce a result.
/// `ArithmeticOverflow` cannot happen for non-negative numerators and positive denominators with the algorithms in
/// this crate. It is there for custom [`IntervalDivision`] implementations, and to never silently wrap around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionError {
    DivisionByZero,
    ArithmeticOverflow,
}

impl Display for DivisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionError::DivisionByZero => write!(f, "Denominator cannot be zero."),
            DivisionError::ArithmeticOverflow => write!(f, "Time interval arithmetic overflowed."),
        }
    }
}
impl Error for DivisionError{}
