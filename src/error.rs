//! Error definitions for the strict, opt-in APIs.
//! Everyday timer operations never fail: out-of-range intervals are clamped.
use crate::core::Millis;
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors reported when an interval or its bounds are validated strictly.
pub enum TimerError {
    /// Requested interval lies outside the configured bounds.
    #[error("Interval {requested} ms out of range [{min}, {max}]")]
    IntervalOutOfRange {
        requested: Millis,
        min: Millis,
        max: Millis,
    },
    /// Lower bound is greater than the upper bound.
    #[error("Invalid interval bounds: min {min} > max {max}")]
    InvalidBounds { min: Millis, max: Millis },
}
