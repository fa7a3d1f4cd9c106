//! Shared vocabulary between the clock sources and the timer: the tick type,
//! the default interval bounds, and the configuration applied at every
//! interval assignment.

use crate::error::TimerError;

/// Millisecond tick count as produced by a [`Clock`](crate::clock::Clock).
///
/// Matches the native word of the targets this crate is written for, so a
/// host `millis()` counter maps onto it without conversion.
pub type Millis = u32;

/// Number of completions observed by a timer. Same width as [`Millis`], so it
/// wraps together with the clock.
pub type Count = u32;

/// Largest value a clock reading can take before it wraps back to zero.
/// A 32-bit millisecond counter rolls over roughly every 49.7 days.
pub const MAX_CLOCK_VALUE: Millis = Millis::MAX;

/// Smallest interval accepted by default. 0 is allowed and disarms the timer.
pub const MIN_INTERVAL: Millis = 0;

/// Largest interval accepted by default (10 hours).
pub const MAX_INTERVAL: Millis = 36_000_000;

/// Bounds applied to every interval assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    min_interval: Millis,
    max_interval: Millis,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TimerConfig {
    /// `[MIN_INTERVAL, MAX_INTERVAL]`.
    pub const DEFAULT: Self = Self {
        min_interval: MIN_INTERVAL,
        max_interval: MAX_INTERVAL,
    };

    /// Build a configuration with custom bounds.
    ///
    /// Fails with [`TimerError::InvalidBounds`] when `min_interval > max_interval`.
    pub const fn new(min_interval: Millis, max_interval: Millis) -> Result<Self, TimerError> {
        if min_interval > max_interval {
            return Err(TimerError::InvalidBounds {
                min: min_interval,
                max: max_interval,
            });
        }
        Ok(Self {
            min_interval,
            max_interval,
        })
    }

    #[inline]
    pub const fn min_interval(&self) -> Millis {
        self.min_interval
    }

    #[inline]
    pub const fn max_interval(&self) -> Millis {
        self.max_interval
    }

    /// Force `ms` into `[min_interval, max_interval]`.
    #[inline]
    pub const fn clamp(&self, ms: Millis) -> Millis {
        if ms < self.min_interval {
            self.min_interval
        } else if ms > self.max_interval {
            self.max_interval
        } else {
            ms
        }
    }

    /// Whether `ms` lies inside the bounds unchanged.
    #[inline]
    pub const fn contains(&self, ms: Millis) -> bool {
        ms >= self.min_interval && ms <= self.max_interval
    }
}

/// Observable state of an [`IntervalTimer`](crate::timer::IntervalTimer).
///
/// ```text
///            set_interval(n>0) / resume
///  Disarmed ───────────────────────────▶ Waiting
///     ▲                                    │ delta >= interval
///     │ pause / set_interval(0)            ▼
///     └──────────────────────────────── Elapsed ◀─┐ is_done (no reset)
///                                          │──────┘
///                      reset_time / is_ready → Waiting
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Paused, or the interval is zero. Completion cannot be observed.
    Disarmed,
    /// Armed; the interval has not elapsed yet.
    Waiting,
    /// Armed; the interval has elapsed and the reference was not reset.
    Elapsed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Default bounds are 0 ms to 10 hours.
    fn test_default_bounds() {
        let config = TimerConfig::default();
        assert_eq!(config.min_interval(), 0);
        assert_eq!(config.max_interval(), 36_000_000);
        assert_eq!(config, TimerConfig::DEFAULT);
    }

    #[test]
    /// Clamping pins values on both edges and keeps in-range values.
    fn test_clamp() {
        let config = TimerConfig::new(10, 100).unwrap();
        assert_eq!(config.clamp(0), 10);
        assert_eq!(config.clamp(10), 10);
        assert_eq!(config.clamp(55), 55);
        assert_eq!(config.clamp(100), 100);
        assert_eq!(config.clamp(Millis::MAX), 100);
        assert!(config.contains(55));
        assert!(!config.contains(101));
        assert!(!config.contains(9));
    }

    #[test]
    /// Inverted bounds are rejected.
    fn test_inverted_bounds() {
        assert!(matches!(
            TimerConfig::new(10, 5),
            Err(TimerError::InvalidBounds { min: 10, max: 5 })
        ));
        assert!(TimerConfig::new(7, 7).is_ok());
    }
}
