//! Monotonic millisecond clock abstraction polled by the timer.
//!
//! A clock only has to hand out the current tick count. Readings are expected
//! to increase by one per millisecond and to wrap back to zero after
//! [`MAX_CLOCK_VALUE`](crate::core::MAX_CLOCK_VALUE), exactly like a hardware
//! `millis()` counter does.
#[cfg(feature = "embassy")]
pub mod embassy;

#[cfg(feature = "embassy")]
pub use self::embassy::EmbassyClock;

use crate::core::Millis;

/// Clock source trait; implementations must be cheap and must never block.
pub trait Clock {
    /// Current tick count in milliseconds since an arbitrary epoch.
    fn now_ms(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

/// Adapter over a host-supplied function such as a board `millis()`.
///
/// ```
/// use nb_delay::clock::{Clock, FnClock};
///
/// fn millis() -> u32 {
///     1234
/// }
///
/// let clock = FnClock::new(millis);
/// assert_eq!(clock.now_ms(), 1234);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnClock<F>(F);

impl<F: Fn() -> Millis> FnClock<F> {
    pub const fn new(source: F) -> Self {
        Self(source)
    }
}

impl<F: Fn() -> Millis> Clock for FnClock<F> {
    #[inline]
    fn now_ms(&self) -> Millis {
        (self.0)()
    }
}
