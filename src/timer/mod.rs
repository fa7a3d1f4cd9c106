//! Poll-based interval timer.
//!
//! [`IntervalTimer`] never blocks: the control loop asks it, as often as it
//! likes, whether the configured interval has elapsed since the last reference
//! point. Two completion checks exist:
//!
//! * [`IntervalTimer::is_ready`] resets the reference on success, so every
//!   period yields exactly one `true`. Suited to quick periodic work.
//! * [`IntervalTimer::is_done`] leaves the reference alone and keeps returning
//!   `true` on every poll until [`IntervalTimer::reset_time`] is called.
//!   Suited to long work blocks that reset the timer themselves:
//!
//! ```
//! # use core::cell::Cell;
//! # use nb_delay::{clock::FnClock, IntervalTimer};
//! # let now = Cell::new(0u32);
//! let mut sampler = IntervalTimer::new(FnClock::new(|| now.get()), 1_000);
//! # now.set(1_000);
//! if sampler.is_done() {
//!     // long-running work...
//!     sampler.reset_time();
//! }
//! ```
//!
//! Elapsed time is measured with modular arithmetic at the clock width, so a
//! single clock rollover between two polls is handled transparently.
use crate::clock::Clock;
use crate::core::{Count, Millis, TimerConfig, TimerState};
use crate::error::TimerError;

/// Non-blocking interval timer over an injected [`Clock`].
///
/// `F` is the expiry callback. It defaults to a plain `fn()` so timers without
/// a closure need no type annotation; [`IntervalTimer::with_callback`] swaps
/// in any `FnMut()`.
pub struct IntervalTimer<C: Clock, F: FnMut() = fn()> {
    clock: C,
    config: TimerConfig,
    interval: Millis,
    reference: Millis,
    // Starts out true since the default interval is 0.
    paused: bool,
    count: Count,
    callback: Option<F>,
}

impl<C: Clock> IntervalTimer<C> {
    /// Build a timer with the default bounds and start counting from now.
    ///
    /// `interval` is clamped like in [`set_interval`](Self::set_interval); an
    /// interval of 0 yields a paused timer.
    pub fn new(clock: C, interval: Millis) -> Self {
        Self::with_config(clock, interval, TimerConfig::default())
    }

    /// Build a paused timer with a zero interval.
    pub fn disarmed(clock: C) -> Self {
        Self::new(clock, 0)
    }

    /// Build a timer clamping its intervals into custom bounds.
    pub fn with_config(clock: C, interval: Millis, config: TimerConfig) -> Self {
        let mut timer = Self {
            clock,
            config,
            interval: config.min_interval(),
            reference: 0,
            paused: true,
            count: 0,
            callback: None,
        };
        timer.set_interval(interval);
        timer
    }
}

impl<C: Clock + Default> Default for IntervalTimer<C> {
    fn default() -> Self {
        Self::disarmed(C::default())
    }
}

impl<C: Clock, F: FnMut()> IntervalTimer<C, F> {
    /// Attach a callback of a new type, keeping every other piece of state.
    pub fn with_callback<G: FnMut()>(self, callback: G) -> IntervalTimer<C, G> {
        IntervalTimer {
            clock: self.clock,
            config: self.config,
            interval: self.interval,
            reference: self.reference,
            paused: self.paused,
            count: self.count,
            callback: Some(callback),
        }
    }

    //==================================================================================INTERVAL

    /// Clamp `ms` into the configured bounds, store it and restart the period.
    ///
    /// Out-of-range values are silently clamped. Use
    /// [`try_set_interval`](Self::try_set_interval) to reject them instead.
    pub fn set_interval(&mut self, ms: Millis) {
        self.interval = self.config.clamp(ms);
        self.reset_time();

        #[cfg(feature = "defmt")]
        defmt::debug!("Interval set to {} ms (requested {} ms)", self.interval, ms);
    }

    /// Strict version of [`set_interval`](Self::set_interval): out-of-range
    /// values are rejected and the timer is left untouched.
    pub fn try_set_interval(&mut self, ms: Millis) -> Result<(), TimerError> {
        if !self.config.contains(ms) {
            return Err(TimerError::IntervalOutOfRange {
                requested: ms,
                min: self.config.min_interval(),
                max: self.config.max_interval(),
            });
        }
        self.set_interval(ms);
        Ok(())
    }

    /// Interval in milliseconds, after clamping.
    #[inline]
    pub fn interval(&self) -> Millis {
        self.interval
    }

    /// Bounds applied to interval assignments.
    #[inline]
    pub fn config(&self) -> TimerConfig {
        self.config
    }

    /// Clock the timer polls.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    //==================================================================================REFERENCE

    /// Capture the current clock reading as the new reference point.
    ///
    /// Also re-derives the pause flag: the timer is armed again unless the
    /// interval is 0.
    pub fn reset_time(&mut self) {
        self.reference = self.clock.now_ms();
        self.paused = self.interval == 0;
    }

    /// Gate completion checks. The reference point is left untouched.
    pub fn pause(&mut self) {
        self.paused = true;

        #[cfg(feature = "defmt")]
        defmt::trace!("Timer paused");
    }

    /// Lift the pause and restart the period from zero elapsed time.
    ///
    /// Time accrued before [`pause`](Self::pause) is discarded.
    pub fn resume(&mut self) {
        self.paused = false;
        self.reset_time();

        #[cfg(feature = "defmt")]
        defmt::trace!("Timer resumed, paused={}", self.paused);
    }

    /// Whether completion checks are currently gated.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Milliseconds elapsed since the reference point.
    ///
    /// Subtraction wraps at the clock width, so a reading taken after the
    /// clock rolled over still yields the true tick count, e.g. a reference
    /// of `MAX - 5` and a reading of `4` give `10`. Correct for at most one
    /// rollover between the reset and the poll.
    #[inline]
    pub fn delta(&self) -> Millis {
        self.clock.now_ms().wrapping_sub(self.reference)
    }

    /// Milliseconds left before the period elapses, 0 when elapsed or disarmed.
    pub fn remaining(&self) -> Millis {
        if self.is_disarmed() {
            return 0;
        }
        self.interval.saturating_sub(self.delta())
    }

    /// Side-effect free view of the state machine.
    pub fn state(&self) -> TimerState {
        if self.is_disarmed() {
            TimerState::Disarmed
        } else if self.delta() >= self.interval {
            TimerState::Elapsed
        } else {
            TimerState::Waiting
        }
    }

    #[inline]
    fn is_disarmed(&self) -> bool {
        self.paused || self.interval == 0
    }

    //==================================================================================COMPLETION

    /// Whether the interval has elapsed, without resetting the reference.
    ///
    /// Each `true` increments the trigger count and fires the callback. Until
    /// [`reset_time`](Self::reset_time) is called the timer stays open: every
    /// further poll returns `true`, counts and fires again. Never `true` while
    /// paused or with a zero interval.
    pub fn is_done(&mut self) -> bool {
        if self.is_disarmed() {
            return false;
        }

        if self.delta() < self.interval {
            return false;
        }

        self.count = self.count.wrapping_add(1);

        #[cfg(feature = "defmt")]
        defmt::trace!("Interval of {} ms elapsed, count={}", self.interval, self.count);

        if let Some(callback) = self.callback.as_mut() {
            callback();
        }

        true
    }

    /// Like [`is_done`](Self::is_done), but restarts the period on success so
    /// each interval yields a single `true`.
    ///
    /// The next period starts when this call returns, not when the previous
    /// one was due: late polls add up as drift.
    pub fn is_ready(&mut self) -> bool {
        let ready = self.is_done();
        if ready {
            self.reset_time();
        }
        ready
    }

    //==================================================================================COUNTER

    /// Number of completions observed by `is_done`/`is_ready`. Wraps at the
    /// clock width.
    #[inline]
    pub fn count(&self) -> Count {
        self.count
    }

    /// Set the trigger count back to zero.
    #[inline]
    pub fn reset_count(&mut self) {
        self.count = 0;
    }

    /// Count is non-zero and even.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.count != 0 && self.count % 2 == 0
    }

    /// Count is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.count % 2 == 1
    }

    /// No completion observed since construction or the last `reset_count`.
    #[inline]
    pub fn is_never(&self) -> bool {
        self.count == 0
    }

    //==================================================================================CALLBACK

    /// Replace the callback invoked on each observed completion.
    ///
    /// The callback runs inline, inside `is_done`/`is_ready`; it must not block.
    pub fn set_callback(&mut self, callback: F) {
        self.callback = Some(callback);
    }

    /// Whether a callback is attached.
    #[inline]
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Borrow the attached callback, if any.
    #[inline]
    pub fn callback(&self) -> Option<&F> {
        self.callback.as_ref()
    }

    /// Detach and return the callback.
    pub fn take_callback(&mut self) -> Option<F> {
        self.callback.take()
    }
}

impl<C: Clock, F: FnMut()> core::fmt::Debug for IntervalTimer<C, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IntervalTimer")
            .field("interval", &self.interval)
            .field("reference", &self.reference)
            .field("paused", &self.paused)
            .field("count", &self.count)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
