//! `nb-delay` library: a non-blocking interval timer for single-threaded
//! embedded control loops, in a `no_std` environment. The crate exposes the
//! clock abstraction the timer polls, the shared core types and bounds, and the
//! [`IntervalTimer`] state machine itself.
//!
//! ```
//! use core::cell::Cell;
//! use nb_delay::{clock::FnClock, IntervalTimer};
//!
//! let now = Cell::new(0u32);
//! let mut blink = IntervalTimer::new(FnClock::new(|| now.get()), 500);
//!
//! now.set(499);
//! assert!(!blink.is_ready());
//! now.set(500);
//! assert!(blink.is_ready());
//! assert!(!blink.is_ready());
//! ```
#![no_std]
//==================================================================================
/// Monotonic millisecond clock sources consumed by the timer.
pub mod clock;
/// Tick type, interval bounds and timer configuration.
pub mod core;
/// Errors returned by the strict (non-clamping) APIs.
pub mod error;
/// The interval timer state machine.
pub mod timer;
//==================================================================================
pub use crate::clock::Clock;
pub use crate::core::{Count, Millis, TimerConfig, TimerState};
pub use crate::error::TimerError;
pub use crate::timer::IntervalTimer;
