//! Clock backed by the embassy time driver.
use embassy_time::Instant;

use super::Clock;
use crate::core::Millis;

/// Reads `embassy_time::Instant::now()` and truncates it to 32 bits.
///
/// Embassy keeps a 64-bit tick counter that practically never wraps; the
/// truncation makes it roll over like a native `millis()` counter, which the
/// timer arithmetic is built for.
///
/// Requires a time driver linked into the firmware (e.g. `embassy-stm32`,
/// `esp-hal-embassy`).
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    #[inline]
    fn now_ms(&self) -> Millis {
        Instant::now().as_millis() as Millis
    }
}
