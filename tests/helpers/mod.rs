/// Test doubles standing in for a board `millis()` counter during integration tests.
use nb_delay::{Clock, Millis};
use std::cell::Cell;
use tokio::time::Instant;

#[allow(dead_code)]
/// Clock advanced by hand, tick by tick.
pub struct MockClock {
    now: Cell<Millis>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn starting_at(now: Millis) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Move forward, wrapping like a hardware counter.
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

#[allow(dead_code)]
/// Clock based on `tokio::time::Instant`, so paused tokio time drives it.
pub struct TokioClock {
    base: Instant,
    offset: Millis,
}

#[allow(dead_code)]
impl TokioClock {
    /// Start reading `offset` now, then count up with tokio time.
    pub fn starting_at(offset: Millis) -> Self {
        Self {
            base: Instant::now(),
            offset,
        }
    }
}

impl Clock for TokioClock {
    fn now_ms(&self) -> Millis {
        self.offset
            .wrapping_add(self.base.elapsed().as_millis() as Millis)
    }
}
