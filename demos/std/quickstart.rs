//! # Quickstart Example
//!
//! Minimal superloop demonstrating the basics of nb-delay:
//! - Wrap a host millisecond counter in a clock
//! - Poll a periodic timer with `is_ready`
//! - Run a long work block guarded by `is_done`
//! - Pause and resume a timer
//!
//! This example uses `std` for a quick trial run.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use std::cell::Cell;
use std::time::{Duration, Instant};

use nb_delay::clock::FnClock;
use nb_delay::IntervalTimer;

fn main() {
    println!("=== nb-delay Quickstart ===\n");

    // ======================================================================
    // 1. A `millis()` counter, as a board support package would provide
    // ======================================================================
    let boot = Instant::now();
    let millis = move || boot.elapsed().as_millis() as u32;
    let clock = FnClock::new(millis);

    // ======================================================================
    // 2. Timers: a fast heartbeat, a slow sampler, a report
    // ======================================================================
    let beats = Cell::new(0u32);
    let mut heartbeat =
        IntervalTimer::new(&clock, 100).with_callback(|| beats.set(beats.get() + 1));
    let mut sampler = IntervalTimer::new(&clock, 350);
    let mut report = IntervalTimer::new(&clock, 500);
    let mut stop = IntervalTimer::new(&clock, 2_000);

    // ======================================================================
    // 3. Superloop: nothing blocks except the simulated work
    // ======================================================================
    while !stop.is_done() {
        if heartbeat.is_ready() && heartbeat.is_even() {
            println!("   [{:>5} ms] heartbeat #{}", clock_now(&boot), heartbeat.count());
        }

        if sampler.is_done() {
            println!("   [{:>5} ms] sampling (delta {} ms)", clock_now(&boot), sampler.delta());
            std::thread::sleep(Duration::from_millis(30));
            sampler.reset_time();
        }

        if report.is_ready() {
            if report.count() == 2 {
                println!("   [{:>5} ms] pausing sampler", clock_now(&boot));
                sampler.pause();
            } else if report.count() == 3 {
                println!("   [{:>5} ms] resuming sampler", clock_now(&boot));
                sampler.resume();
            }
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    println!("\n   Heartbeats fired: {}", beats.get());
    println!("   Samples taken:    {}", sampler.count());
}

fn clock_now(boot: &Instant) -> u128 {
    boot.elapsed().as_millis()
}
