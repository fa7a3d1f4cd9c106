//! Cooperative control-loop scenarios on paused tokio time: the loop sleeps
//! between polls the way a firmware superloop would spend time on other work.
mod helpers;

use std::cell::Cell;

use helpers::TokioClock;
use nb_delay::IntervalTimer;
use tokio::time::{sleep, Duration};

#[tokio::test(start_paused = true)]
async fn blink_loop_across_rollover() {
    // Start just before the 32-bit counter wraps.
    let clock = TokioClock::starting_at(u32::MAX - 250);
    let toggles = Cell::new(0u32);
    let mut blink = IntervalTimer::new(&clock, 100).with_callback(|| toggles.set(toggles.get() + 1));

    for _ in 0..100 {
        sleep(Duration::from_millis(10)).await;
        blink.is_ready();
    }

    assert_eq!(blink.count(), 10);
    assert_eq!(toggles.get(), 10);
}

#[tokio::test(start_paused = true)]
async fn long_work_block_resets_manually() {
    let clock = TokioClock::starting_at(0);
    let mut sampler = IntervalTimer::new(&clock, 300);
    let mut runs = 0;

    for _ in 0..100 {
        sleep(Duration::from_millis(10)).await;
        if sampler.is_done() {
            // Work block longer than one poll period.
            sleep(Duration::from_millis(50)).await;
            runs += 1;
            sampler.reset_time();
        }
    }

    // Runs start at 300, 650 and 1000 ms; the work block delays the next poll.
    assert_eq!(runs, 3);
    assert_eq!(sampler.count(), 3);
}

#[tokio::test(start_paused = true)]
async fn paused_timer_holds_off_until_resumed() {
    let clock = TokioClock::starting_at(1_000);
    let mut heater = IntervalTimer::new(&clock, 200);
    heater.pause();

    sleep(Duration::from_millis(1_000)).await;
    assert!(!heater.is_ready());

    heater.resume();
    sleep(Duration::from_millis(199)).await;
    assert!(!heater.is_ready());
    sleep(Duration::from_millis(1)).await;
    assert!(heater.is_ready());
}
