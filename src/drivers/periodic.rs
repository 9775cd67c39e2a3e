//! Fixed-period tick driver.
//!
//! Calls a closure once per period against absolute deadlines, so a slow
//! tick shortens the following sleep instead of shifting the whole schedule.
//! A tick that overruns by more than a full period is not replayed; the
//! schedule restarts from now. Calls never overlap.

use core::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::MIN_TICK_PERIOD_MS;

pub struct PeriodicDriver {
    period: Duration,
}

impl PeriodicDriver {
    /// Build a driver, raising `period_ms` to the 10 ms floor if needed.
    pub fn new(period_ms: u32) -> Self {
        let ms = if period_ms < MIN_TICK_PERIOD_MS {
            warn!(
                "periodic: {}ms below the {}ms floor, clamping",
                period_ms, MIN_TICK_PERIOD_MS
            );
            MIN_TICK_PERIOD_MS
        } else {
            period_ms
        };
        Self {
            period: Duration::from_millis(u64::from(ms)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Tick until `stop` is set. Returns the number of ticks executed.
    pub fn run(&self, stop: &AtomicBool, mut tick: impl FnMut()) -> u64 {
        info!("periodic: ticking every {:?}", self.period);
        let mut ticks = 0u64;
        let mut deadline = Instant::now();

        while !stop.load(Ordering::Acquire) {
            tick();
            ticks += 1;

            deadline += self.period;
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            } else if now - deadline > self.period {
                warn!("periodic: tick {} overran by {:?}", ticks, now - deadline);
                deadline = now;
            }
        }

        info!("periodic: stopped after {} ticks", ticks);
        ticks
    }
}
