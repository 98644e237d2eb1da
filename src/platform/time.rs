//! Time sources for the host loop
//!
//! The simulation takes `now` as an argument; these decide where it comes from.

use std::time::Instant;

/// Seconds since the clock started
pub trait Clock {
    fn now(&self) -> f64;

    /// Whole milliseconds since start, for animation cycling
    fn elapsed_ms(&self) -> u64 {
        (self.now().max(0.0) * 1000.0) as u64
    }
}

/// Wall clock backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    startup: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            startup: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.startup.elapsed().as_secs_f64()
    }
}

/// Clock that only moves when told to; used for headless runs
#[derive(Debug, Clone, Copy)]
pub struct SteppedClock {
    now: f64,
    step: f64,
}

impl SteppedClock {
    /// Clock at zero advancing `step` seconds per `advance`
    pub fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }

    /// Move forward one step
    pub fn advance(&mut self) {
        self.now += self.step;
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> f64 {
        self.now
    }
}
