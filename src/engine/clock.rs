//! Clocks that space out animation steps.

use std::time::{Duration, Instant};

/// Source of the delay between two animation steps.
pub trait Clock {
    /// Block until `delay` has passed.
    fn wait(&mut self, delay: Duration);

    /// Time passed since the clock was created.
    fn elapsed(&self) -> Duration;
}

/// Wall clock; waiting sleeps the current thread.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Virtual clock; waiting advances time instantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
    waits: usize,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of waits performed.
    pub fn waits(&self) -> usize {
        self.waits
    }
}

impl Clock for ManualClock {
    fn wait(&mut self, delay: Duration) {
        self.now += delay;
        self.waits += 1;
    }

    fn elapsed(&self) -> Duration {
        self.now
    }
}
