//! Time source for the behavior controllers
//!
//! Controllers never read the wall clock themselves; they receive `now_ms`
//! values from the event loop. Tests pass literal milliseconds instead.

use std::time::Instant;

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds elapsed since the clock was created
    fn now_ms(&self) -> u64;
}

/// Wall-clock implementation backed by `Instant`
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}
