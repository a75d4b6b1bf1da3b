//! Monotonic millisecond time sources.

use std::cell::Cell;
use std::rc::Rc;

// Use web-time for cross-platform time support (native + WASM)
use web_time::Instant;

/// Monotonic millisecond clock driving a scroll session.
///
/// Implementations should be non-decreasing. The velocity tracker discards
/// samples that go backwards in time, so a misbehaving clock degrades to
/// "scrolling stops" rather than anything fatal.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall clock anchored at construction time.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        self.origin.elapsed().as_millis() as i64
    }
}

/// Hand-driven clock for tests and hosts that pace time themselves.
///
/// Cloning yields another handle onto the same underlying time, so a test
/// can keep one handle and hand the other to a driver.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(ms: i64) -> Self {
        let clock = Self::default();
        clock.set(ms);
        clock
    }

    pub fn set(&self, ms: i64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}
