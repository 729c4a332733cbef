use std::cell::Cell;
use std::time::{Duration, Instant};

/// Abstraction over time sources.
/// Implementations: SystemClock (production), MockClock (testing).
pub trait Clock {
    /// Time elapsed since an arbitrary epoch.
    fn now(&self) -> Duration;
}

/// Monotonic clock backed by `std::time::Instant`.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Manually advanced clock for deterministic testing.
#[derive(Default)]
pub struct MockClock {
    current: Cell<Duration>,
}

impl MockClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, t: Duration) {
        self.current.set(t);
    }

    pub fn advance(&self, delta: Duration) {
        self.current.set(self.current.get() + delta);
    }
}

impl Clock for MockClock {
    fn now(&self) -> Duration {
        self.current.get()
    }
}
