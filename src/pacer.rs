use std::time::{Duration, Instant};

/// Keeps the loop on a fixed tick rate by sleeping until the next boundary.
/// A tick that overruns its slot pushes the schedule back instead of
/// triggering a burst of catch-up ticks.
#[derive(Debug)]
pub struct TickPacer {
    period: Duration,
    next_tick: Instant,
}

impl TickPacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_tick: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// How long until the next boundary, measured from `now`
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Blocks until the next tick boundary
    pub fn wait(&mut self) {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.advance(Instant::now());
    }

    fn advance(&mut self, now: Instant) {
        self.next_tick = self.next_tick.max(now) + self.period;
    }
}
