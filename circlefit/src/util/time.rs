use std::time::Duration;
use web_time::Instant;

/// Point in time after which a computation should wrap up.
/// Backed by [`web_time::Instant`] so the engine behaves identically on wasm targets.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Starts the clock now, expiring after `budget_ms` milliseconds
    pub fn from_now_ms(budget_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            budget: Duration::from_millis(budget_ms),
        }
    }

    /// A deadline which will not expire within any practical timeframe
    pub fn never() -> Self {
        Self {
            start: Instant::now(),
            budget: Duration::MAX,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.start.elapsed() > self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.start.elapsed())
    }
}
