use std::time::{Duration, Instant};

/// Real-time budget the host grants the agent for one decision.
#[derive(Debug, Clone, Copy)]
pub struct MarioTimer {
    started: Instant,
    budget: Duration,
}

impl MarioTimer {
    pub fn new(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// A timer that never runs out.
    pub fn unbounded() -> Self {
        Self::new(Duration::MAX)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed() > self.budget
    }
}
