use std::time::{Duration, Instant};

/// A monotonic, advisory deadline. The search checks `timeouts_soon` only at
/// child-boundary points inside alpha-beta — it never preempts mid-computation.
#[derive(Clone, Copy, Debug)]
pub struct Timer {
    start: Instant,
    limit: Duration,
    threshold: Duration,
}

impl Timer {
    /// The single declared "about to time out" margin; earlier sources
    /// disagreed between 70ms and 150ms, so this is the one value the engine
    /// actually uses, overridable per-instance via `with_threshold`.
    pub const DEFAULT_THRESHOLD: Duration = Duration::from_millis(150);

    pub fn new(limit: Duration) -> Timer {
        Timer { start: Instant::now(), limit, threshold: Timer::DEFAULT_THRESHOLD }
    }

    pub fn with_threshold(limit: Duration, threshold: Duration) -> Timer {
        Timer { start: Instant::now(), limit, threshold }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once there isn't comfortably enough time left for another
    /// child-boundary round trip before the hard deadline.
    pub fn timeouts_soon(&self) -> bool {
        self.elapsed() + self.threshold >= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_timer_with_ample_budget_is_not_timing_out() {
        let timer = Timer::new(Duration::from_secs(10));
        assert!(!timer.timeouts_soon());
    }

    #[test]
    fn zero_budget_times_out_immediately() {
        let timer = Timer::new(Duration::ZERO);
        assert!(timer.timeouts_soon());
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let timer = Timer::with_threshold(Duration::from_millis(50), Duration::from_millis(100));
        assert!(timer.timeouts_soon());
    }
}
