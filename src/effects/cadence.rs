//! Time gating shared by effects and the scheduler.

/// A minimum-elapsed-time gate.
///
/// `ready(now)` fires iff `now - last_fired >= interval`; only a true result
/// advances `last_fired`. An interval of zero fires on every check. The gate
/// substitutes for blocking in the cooperative loop: callers simply decline
/// to act when it has not elapsed.
#[derive(Clone, Copy, Debug)]
pub struct Cadence {
    interval_ms: u64,
    last_fired: u64,
}

impl Cadence {
    /// A gate that first fires once `interval_ms` has elapsed from time zero.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fired: 0,
        }
    }

    /// The configured interval.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Check the gate against a monotonic millisecond timestamp.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_fired) < self.interval_ms {
            return false;
        }
        self.last_fired = now_ms;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/cadence.rs"]
mod tests;
