//! One-shot round-advance timer

use std::time::Duration;

/// One-shot delay driven by the host's clock.
///
/// Owned by the controller, so it can never fire after its owner is gone;
/// `cancel` drops a pending deadline without firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceTimer {
    remaining: Option<Duration>,
}

impl AdvanceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the timer
    pub fn arm(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advance by `dt`; returns true exactly once, on the step the deadline passes
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(left) = self.remaining else {
            return false;
        };
        if dt >= left {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(left - dt);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_never_fires() {
        let mut t = AdvanceTimer::new();
        assert!(!t.is_pending());
        assert!(!t.advance(Duration::from_secs(10)));
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let mut t = AdvanceTimer::new();
        t.arm(Duration::from_millis(2000));
        assert!(!t.advance(Duration::from_millis(1999)));
        assert_eq!(t.remaining(), Some(Duration::from_millis(1)));
        assert!(t.advance(Duration::from_millis(1)));
        assert!(!t.is_pending());
        assert!(!t.advance(Duration::from_millis(5000)));
    }

    #[test]
    fn test_overshoot_still_fires() {
        let mut t = AdvanceTimer::new();
        t.arm(Duration::from_millis(100));
        assert!(t.advance(Duration::from_secs(1)));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut t = AdvanceTimer::new();
        t.arm(Duration::from_millis(100));
        t.advance(Duration::from_millis(50));
        t.cancel();
        assert!(!t.advance(Duration::from_millis(100)));
        assert_eq!(t.remaining(), None);
    }
}
