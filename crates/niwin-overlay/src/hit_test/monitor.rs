//! Fixed-cadence timer for the pass-through hit test.
//!
//! The monitor does not own a thread. The host event loop asks it whether
//! a tick is due and sleeps until [`PassThroughMonitor::next_deadline`].

use std::time::{Duration, Instant};

/// Periodic timer state. Stopped until [`start`](Self::start) is called.
#[derive(Debug, Clone)]
pub struct PassThroughMonitor {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl PassThroughMonitor {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Arm the timer. Returns `false` if it was already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.next_tick = Some(now + self.interval);
        true
    }

    /// Disarm the timer. Safe to call any number of times.
    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Consume a due tick, re-arming for one interval after `now`.
    ///
    /// Missed ticks are not replayed; a late wake-up yields a single tick.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(deadline) if now >= deadline => {
                self.next_tick = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(80);

    #[test]
    fn new_monitor_is_stopped() {
        let monitor = PassThroughMonitor::new(INTERVAL);
        assert!(!monitor.is_running());
        assert!(monitor.next_deadline().is_none());
    }

    #[test]
    fn start_arms_one_interval_ahead() {
        let now = Instant::now();
        let mut monitor = PassThroughMonitor::new(INTERVAL);
        assert!(monitor.start(now));
        assert_eq!(monitor.next_deadline(), Some(now + INTERVAL));
    }

    #[test]
    fn start_twice_is_noop() {
        let now = Instant::now();
        let mut monitor = PassThroughMonitor::new(INTERVAL);
        assert!(monitor.start(now));
        assert!(!monitor.start(now + INTERVAL));
        assert_eq!(monitor.next_deadline(), Some(now + INTERVAL));
    }

    #[test]
    fn not_due_before_deadline() {
        let now = Instant::now();
        let mut monitor = PassThroughMonitor::new(INTERVAL);
        monitor.start(now);
        assert!(!monitor.poll_due(now + Duration::from_millis(79)));
    }

    #[test]
    fn due_at_deadline_and_rearms() {
        let now = Instant::now();
        let mut monitor = PassThroughMonitor::new(INTERVAL);
        monitor.start(now);
        let tick = now + INTERVAL;
        assert!(monitor.poll_due(tick));
        assert!(!monitor.poll_due(tick));
        assert_eq!(monitor.next_deadline(), Some(tick + INTERVAL));
    }

    #[test]
    fn late_wakeup_yields_single_tick() {
        let now = Instant::now();
        let mut monitor = PassThroughMonitor::new(INTERVAL);
        monitor.start(now);
        let late = now + INTERVAL * 5;
        assert!(monitor.poll_due(late));
        assert!(!monitor.poll_due(late));
    }

    #[test]
    fn stop_is_idempotent() {
        let now = Instant::now();
        let mut monitor = PassThroughMonitor::new(INTERVAL);
        monitor.start(now);
        monitor.stop();
        monitor.stop();
        assert!(!monitor.is_running());
        assert!(!monitor.poll_due(now + INTERVAL));
    }
}
