//! Frame pacing for bounds flushes.
//!
//! Hosts with a native frame callback hand out their own handles; the
//! desktop host has none, so [`IntervalFrameClock`] stands in with a
//! single deadline one frame interval after the request.

use std::time::{Duration, Instant};

/// A scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Timer-based frame source with at most one outstanding frame.
#[derive(Debug, Clone)]
pub struct IntervalFrameClock {
    interval: Duration,
    next_id: u64,
    scheduled: Option<(FrameHandle, Instant)>,
}

impl IntervalFrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 1,
            scheduled: None,
        }
    }

    /// Schedule a frame one interval from `now`, replacing any earlier one.
    pub fn request(&mut self, now: Instant) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.scheduled = Some((handle, now + self.interval));
        handle
    }

    pub fn cancel(&mut self, handle: FrameHandle) {
        if matches!(self.scheduled, Some((h, _)) if h == handle) {
            self.scheduled = None;
        }
    }

    /// Take the scheduled frame if its deadline has passed.
    pub fn poll_due(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.scheduled {
            Some((handle, deadline)) if now >= deadline => {
                self.scheduled = None;
                Some(handle)
            }
            _ => None,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduled.map(|(_, deadline)| deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn frame_fires_after_interval() {
        let now = Instant::now();
        let mut clock = IntervalFrameClock::new(FRAME);
        let handle = clock.request(now);
        assert_eq!(clock.poll_due(now + Duration::from_millis(10)), None);
        assert_eq!(clock.poll_due(now + FRAME), Some(handle));
        assert_eq!(clock.poll_due(now + FRAME * 2), None);
    }

    #[test]
    fn handles_are_unique() {
        let now = Instant::now();
        let mut clock = IntervalFrameClock::new(FRAME);
        let a = clock.request(now);
        let b = clock.request(now);
        assert_ne!(a, b);
    }

    #[test]
    fn cancel_matching_handle() {
        let now = Instant::now();
        let mut clock = IntervalFrameClock::new(FRAME);
        let handle = clock.request(now);
        clock.cancel(handle);
        assert!(clock.next_deadline().is_none());
        assert_eq!(clock.poll_due(now + FRAME), None);
    }

    #[test]
    fn cancel_stale_handle_keeps_current() {
        let now = Instant::now();
        let mut clock = IntervalFrameClock::new(FRAME);
        let stale = clock.request(now);
        let current = clock.request(now);
        clock.cancel(stale);
        assert_eq!(clock.poll_due(now + FRAME), Some(current));
    }
}
