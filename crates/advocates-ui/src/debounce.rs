use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before a search is issued.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Single-slot trailing-edge debouncer.
///
/// Holds at most one pending value. Scheduling replaces whatever was pending
/// and restarts the delay. Time is passed in by the caller.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value with `value`, due `delay` after `now`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending value if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now >= deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEBOUNCE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_after_delay() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        d.schedule("a", t0);

        assert_eq!(d.take_due(t0 + ms(299)), None);
        assert_eq!(d.take_due(t0 + ms(300)), Some("a"));
        assert!(!d.is_pending());
        assert_eq!(d.take_due(t0 + ms(900)), None);
    }

    #[test]
    fn test_reschedule_replaces_and_restarts() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        d.schedule("a", t0);
        d.schedule("ab", t0 + ms(100));
        d.schedule("abc", t0 + ms(200));

        assert_eq!(d.take_due(t0 + ms(400)), None);
        assert_eq!(d.deadline(), Some(t0 + ms(500)));
        assert_eq!(d.take_due(t0 + ms(500)), Some("abc"));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(ms(10));
        d.schedule(1, t0);
        d.cancel();

        assert!(!d.is_pending());
        assert_eq!(d.take_due(t0 + ms(1000)), None);
    }
}
