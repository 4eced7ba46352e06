use std::time::{Duration, Instant};

/// How long to wait for input when no tick is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// A repeating tick on the event loop.  Once cancelled it stays quiet until
/// re-armed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Ticker {
            interval,
            next: Some(now + interval),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Time left until the next tick, for use as an input poll timeout
    pub fn timeout(&self, now: Instant) -> Duration {
        match self.next {
            Some(next) => next.saturating_duration_since(now),
            None => IDLE_POLL,
        }
    }

    /// Returns `true` (and schedules the following tick) if a tick is due
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn rearm(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(50);

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);
        assert!(!ticker.fire(start));
        assert!(!ticker.fire(start + Duration::from_millis(49)));
        assert!(ticker.fire(start + INTERVAL));
        assert!(!ticker.fire(start + INTERVAL));
        assert!(ticker.fire(start + INTERVAL * 2));
    }

    #[test]
    fn timeout_counts_down() {
        let start = Instant::now();
        let ticker = Ticker::new(INTERVAL, start);
        assert_eq!(ticker.timeout(start), INTERVAL);
        assert_eq!(
            ticker.timeout(start + Duration::from_millis(20)),
            Duration::from_millis(30)
        );
        assert_eq!(ticker.timeout(start + INTERVAL * 3), Duration::ZERO);
    }

    #[test]
    fn cancelled_ticker_never_fires() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL, start);
        ticker.cancel();
        assert!(!ticker.is_armed());
        assert!(!ticker.fire(start + INTERVAL * 10));
        assert_eq!(ticker.timeout(start), IDLE_POLL);

        let later = start + INTERVAL * 10;
        ticker.rearm(later);
        assert!(ticker.is_armed());
        assert!(!ticker.fire(later));
        assert!(ticker.fire(later + INTERVAL));
    }
}
