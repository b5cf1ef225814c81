use std::time::Duration;

use crate::utils::{AppInstant, remaining_until};

/// Fixed-period task polled from the frame loop.
///
/// `start` makes a tick due immediately; afterwards one tick falls due every
/// `period`. A poll that arrives late fires once and re-arms from the poll
/// time, so missed periods are not replayed.
#[derive(Debug, Clone)]
pub struct KpiScheduler {
    period: Duration,
    next_due: Option<AppInstant>,
}

impl KpiScheduler {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn start(&mut self, now: AppInstant) {
        self.next_due = Some(now);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// True when a tick is due at `now`; the next one is then scheduled.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = due + self.period;
        self.next_due = Some(if next > now { next } else { now + self.period });
        true
    }

    pub fn time_until_next(&self, now: AppInstant) -> Option<Duration> {
        self.next_due.map(|due| remaining_until(due, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(5);

    #[test]
    fn test_idle_until_started() {
        let mut s = KpiScheduler::new(PERIOD);
        let t0 = AppInstant::now();
        assert!(!s.is_running());
        assert!(!s.poll(t0));
        assert_eq!(s.time_until_next(t0), None);
    }

    #[test]
    fn test_immediate_then_periodic() {
        let mut s = KpiScheduler::new(PERIOD);
        let t0 = AppInstant::now();
        s.start(t0);
        assert!(s.poll(t0));
        assert!(!s.poll(t0));
        assert!(!s.poll(t0 + Duration::from_millis(4_999)));
        assert!(s.poll(t0 + PERIOD));
        assert!(!s.poll(t0 + PERIOD));
        assert!(s.poll(t0 + PERIOD * 2));
    }

    #[test]
    fn test_late_poll_fires_once() {
        let mut s = KpiScheduler::new(PERIOD);
        let t0 = AppInstant::now();
        s.start(t0);
        assert!(s.poll(t0));
        let late = t0 + Duration::from_secs(23);
        assert!(s.poll(late));
        assert!(!s.poll(late));
        assert_eq!(s.time_until_next(late), Some(PERIOD));
    }

    #[test]
    fn test_stop_cancels() {
        let mut s = KpiScheduler::new(PERIOD);
        let t0 = AppInstant::now();
        s.start(t0);
        s.poll(t0);
        s.stop();
        assert!(!s.is_running());
        assert!(!s.poll(t0 + PERIOD * 3));
    }

    #[test]
    fn test_time_until_next() {
        let mut s = KpiScheduler::new(PERIOD);
        let t0 = AppInstant::now();
        s.start(t0);
        s.poll(t0);
        assert_eq!(
            s.time_until_next(t0 + Duration::from_secs(2)),
            Some(Duration::from_secs(3))
        );
    }
}
