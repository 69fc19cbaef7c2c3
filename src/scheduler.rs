//! Fixed-period tick source
//!
//! The event loop sleeps until [`TickScheduler::deadline`], runs the tick
//! handler when [`TickScheduler::is_due`], then calls
//! [`TickScheduler::advance`]. Deadlines are spaced from the previous
//! deadline, not from when the tick actually ran, so the rate does not
//! drift with handler latency. A loop that falls more than one period
//! behind resynchronises instead of bursting catch-up ticks.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    period: Duration,
    next: Instant,
    ticks: u64,
}

impl TickScheduler {
    /// The first tick is due immediately at `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now,
            ticks: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick should run.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Number of ticks issued so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Records a tick at `now` and schedules the following one.
    pub fn advance(&mut self, now: Instant) {
        self.ticks += 1;
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
    }
}
