//! Cancellable scheduled callbacks driven by an external clock.
//!
//! Nothing here sleeps: the owner calls [`Timers::poll_due`] with the current
//! instant (once per frame in the UI, with synthetic instants in tests) and
//! dispatches whatever has come due.

use std::time::{
    Duration,
    Instant,
};

/// Length of the exit animation. Banner hide and advance both wait this long.
pub const JUDGEMENT_DELAY: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    HideBanner,
    Advance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy)]
struct ScheduledTimer {
    id: TimerId,
    kind: TimerKind,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<ScheduledTimer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire at `now + delay`. At most one timer per kind is
    /// pending, so rescheduling replaces the earlier one.
    pub fn schedule(&mut self, kind: TimerKind, now: Instant, delay: Duration) -> TimerId {
        self.cancel_kind(kind);

        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTimer { id, kind, due: now + delay });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        self.pending.len() != before
    }

    pub fn cancel_kind(&mut self, kind: TimerKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.kind != kind);
        self.pending.len() != before
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|timer| timer.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|timer| timer.due).min()
    }

    /// Removes and returns every timer due at `now`, earliest first.
    pub fn poll_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<ScheduledTimer> =
            self.pending.iter().copied().filter(|timer| timer.due <= now).collect();
        if due.is_empty() {
            return Vec::new();
        }

        self.pending.retain(|timer| timer.due > now);
        due.sort_by_key(|timer| (timer.due, timer.id.0));
        due.into_iter().map(|timer| timer.kind).collect()
    }
}
