use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(300);

/// Short-lived "recording" flag shown after each click.
///
/// Every [`begin`](Self::begin) schedules its own clear. The clears are not
/// coordinated: the flag drops at the first deadline that passes, even if a
/// later click set it again in the meantime.
#[derive(Debug)]
pub struct BusyIndicator {
    feedback: Duration,
    busy: bool,
    pending_clears: VecDeque<Instant>,
}

impl BusyIndicator {
    pub fn new(feedback: Duration) -> Self {
        Self {
            feedback,
            busy: false,
            pending_clears: VecDeque::new(),
        }
    }

    pub fn begin(&mut self, now: Instant) {
        self.busy = true;
        self.pending_clears.push_back(now + self.feedback);
    }

    /// Fires every clear due at `now`. Returns whether the flag changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut fired = false;
        while let Some(deadline) = self.pending_clears.front().copied()
            && deadline <= now
        {
            self.pending_clears.pop_front();
            fired = true;
        }
        if fired && self.busy {
            self.busy = false;
            return true;
        }
        false
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_clears.front().copied()
    }
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK)
    }
}
