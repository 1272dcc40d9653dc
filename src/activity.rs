//! Puts the lighting to sleep after a stretch without key presses or encoder turns

use crate::config::{Duration, Instant};
use crate::host::Lighting;
use crate::log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityTimer {
    last_activity: Instant,
    suspended: bool,
}

impl ActivityTimer {
    pub const fn new(now: Instant) -> Self {
        ActivityTimer {
            last_activity: now,
            suspended: false,
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    /// Something happened: restart the idle clock and wake the lighting if it was asleep
    pub fn refresh<L: Lighting>(&mut self, lighting: &mut L, now: Instant) {
        self.last_activity = now;
        if self.suspended {
            self.suspended = false;
            debug!("lighting: wake up");
            lighting.wakeup();
        }
    }

    /// Suspends the lighting once more than `timeout` passed since the last activity. Returns
    /// whether it did.
    pub fn check<L: Lighting>(&mut self, lighting: &mut L, now: Instant, timeout: Duration) -> bool {
        if self.suspended {
            return false;
        }
        let idle = now
            .checked_duration_since(self.last_activity)
            .map_or(false, |elapsed| elapsed > timeout);
        if idle {
            debug!("lighting: suspend at {}ms", now.ticks());
            lighting.suspend();
            self.suspended = true;
        }
        idle
    }
}
