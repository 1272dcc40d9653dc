//! App switcher driven by the primary encoder
//!
//! Turning the encoder opens a session: the session modifier goes down and stays down while
//! each detent taps the step key, so the host's app switcher stays open. Clockwise switches
//! forwards (shift held as well), counter-clockwise backwards. A session that sees no detent
//! for the session timeout is closed from the scan loop, releasing every modifier it pressed.

use crate::config::{Duration, Instant, SESSION_MODIFIER, SHIFT_MODIFIER, STEP_KEY};
use crate::encoder::Direction;
use crate::host::{Code, Hid};
use crate::log::debug;

const SESSION: Code = Code::Key(SESSION_MODIFIER);
const SHIFT: Code = Code::Key(SHIFT_MODIFIER);
const STEP: Code = Code::Key(STEP_KEY);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Idle;

/// Session modifier held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backward {
    last_tick: Instant,
}

/// Session modifier and shift held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forward {
    last_tick: Instant,
}

impl Idle {
    fn open_backward<H: Hid>(&self, hid: &mut H, now: Instant) -> Backward {
        hid.register(SESSION);
        Backward { last_tick: now }
    }

    fn open_forward<H: Hid>(&self, hid: &mut H, now: Instant) -> Forward {
        hid.register(SESSION);
        hid.register(SHIFT);
        Forward { last_tick: now }
    }
}

impl Backward {
    fn extend(&self, now: Instant) -> Backward {
        Backward { last_tick: now }
    }

    fn reverse<H: Hid>(&self, hid: &mut H, now: Instant) -> Forward {
        hid.register(SHIFT);
        Forward { last_tick: now }
    }

    fn close<H: Hid>(&self, hid: &mut H) -> Idle {
        hid.unregister(SESSION);
        Idle
    }
}

impl Forward {
    fn extend(&self, now: Instant) -> Forward {
        Forward { last_tick: now }
    }

    fn reverse<H: Hid>(&self, hid: &mut H, now: Instant) -> Backward {
        hid.unregister(SHIFT);
        Backward { last_tick: now }
    }

    fn close<H: Hid>(&self, hid: &mut H) -> Idle {
        hid.unregister(SHIFT);
        hid.unregister(SESSION);
        Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppSwitcher {
    Idle(Idle),
    Backward(Backward),
    Forward(Forward),
}

impl Default for AppSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

impl AppSwitcher {
    pub const fn new() -> Self {
        Self::Idle(Idle)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle(_))
    }

    /// A session switching backwards is open
    pub fn is_backward(&self) -> bool {
        matches!(self, Self::Backward(_))
    }

    /// A session switching forwards is open
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward(_))
    }

    /// Time of the detent that last extended the open session
    pub fn last_tick(&self) -> Option<Instant> {
        match self {
            Self::Idle(_) => None,
            Self::Backward(Backward { last_tick }) | Self::Forward(Forward { last_tick }) => {
                Some(*last_tick)
            }
        }
    }

    /// One detent: open or turn the session as needed, then tap the step key
    pub fn step<H: Hid>(&mut self, hid: &mut H, direction: Direction, now: Instant) {
        *self = match (*self, direction) {
            (Self::Idle(state), Direction::CounterClockwise) => {
                debug!("app switcher: open backwards");
                Self::Backward(state.open_backward(hid, now))
            }
            (Self::Idle(state), Direction::Clockwise) => {
                debug!("app switcher: open forwards");
                Self::Forward(state.open_forward(hid, now))
            }
            (Self::Backward(state), Direction::CounterClockwise) => {
                Self::Backward(state.extend(now))
            }
            (Self::Backward(state), Direction::Clockwise) => {
                Self::Forward(state.reverse(hid, now))
            }
            (Self::Forward(state), Direction::Clockwise) => Self::Forward(state.extend(now)),
            (Self::Forward(state), Direction::CounterClockwise) => {
                Self::Backward(state.reverse(hid, now))
            }
        };
        hid.tap(STEP);
    }

    /// Closes the session once more than `timeout` passed since its last detent. Returns
    /// whether it closed.
    pub fn expire<H: Hid>(&mut self, hid: &mut H, now: Instant, timeout: Duration) -> bool {
        let expired = self
            .last_tick()
            .and_then(|last_tick| now.checked_duration_since(last_tick))
            .map_or(false, |elapsed| elapsed > timeout);
        if !expired {
            return false;
        }
        *self = match *self {
            Self::Idle(state) => Self::Idle(state),
            Self::Backward(state) => Self::Idle(state.close(hid)),
            Self::Forward(state) => Self::Idle(state.close(hid)),
        };
        debug!("app switcher: closed at {}ms", now.ticks());
        true
    }
}
