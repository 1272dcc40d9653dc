//! Rotary encoders
//!
//! The left encoder drives the app switcher (or the volume on the nav layer), the right one
//! scrolls.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderId {
    Primary,
    Secondary,
}

impl EncoderId {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(EncoderId::Primary),
            1 => Some(EncoderId::Secondary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl From<bool> for Direction {
    /// From the host's `clockwise` flag
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }
}

/// Turns raw encoder pulses into detents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detents {
    resolution: u8,
    pulses: i8,
}

impl Detents {
    pub const fn new(resolution: u8) -> Self {
        Detents {
            resolution: if resolution == 0 { 1 } else { resolution },
            pulses: 0,
        }
    }

    /// Returns a direction once `resolution` pulses went the same way. Turning back drops the
    /// pulses counted so far.
    pub fn pulse(&mut self, direction: Direction) -> Option<Direction> {
        let step = match direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        };
        if self.pulses.signum() == -step {
            self.pulses = 0;
        }
        self.pulses = self.pulses.saturating_add(step);
        if self.pulses.unsigned_abs() >= self.resolution {
            self.pulses = 0;
            Some(direction)
        } else {
            None
        }
    }
}
