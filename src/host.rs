//! What the keymap needs from the host firmware
//!
//! Matrix scanning, tap-hold resolution, the layer stack, HID transport and the LED and display
//! drivers all live in the host. The keymap only sees them through the traits below, and the
//! host hands an implementation of [`Host`] to every [`crate::Hooks`] call.

use core::ops::BitOr;

use heapless::Vec;
pub use usbd_human_interface_device::page::{Consumer, Keyboard};

use crate::keymap::layer::LayerState;
use crate::lighting::{Rgb, Segment};

/// Mouse keys the keymap can send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mouse {
    WheelUp,
    WheelDown,
    Button3,
}

/// Anything that can be pressed and released on the host's HID interfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Key(Keyboard),
    Consumer(Consumer),
    Mouse(Mouse),
}

impl From<Keyboard> for Code {
    fn from(key: Keyboard) -> Self {
        Code::Key(key)
    }
}

impl From<Consumer> for Code {
    fn from(code: Consumer) -> Self {
        Code::Consumer(code)
    }
}

impl From<Mouse> for Code {
    fn from(code: Mouse) -> Self {
        Code::Mouse(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Press(Code),
    Release(Code),
}

impl KeyEvent {
    pub fn code(&self) -> Code {
        match self {
            KeyEvent::Press(code) | KeyEvent::Release(code) => *code,
        }
    }

    pub fn is_press(&self) -> bool {
        matches!(self, KeyEvent::Press(_))
    }
}

/// HID modifier byte
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mods(pub u8);

impl Mods {
    pub const NONE: Mods = Mods(0);
    pub const LCTL: Mods = Mods(0x01);
    pub const LSFT: Mods = Mods(0x02);
    pub const LALT: Mods = Mods(0x04);
    pub const LGUI: Mods = Mods(0x08);
    pub const RCTL: Mods = Mods(0x10);
    pub const RSFT: Mods = Mods(0x20);
    pub const RALT: Mods = Mods(0x40);
    pub const RGUI: Mods = Mods(0x80);

    const fn any(self, mask: Mods) -> bool {
        self.0 & mask.0 != 0
    }

    pub const fn shift(self) -> bool {
        self.any(Mods(Self::LSFT.0 | Self::RSFT.0))
    }

    pub const fn ctrl(self) -> bool {
        self.any(Mods(Self::LCTL.0 | Self::RCTL.0))
    }

    pub const fn alt(self) -> bool {
        self.any(Mods(Self::LALT.0 | Self::RALT.0))
    }

    pub const fn gui(self) -> bool {
        self.any(Mods(Self::LGUI.0 | Self::RGUI.0))
    }

    /// The modifier bit of a modifier key, empty for any other key
    pub fn of(key: Keyboard) -> Mods {
        match key {
            Keyboard::LeftControl => Self::LCTL,
            Keyboard::LeftShift => Self::LSFT,
            Keyboard::LeftAlt => Self::LALT,
            Keyboard::LeftGUI => Self::LGUI,
            Keyboard::RightControl => Self::RCTL,
            Keyboard::RightShift => Self::RSFT,
            Keyboard::RightAlt => Self::RALT,
            Keyboard::RightGUI => Self::RGUI,
            _ => Self::NONE,
        }
    }
}

impl BitOr for Mods {
    type Output = Mods;

    fn bitor(self, rhs: Mods) -> Mods {
        Mods(self.0 | rhs.0)
    }
}

/// Synthetic key events
pub trait Hid {
    fn register(&mut self, code: Code);
    fn unregister(&mut self, code: Code);

    fn tap(&mut self, code: Code) {
        self.register(code);
        self.unregister(code);
    }
}

/// Read-only keyboard state owned by the host
pub trait Status {
    fn layer_state(&self) -> LayerState;
    fn default_layer_state(&self) -> LayerState;
    /// Modifiers currently held, not counting pending one-shots
    fn mods(&self) -> Mods;
    fn caps_word(&self) -> bool;
    /// Whether this half is the one connected over USB
    fn is_master(&self) -> bool;

    fn highest_layer(&self) -> u8 {
        (self.layer_state() | self.default_layer_state()).highest()
    }
}

pub trait Lighting {
    /// Turn the lighting on without persisting the setting
    fn enable_noeeprom(&mut self);
    fn suspend(&mut self);
    fn wakeup(&mut self);
    /// Register the per-layer segment tables of an underglow strip
    fn set_layers(&mut self, layers: &'static [&'static [Segment]]);
    fn set_layer_state(&mut self, index: u8, on: bool);
    /// Push the layer states set so far out to the LEDs
    fn flush(&mut self);
    /// Per-key colour, only meaningful on matrix lighting
    fn set_color(&mut self, index: u8, color: Rgb);
}

/// Small monochrome character display
pub trait Display {
    fn set_cursor(&mut self, col: u8, line: u8);
    fn write(&mut self, text: &str);
    /// Raw framebuffer bytes from the current position
    fn write_raw(&mut self, data: &[u8]);
}

pub trait Host: Hid + Status + Lighting + Display {}

impl<T: Hid + Status + Lighting + Display> Host for T {}

/// Records key events for a host that sends them in batches
///
/// Keeps the ordered events since the last [`EventQueue::clear`] and the codes currently held
/// down. Running out of space sets `overflow` instead of dropping the keyboard into a panic.
#[derive(Debug, Default)]
pub struct EventQueue<const N: usize> {
    events: Vec<KeyEvent, N>,
    held: Vec<Code, N>,
    pub overflow: bool,
}

impl<const N: usize> EventQueue<N> {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            held: Vec::new(),
            overflow: false,
        }
    }

    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    pub fn held(&self) -> &[Code] {
        &self.held
    }

    pub fn is_held(&self, code: Code) -> bool {
        self.held.contains(&code)
    }

    /// Keyboard page keys currently held, for building a report
    pub fn held_keys(&self) -> impl Iterator<Item = Keyboard> + '_ {
        self.held.iter().filter_map(|code| match code {
            Code::Key(key) => Some(*key),
            _ => None,
        })
    }

    /// Forgets the events, keeps what is held
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn push(&mut self, event: KeyEvent) {
        if self.events.push(event).is_err() {
            self.overflow = true;
        }
    }
}

impl<const N: usize> Hid for EventQueue<N> {
    fn register(&mut self, code: Code) {
        self.push(KeyEvent::Press(code));
        if !self.is_held(code) && self.held.push(code).is_err() {
            self.overflow = true;
        }
    }

    fn unregister(&mut self, code: Code) {
        self.push(KeyEvent::Release(code));
        self.held.retain(|held| held != &code);
    }
}
