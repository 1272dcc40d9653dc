//! Colemak-DH keymap for the Kyria split keyboard, plus the small pieces of state the keymap
//! hangs off the host firmware's hooks: an encoder driven app switcher, idle suspend of the
//! lighting, layer coloured lighting and a status display.
#![no_std]

pub mod activity;
pub mod adapter;
pub mod config;
pub mod encoder;
pub mod host;
pub mod indicator;
pub mod keymap;
pub mod lighting;
pub mod oled;
pub mod session;

#[cfg(test)]
mod mock;

#[cfg(feature = "defmt")]
mod log {
    pub use defmt::debug;
    pub use defmt::info;
}

#[cfg(not(feature = "defmt"))]
mod log {
    pub use log::debug;
    pub use log::info;
}

pub use adapter::{Hooks, InputAdapter};
pub use config::{Config, Duration, Instant};
pub use host::{Code, EventQueue, Host, KeyEvent, Mods};
