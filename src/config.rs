//! Build time configuration

use crate::host::Keyboard;

/// Milliseconds since the host's timer started, wrapping at `u32::MAX`
pub type Instant = fugit::TimerInstantU32<1_000>;
pub type Duration = fugit::MillisDurationU32;

/// Key held down for as long as an app switcher session is open (Cmd on macOS)
pub const SESSION_MODIFIER: Keyboard = Keyboard::LeftGUI;
/// Held on top of the session modifier while switching forwards
pub const SHIFT_MODIFIER: Keyboard = Keyboard::LeftShift;
/// Tapped once per detent to move to the next application
pub const STEP_KEY: Keyboard = Keyboard::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightingMode {
    Off,
    /// A short LED strip, coloured through per-layer segment tables
    Underglow,
    /// Per-key LEDs, repainted with a per-layer hue gradient
    Matrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Time after the last detent before the app switcher lets go of the modifiers
    pub session_timeout: Duration,
    /// Time without key presses or encoder turns before the lighting is put to sleep, `None`
    /// keeps it on
    pub idle_timeout: Option<Duration>,
    /// Number of wheel events sent per detent of the secondary encoder
    pub scroll_burst: u8,
    /// Raw encoder pulses per detent
    pub encoder_resolution: u8,
    pub lighting: LightingMode,
    pub encoder: bool,
    pub display: bool,
}

impl Config {
    /// Split build with an underglow strip and fast (3x) scrolling
    pub const UNDERGLOW: Config = Config {
        session_timeout: Duration::from_ticks(1_000),
        idle_timeout: Some(Duration::from_ticks(300_000)),
        scroll_burst: 3,
        encoder_resolution: 4,
        lighting: LightingMode::Underglow,
        encoder: true,
        display: true,
    };

    /// Split build with per-key lighting and single step scrolling
    pub const MATRIX: Config = Config {
        scroll_burst: 1,
        lighting: LightingMode::Matrix,
        ..Self::UNDERGLOW
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::UNDERGLOW
    }
}
