//! The keymap's side of the host firmware's hooks
//!
//! The host owns one [`InputAdapter`] and calls the [`Hooks`] from its scan loop, handing over
//! itself as the [`Host`] and the current time.

use crate::activity::ActivityTimer;
use crate::config::{Config, Instant, LightingMode};
use crate::encoder::{Detents, Direction, EncoderId};
use crate::host::{Consumer, Host, Mods, Mouse};
use crate::keymap::layer::LayerState;
use crate::keymap::Layer;
use crate::lighting;
use crate::log::info;
use crate::oled::{self, Rotation};
use crate::session::AppSwitcher;

/// Callbacks the host makes into the keymap
///
/// Hooks returning `bool` report whether the keymap handled the event, in which case the host
/// skips its own default behaviour.
pub trait Hooks<H: Host> {
    /// Once, after the host brought up its drivers
    fn post_init(&mut self, host: &mut H);

    /// After the host processed a key event
    fn post_process_record(&mut self, host: &mut H, pressed: bool, now: Instant);

    /// One encoder detent
    fn encoder_update(&mut self, host: &mut H, index: u8, clockwise: bool, now: Instant) -> bool;

    /// After the host processed an encoder detent
    fn post_encoder_update(&mut self, host: &mut H, now: Instant);

    /// Once per scan cycle
    fn scan(&mut self, host: &mut H, now: Instant);

    fn layer_state_set(&mut self, host: &mut H, state: LayerState) -> LayerState;

    fn default_layer_state_set(&mut self, host: &mut H, state: LayerState) -> LayerState;

    fn oneshot_mods_changed(&mut self, host: &mut H, mods: Mods);

    /// Redraw the status display
    fn paint_display(&mut self, host: &mut H) -> bool;

    /// Per-key lighting, on every lighting frame
    fn paint_lighting(&mut self, host: &mut H, state: LayerState) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputAdapter {
    config: Config,
    switcher: AppSwitcher,
    activity: ActivityTimer,
    detents: [Detents; 2],
    oneshot_shift: bool,
}

impl InputAdapter {
    pub const fn new(config: Config, now: Instant) -> Self {
        InputAdapter {
            config,
            switcher: AppSwitcher::new(),
            activity: ActivityTimer::new(now),
            detents: [Detents::new(config.encoder_resolution); 2],
            oneshot_shift: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn switcher(&self) -> &AppSwitcher {
        &self.switcher
    }

    pub fn activity(&self) -> &ActivityTimer {
        &self.activity
    }

    pub fn oneshot_shift(&self) -> bool {
        self.oneshot_shift
    }

    pub fn display_rotation(&self) -> Rotation {
        oled::ROTATION
    }

    /// For hosts that report raw encoder pulses instead of detents: counts them and runs
    /// [`Hooks::encoder_update`] and [`Hooks::post_encoder_update`] once per detent. Returns
    /// whether a detent was handled.
    pub fn encoder_pulse<H: Host>(
        &mut self,
        host: &mut H,
        index: u8,
        clockwise: bool,
        now: Instant,
    ) -> bool {
        let Some(detents) = self.detents.get_mut(index as usize) else {
            return false;
        };
        let Some(direction) = detents.pulse(Direction::from(clockwise)) else {
            return false;
        };
        let handled = self.encoder_update(host, index, direction == Direction::Clockwise, now);
        self.post_encoder_update(host, now);
        handled
    }

    fn lighting_on(&self) -> bool {
        self.config.lighting != LightingMode::Off
    }

    fn scroll<H: Host>(&self, host: &mut H, direction: Direction) {
        let wheel = match direction {
            Direction::Clockwise => Mouse::WheelUp,
            Direction::CounterClockwise => Mouse::WheelDown,
        };
        for _ in 0..self.config.scroll_burst {
            host.tap(wheel.into());
        }
    }
}

impl<H: Host> Hooks<H> for InputAdapter {
    fn post_init(&mut self, host: &mut H) {
        info!("keymap: init");
        if self.config.lighting == LightingMode::Underglow {
            lighting::init_underglow(host);
        }
    }

    fn post_process_record(&mut self, host: &mut H, pressed: bool, now: Instant) {
        if pressed && self.lighting_on() {
            self.activity.refresh(host, now);
        }
    }

    fn encoder_update(&mut self, host: &mut H, index: u8, clockwise: bool, now: Instant) -> bool {
        if !self.config.encoder {
            return false;
        }
        let direction = Direction::from(clockwise);
        match EncoderId::from_index(index) {
            Some(EncoderId::Primary) if Layer::from_index(host.highest_layer()) == Some(Layer::Nav) => {
                let volume = match direction {
                    Direction::Clockwise => Consumer::VolumeIncrement,
                    Direction::CounterClockwise => Consumer::VolumeDecrement,
                };
                host.tap(volume.into());
            }
            Some(EncoderId::Primary) => self.switcher.step(host, direction, now),
            Some(EncoderId::Secondary) => self.scroll(host, direction),
            None => return false,
        }
        true
    }

    fn post_encoder_update(&mut self, host: &mut H, now: Instant) {
        if self.lighting_on() {
            self.activity.refresh(host, now);
        }
    }

    fn scan(&mut self, host: &mut H, now: Instant) {
        if self.config.encoder {
            self.switcher.expire(host, now, self.config.session_timeout);
        }
        if let (Some(timeout), true) = (self.config.idle_timeout, self.lighting_on()) {
            self.activity.check(host, now, timeout);
        }
    }

    fn layer_state_set(&mut self, host: &mut H, state: LayerState) -> LayerState {
        if self.config.lighting == LightingMode::Underglow {
            lighting::show_layers(host, state);
        }
        state
    }

    fn default_layer_state_set(&mut self, host: &mut H, state: LayerState) -> LayerState {
        if self.config.lighting == LightingMode::Underglow {
            lighting::show_default_layer(host, state);
        }
        state
    }

    fn oneshot_mods_changed(&mut self, host: &mut H, mods: Mods) {
        if self.config.display {
            self.oneshot_shift = oled::show_oneshot(host, mods);
        }
    }

    fn paint_display(&mut self, host: &mut H) -> bool {
        if !self.config.display {
            return false;
        }
        if host.is_master() {
            oled::paint_master(host, self.oneshot_shift);
        } else {
            oled::paint_slave(host);
        }
        true
    }

    fn paint_lighting(&mut self, host: &mut H, state: LayerState) -> bool {
        if self.config.lighting != LightingMode::Matrix {
            return false;
        }
        if let Some(glow) = oled::layer_view(state.highest()).glow {
            glow.gradient.paint(host);
        }
        true
    }
}
