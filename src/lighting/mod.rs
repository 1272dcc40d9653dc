//! Layer colours
//!
//! Two kinds of builds: a short underglow strip with one segment table per layer that the host
//! switches on and off, and per-key LEDs that get a hue gradient painted on every frame.

use crate::host::Lighting;
use crate::keymap::layer::LayerState;
use crate::keymap::Layer;

pub mod gradient;
pub mod segments;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

pub const C64BLUE: Hsv = Hsv::new(160, 255, 255);
pub const PHASER: Hsv = Hsv::new(13, 255, 255);
pub const GRAPE: Hsv = Hsv::new(202, 255, 255);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Hsv { h, s, v }
    }

    pub const fn with_hue(self, h: u8) -> Self {
        Hsv { h, ..self }
    }

    /// 8-bit fixed point conversion: six hue regions 43 wide, no gamma
    pub const fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;
        if s == 0 {
            return Rgb::new(v, v, v);
        }
        let (h, s, v) = (h as u16, s as u16, v as u16);
        let region = h / 43;
        let remainder = (h - region * 43) * 6;

        let p = ((v * (255 - s)) >> 8) as u8;
        let q = ((v * (255 - ((s * remainder) >> 8))) >> 8) as u8;
        let t = ((v * (255 - ((s * (255 - remainder)) >> 8))) >> 8) as u8;
        let v = v as u8;

        match region {
            0 => Rgb::new(v, t, p),
            1 => Rgb::new(q, v, p),
            2 => Rgb::new(p, v, t),
            3 => Rgb::new(p, q, v),
            4 => Rgb::new(t, p, v),
            _ => Rgb::new(v, p, q),
        }
    }
}

/// A run of `count` LEDs from `start`, all one colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub start: u8,
    pub count: u8,
    pub color: Hsv,
}

/// How a layer lights up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glow {
    /// Underglow segment table switched on while the layer is
    pub segment: u8,
    /// Gradient painted across the per-key LEDs
    pub gradient: gradient::Gradient,
}

pub const fn glow(layer: Layer) -> Glow {
    match layer {
        Layer::ColemakDh => Glow {
            segment: 0,
            gradient: gradient::Gradient::new(C64BLUE, -40),
        },
        Layer::Sym => Glow {
            segment: 1,
            gradient: gradient::Gradient::new(PHASER, 10),
        },
        Layer::Nav => Glow {
            segment: 2,
            gradient: gradient::Gradient::new(GRAPE, -30),
        },
    }
}

/// Underglow: hand over the segment tables and turn the strip on
pub fn init_underglow<L: Lighting>(lighting: &mut L) {
    lighting.set_layers(&segments::LAYERS);
    lighting.enable_noeeprom();
}

/// Underglow: the base segment follows the default layer
pub fn show_default_layer<L: Lighting>(lighting: &mut L, state: LayerState) {
    let base = Layer::ColemakDh;
    lighting.set_layer_state(glow(base).segment, state.is_on(base));
}

/// Underglow: the upper layers' segments cover the base one while they are on
pub fn show_layers<L: Lighting>(lighting: &mut L, state: LayerState) {
    for layer in [Layer::Sym, Layer::Nav] {
        lighting.set_layer_state(glow(layer).segment, state.is_on(layer));
    }
    lighting.flush();
}
