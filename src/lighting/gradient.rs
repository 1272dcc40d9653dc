//! Hue gradient across the per-key LEDs
//!
//! Each half has 31 LEDs: six underglow ones then the 25 keys. The right half is wired as the
//! left one shifted by 31, so every colour is set on both. LED positions run from 0 to 15.1
//! across the board (stored in tenths) and the hue moves by `width` over that distance.

use super::{Hsv, Rgb};
use crate::host::Lighting;

pub const LEDS_PER_SIDE: u8 = 31;

/// Full span of the positions, in tenths
const SPAN: i32 = 151;

/// (LED, position in tenths)
#[rustfmt::skip]
const POSITIONS: [(u8, u8); LEDS_PER_SIDE as usize] = [
    // underglow
    (0, 62), (1, 94), (2, 136), (3, 104), (4, 62), (5, 13),
    // keys
    (11, 0),   (6, 7),    (12, 26),  (7, 29),   (13, 51),  (8, 52),   (19, 58),  (25, 65),
    (14, 70),  (9, 74),   (20, 77),  (26, 84),  (15, 90),  (10, 91),  (21, 97),  (27, 104),
    (16, 110), (22, 113), (28, 119), (17, 120), (23, 126), (29, 133), (18, 136), (24, 143),
    (30, 151),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gradient {
    /// Colour in the middle of the board
    pub center: Hsv,
    /// Hue change from one end to the other, negative runs the hue down
    pub width: i8,
}

impl Gradient {
    pub const fn new(center: Hsv, width: i8) -> Self {
        Gradient { center, width }
    }

    fn start_hue(&self) -> u8 {
        self.center.h.wrapping_sub((self.width / 2) as u8)
    }

    /// Hue at a position, rounded down and wrapped around the colour wheel
    fn hue_at(&self, position: u8) -> u8 {
        let scaled = self.start_hue() as i32 * SPAN + self.width as i32 * position as i32;
        scaled.div_euclid(SPAN) as u8
    }

    /// Colour of every LED on one half
    pub fn colors(&self) -> impl Iterator<Item = (u8, Rgb)> + '_ {
        POSITIONS
            .iter()
            .map(move |&(led, position)| (led, self.center.with_hue(self.hue_at(position)).to_rgb()))
    }

    pub fn paint<L: Lighting>(&self, lighting: &mut L) {
        for (led, color) in self.colors() {
            lighting.set_color(led, color);
            lighting.set_color(led + LEDS_PER_SIDE, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lighting::{C64BLUE, GRAPE, PHASER};
    use crate::mock::{LightCall, MockHost};

    #[test]
    fn every_led_once() {
        let mut seen = [false; LEDS_PER_SIDE as usize];
        for (led, position) in POSITIONS {
            assert!(!seen[led as usize]);
            seen[led as usize] = true;
            assert!(position as i32 <= SPAN);
        }
        assert!(seen.iter().all(|seen| *seen));
    }

    #[test]
    fn hue_runs_from_start_by_width() {
        let blue = Gradient::new(C64BLUE, -40);
        assert_eq!(blue.start_hue(), 180);
        assert_eq!(blue.hue_at(0), 180);
        assert_eq!(blue.hue_at(62), 163);
        assert_eq!(blue.hue_at(151), 140);

        let orange = Gradient::new(PHASER, 10);
        assert_eq!(orange.start_hue(), 8);
        assert_eq!(orange.hue_at(0), 8);
        assert_eq!(orange.hue_at(151), 18);
    }

    #[test]
    fn hue_wraps_around() {
        let red = Gradient::new(Hsv::new(2, 255, 255), 20);
        assert_eq!(red.start_hue(), 248);
        assert_eq!(red.hue_at(151), 12);

        let purple = Gradient::new(GRAPE, -30);
        assert_eq!(purple.start_hue(), 217);
        assert_eq!(purple.hue_at(151), 187);
    }

    #[test]
    fn paints_both_halves() {
        let mut host = MockHost::default();
        Gradient::new(C64BLUE, -40).paint(&mut host);
        assert_eq!(host.lights.len(), 2 * LEDS_PER_SIDE as usize);
        // LED 11 sits at the very start of the gradient
        let start = Hsv::new(180, 255, 255).to_rgb();
        assert_eq!(start, Rgb::new(48, 0, 255));
        assert!(host.lights.contains(&LightCall::Color(11, start)));
        assert!(host.lights.contains(&LightCall::Color(42, start)));
    }
}
