//! Underglow segment tables, one per layer
//!
//! Ten LEDs per half. Each table lists the same ten hues for both halves so the sides mirror.

use super::{Hsv, Segment};

pub const LEDS: usize = 20;

const fn mirrored(hues: [u8; LEDS / 2]) -> [Segment; LEDS] {
    let mut segments = [Segment {
        start: 0,
        count: 1,
        color: Hsv::new(0, 255, 255),
    }; LEDS];
    let mut i = 0;
    while i < LEDS {
        segments[i] = Segment {
            start: i as u8,
            count: 1,
            color: Hsv::new(hues[i % (LEDS / 2)], 255, 255),
        };
        i += 1;
    }
    segments
}

pub static COLEMAK: [Segment; LEDS] = mirrored([142, 148, 156, 154, 162, 172, 167, 162, 172, 176]);
pub static SYM: [Segment; LEDS] = mirrored([19, 22, 26, 25, 29, 34, 31, 29, 34, 36]);
pub static NAV: [Segment; LEDS] = mirrored([229, 218, 207, 210, 198, 183, 190, 198, 183, 178]);

/// Later tables cover earlier ones when several are on
pub static LAYERS: [&[Segment]; 3] = [&COLEMAK, &SYM, &NAV];
