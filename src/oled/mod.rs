//! Status display
//!
//! The master half shows the highest layer's name and logo above a row of held modifiers, the
//! other half shows the Kyria logo.

use crate::host::{Display, Mods, Status};
use crate::keymap::Layer;
use crate::lighting::{glow, Glow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

/// The displays are mounted upside down
pub const ROTATION: Rotation = Rotation::R180;

/// 128x32 layer logos, in the display's page order
pub mod logo {
    pub static COLEMAK: &[u8] = include_bytes!("logo/colemak.bin");
    pub static SYMBOLS: &[u8] = include_bytes!("logo/symbols.bin");
    pub static NAVIGATION: &[u8] = include_bytes!("logo/navigation.bin");
    /// 128x64
    pub static KYRIA: &[u8] = include_bytes!("logo/kyria.bin");
}

/// Line of the modifier row
pub const STATUS_LINE: u8 = 5;
pub const ALT_COL: u8 = 1;
pub const CTRL_COL: u8 = 5;
pub const CMD_COL: u8 = 10;
pub const SHIFT_COL: u8 = 14;

/// What a layer looks like on the display and the LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerView {
    pub label: &'static str,
    pub logo: Option<&'static [u8]>,
    pub glow: Option<Glow>,
}

pub fn layer_view(layer: u8) -> LayerView {
    match Layer::from_index(layer) {
        Some(layer @ Layer::ColemakDh) => LayerView {
            label: "Colemak-DH",
            logo: Some(logo::COLEMAK),
            glow: Some(glow(layer)),
        },
        Some(layer @ Layer::Sym) => LayerView {
            label: "Symbols",
            logo: Some(logo::SYMBOLS),
            glow: Some(glow(layer)),
        },
        Some(layer @ Layer::Nav) => LayerView {
            label: "Navigation",
            logo: Some(logo::NAVIGATION),
            glow: Some(glow(layer)),
        },
        None => LayerView {
            label: "Undefined",
            logo: None,
            glow: None,
        },
    }
}

fn flag<D: Display>(display: &mut D, col: u8, on: bool, text: &str, blank: &str) {
    display.set_cursor(col, STATUS_LINE);
    display.write(if on { text } else { blank });
}

/// Master half: layer name and logo, then the modifier row
pub fn paint_master<H: Display + Status>(host: &mut H, oneshot_shift: bool) {
    let view = layer_view(host.highest_layer());
    host.write(view.label);
    host.write("\n");
    if let Some(logo) = view.logo {
        host.write_raw(logo);
    }

    let mods = host.mods();
    host.set_cursor(SHIFT_COL, STATUS_LINE);
    if host.caps_word() {
        host.write("CAPS \n");
    } else if mods.shift() || oneshot_shift {
        host.write("SHIFT\n");
    } else {
        host.write("     \n");
    }
    flag(host, CMD_COL, mods.gui(), "CMD", "   ");
    flag(host, CTRL_COL, mods.ctrl(), "CTRL", "    ");
    flag(host, ALT_COL, mods.alt(), "ALT", "   ");
}

pub fn paint_slave<D: Display>(display: &mut D) {
    display.write_raw(logo::KYRIA);
}

/// A pending one-shot shift shows up straight away. Clearing it is left to the next paint, which
/// avoids flicker. Returns whether shift is pending.
pub fn show_oneshot<D: Display>(display: &mut D, oneshot: Mods) -> bool {
    let shift = oneshot.shift();
    if shift {
        display.set_cursor(SHIFT_COL, STATUS_LINE);
        display.write("SHIFT\n");
    }
    shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::layer::LayerState;
    use crate::mock::{DisplayCall, MockHost};

    #[test]
    fn layer_labels() {
        assert_eq!(layer_view(0).label, "Colemak-DH");
        assert_eq!(layer_view(1).label, "Symbols");
        assert_eq!(layer_view(2).label, "Navigation");
        assert_eq!(layer_view(2).glow, Some(glow(Layer::Nav)));

        let undefined = layer_view(7);
        assert_eq!(undefined.label, "Undefined");
        assert_eq!(undefined.logo, None);
        assert_eq!(undefined.glow, None);
    }

    #[test]
    fn logos_fill_their_area() {
        for layer in Layer::ALL {
            assert_eq!(layer_view(layer as u8).logo.map(|logo| logo.len()), Some(128 * 32 / 8));
        }
        assert_eq!(logo::KYRIA.len(), 128 * 64 / 8);
    }

    #[test]
    fn master_shows_layer_and_blank_row() {
        let mut host = MockHost {
            layer_state: LayerState::of(Layer::Sym),
            ..MockHost::default()
        };
        paint_master(&mut host, false);
        assert_eq!(
            &host.display[..3],
            [
                DisplayCall::Text("Symbols".into()),
                DisplayCall::Text("\n".into()),
                DisplayCall::Raw(512),
            ]
        );
        assert_eq!(host.texts_at(SHIFT_COL, STATUS_LINE), ["     \n"]);
        assert_eq!(host.texts_at(CMD_COL, STATUS_LINE), ["   "]);
        assert_eq!(host.texts_at(CTRL_COL, STATUS_LINE), ["    "]);
        assert_eq!(host.texts_at(ALT_COL, STATUS_LINE), ["   "]);
    }

    #[test]
    fn master_shows_held_mods() {
        let mut host = MockHost {
            mods: Mods::RSFT | Mods::LGUI | Mods::RALT,
            ..MockHost::default()
        };
        paint_master(&mut host, false);
        assert_eq!(host.texts_at(SHIFT_COL, STATUS_LINE), ["SHIFT\n"]);
        assert_eq!(host.texts_at(CMD_COL, STATUS_LINE), ["CMD"]);
        assert_eq!(host.texts_at(CTRL_COL, STATUS_LINE), ["    "]);
        assert_eq!(host.texts_at(ALT_COL, STATUS_LINE), ["ALT"]);
    }

    #[test]
    fn caps_word_wins_over_shift() {
        let mut host = MockHost {
            mods: Mods::LSFT | Mods::LCTL,
            caps_word: true,
            ..MockHost::default()
        };
        paint_master(&mut host, true);
        assert_eq!(host.texts_at(SHIFT_COL, STATUS_LINE), ["CAPS \n"]);
        assert_eq!(host.texts_at(CTRL_COL, STATUS_LINE), ["CTRL"]);
    }

    #[test]
    fn pending_oneshot_counts_as_shift() {
        let mut host = MockHost::default();
        paint_master(&mut host, true);
        assert_eq!(host.texts_at(SHIFT_COL, STATUS_LINE), ["SHIFT\n"]);
    }

    #[test]
    fn undefined_layer_has_no_logo() {
        let mut host = MockHost {
            layer_state: LayerState(1 << 5),
            ..MockHost::default()
        };
        paint_master(&mut host, false);
        assert!(host.written().starts_with("Undefined\n"));
        assert_eq!(host.raw_bytes(), 0);
    }

    #[test]
    fn slave_shows_kyria_logo() {
        let mut host = MockHost::default();
        paint_slave(&mut host);
        assert_eq!(host.display, [DisplayCall::Raw(1024)]);
    }

    #[test]
    fn oneshot_shift_written_at_once() {
        let mut host = MockHost::default();
        assert!(show_oneshot(&mut host, Mods::RSFT));
        assert_eq!(host.texts_at(SHIFT_COL, STATUS_LINE), ["SHIFT\n"]);

        let mut host = MockHost::default();
        assert!(!show_oneshot(&mut host, Mods::LCTL));
        assert!(host.display.is_empty());
    }
}
