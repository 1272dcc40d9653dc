//! For ease and shorthand when writing out the layers
pub use super::Action::*;
pub use super::Keyboard::*;

use super::{Action, Consumer, Keyboard, Layer, Mouse};

/// Falls through to the layer below
pub const ___: Action = Trans;
/// Does nothing
pub const XXX: Action = No;

pub const K0: Keyboard = Keyboard0;
pub const K1: Keyboard = Keyboard1;
pub const K2: Keyboard = Keyboard2;
pub const K3: Keyboard = Keyboard3;
pub const K4: Keyboard = Keyboard4;
pub const K5: Keyboard = Keyboard5;
pub const K6: Keyboard = Keyboard6;
pub const K7: Keyboard = Keyboard7;
pub const K8: Keyboard = Keyboard8;
pub const K9: Keyboard = Keyboard9;

pub const LSFT: Keyboard = LeftShift;
pub const LCTL: Keyboard = LeftControl;
pub const LALT: Keyboard = LeftAlt;
pub const LCMD: Keyboard = LeftGUI;
pub const RSFT: Keyboard = RightShift;
pub const RCTL: Keyboard = RightControl;
pub const RALT: Keyboard = RightAlt;
pub const RCMD: Keyboard = RightGUI;

pub const LEFT: Keyboard = LeftArrow;
pub const RIGHT: Keyboard = RightArrow;
pub const UP: Keyboard = UpArrow;
pub const DOWN: Keyboard = DownArrow;

pub const BSPC: Keyboard = DeleteBackspace;
pub const DEL: Keyboard = DeleteForward;
pub const ENT: Keyboard = ReturnEnter;
pub const NUBS: Keyboard = NonUSBackslash;
pub const NUHS: Keyboard = NonUSHash;

// Layer switching
pub const COLEMAK: Action = To(Layer::ColemakDh);
pub const SYM: Action = Osl(Layer::Sym);
pub const NAV: Action = To(Layer::Nav);

pub const LSFT_OSM: Action = Osm(LSFT);
pub const RSFT_OSM: Action = Osm(RSFT);
pub const LCTL_TAB: Action = MT(LCTL, Tab);
pub const NAV_ENT: Action = LT(Layer::Nav, ENT);

// Shifted symbols, US layout
pub const EXLM: Action = Sh(K1);
pub const AT: Action = Sh(K2);
pub const HASH: Action = Sh(K3);
pub const DLR: Action = Sh(K4);
pub const PERC: Action = Sh(K5);
pub const CIRC: Action = Sh(K6);
pub const AMPR: Action = Sh(K7);
pub const ASTR: Action = Sh(K8);
pub const LPRN: Action = Sh(K9);
pub const RPRN: Action = Sh(K0);
pub const TILD: Action = Sh(Grave);
pub const PLUS: Action = Sh(Equal);
pub const LCBR: Action = Sh(LeftBrace);
pub const RCBR: Action = Sh(RightBrace);
pub const UNDS: Action = Sh(Minus);
pub const DQUO: Action = Sh(Apostrophe);
pub const PIPE: Action = Sh(Backslash);
/// `±` on a Mac ISO layout
pub const PLS_MIN: Action = Sh(NUBS);

pub const MPLY: Action = Cc(Consumer::PlayPause);
pub const MNXT: Action = Cc(Consumer::ScanNextTrack);
pub const BTN3: Action = Ms(Mouse::Button3);
