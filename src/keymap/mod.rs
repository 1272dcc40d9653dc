//! Per-key actions of the three layers
//!
//! The tables are plain data: resolving tap-holds, one-shots and transparent keys is up to the
//! host's layer stack.

use crate::host::{Consumer, Keyboard, Mouse};

pub mod layer;
/// Shorthand for `use keymap::Action::*` and friends when writing a layer
pub mod prelude;

/// Keys on the Kyria: rows of 6 + 6, 6 + 6, 8 + 8 and 5 + 5
pub const KEYS: usize = 50;
pub const LAYERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    ColemakDh = 0,
    Sym = 1,
    Nav = 2,
}

impl Layer {
    pub const ALL: [Layer; LAYERS] = [Layer::ColemakDh, Layer::Sym, Layer::Nav];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    No,
    Trans,
    Kb(Keyboard),
    /// Key with shift held, for symbols
    Sh(Keyboard),
    Cc(Consumer),
    Ms(Mouse),
    /// Modifier applied to the next key press only
    Osm(Keyboard),
    /// Modifier when held, key when tapped
    MT(Keyboard, Keyboard),
    /// Layer while held, key when tapped
    LT(Layer, Keyboard),
    /// Layer for the next key press only
    Osl(Layer),
    To(Layer),
}

pub fn action(layer: Layer, key: usize) -> Option<Action> {
    KEYMAPS[layer as usize].get(key).copied()
}

// For alignment with `vi]:EasyAlign <C-r>4<CR>*,
#[rustfmt::skip]
pub static KEYMAPS: [[Action; KEYS]; LAYERS] = {
    use prelude::*;
    [
        // Colemak-DH
        [
            Kb(Escape), Kb(Q), Kb(W), Kb(F), Kb(P), Kb(B),                                         Kb(J), Kb(L), Kb(U),     Kb(Y),   Kb(Semicolon),    Kb(DEL),
            Kb(Grave),  Kb(A), Kb(R), Kb(S), Kb(T), Kb(G),                                         Kb(M), Kb(N), Kb(E),     Kb(I),   Kb(O),            Kb(Equal),
            Kb(LALT),   Kb(Z), Kb(X), Kb(C), Kb(D), Kb(V), LSFT_OSM, Kb(LCMD),   Kb(RCMD), RSFT_OSM, Kb(K), Kb(H), Kb(Comma), Kb(Dot), Kb(ForwardSlash), Kb(RALT),
                           Kb(ENT), Kb(NUBS), SYM, Kb(BSPC), LCTL_TAB,                NAV_ENT, Kb(Space), SYM, Kb(NUHS), BTN3,
        ],
        // Symbols
        [
            ___,       EXLM,   AT,      HASH,     DLR,       PERC,                             CIRC,     AMPR,       ASTR,          LPRN,           RPRN,              ___,
            TILD,      Kb(K1), Kb(K2),  Kb(K3),   Kb(K4),    Kb(K5),                           Kb(K6),   Kb(K7),     Kb(K8),        Kb(K9),         Kb(K0),            PLUS,
            ___,       XXX,    LCBR,    RCBR,     Kb(Minus), UNDS,   ___, ___,       ___, ___, DQUO,     Kb(Apostrophe), Kb(LeftBrace), Kb(RightBrace), Kb(ForwardSlash), ___,
                                  ___, PLS_MIN, ___, ___, ___,                             NAV, ___, ___, PIPE, ___,
        ],
        // Navigation and media
        [
            ___,       Kb(F1),  Kb(F2),  Kb(F3), Kb(F4), Kb(F5),                               XXX, XXX,      Kb(PageDown), Kb(PageUp), XXX,       ___,
            ___,       Kb(F6),  Kb(F7),  Kb(F8), Kb(F9), Kb(F10),                              XXX, Kb(LEFT), Kb(DOWN),     Kb(UP),     Kb(RIGHT), ___,
            ___,       Kb(F11), Kb(F12), XXX,    XXX,    XXX,     ___, ___,        ___, ___,   XXX, XXX,      Kb(PageDown), Kb(PageUp), XXX,       ___,
                                  MPLY, MNXT, ___, ___, ___,                               COLEMAK, ___, ___, ___, ___,
        ],
    ]
};
