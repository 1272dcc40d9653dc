//! Host double for tests: records everything the keymap asks of it

extern crate std;

use std::string::String;
use std::vec::Vec;

use crate::host::{Code, Display, EventQueue, Hid, Lighting, Mods, Status};
use crate::keymap::layer::LayerState;
use crate::lighting::{Rgb, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightCall {
    SetLayers(usize),
    Enable,
    Suspend,
    Wakeup,
    LayerState(u8, bool),
    Flush,
    Color(u8, Rgb),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    Cursor(u8, u8),
    Text(String),
    Raw(usize),
}

#[derive(Debug)]
pub struct MockHost {
    pub hid: EventQueue<64>,
    pub layer_state: LayerState,
    pub default_layer_state: LayerState,
    pub mods: Mods,
    pub caps_word: bool,
    pub master: bool,
    pub lights: Vec<LightCall>,
    pub display: Vec<DisplayCall>,
}

impl Default for MockHost {
    fn default() -> Self {
        MockHost {
            hid: EventQueue::new(),
            layer_state: LayerState(0),
            default_layer_state: LayerState::of(crate::keymap::Layer::ColemakDh),
            mods: Mods::NONE,
            caps_word: false,
            master: true,
            lights: Vec::new(),
            display: Vec::new(),
        }
    }
}

impl MockHost {
    pub fn count(&self, call: LightCall) -> usize {
        self.lights.iter().filter(|c| **c == call).count()
    }

    /// Text written at a cursor position, in order
    pub fn texts_at(&self, col: u8, line: u8) -> Vec<&str> {
        let mut cursor = None;
        let mut texts = Vec::new();
        for call in &self.display {
            match call {
                DisplayCall::Cursor(c, l) => cursor = Some((*c, *l)),
                DisplayCall::Text(text) if cursor == Some((col, line)) => texts.push(text.as_str()),
                _ => {}
            }
        }
        texts
    }

    pub fn written(&self) -> String {
        let mut all = String::new();
        for call in &self.display {
            if let DisplayCall::Text(text) = call {
                all.push_str(text);
            }
        }
        all
    }

    pub fn raw_bytes(&self) -> usize {
        self.display
            .iter()
            .map(|call| match call {
                DisplayCall::Raw(len) => *len,
                _ => 0,
            })
            .sum()
    }
}

impl Hid for MockHost {
    fn register(&mut self, code: Code) {
        self.hid.register(code);
    }

    fn unregister(&mut self, code: Code) {
        self.hid.unregister(code);
    }
}

impl Status for MockHost {
    fn layer_state(&self) -> LayerState {
        self.layer_state
    }

    fn default_layer_state(&self) -> LayerState {
        self.default_layer_state
    }

    fn mods(&self) -> Mods {
        self.mods
    }

    fn caps_word(&self) -> bool {
        self.caps_word
    }

    fn is_master(&self) -> bool {
        self.master
    }
}

impl Lighting for MockHost {
    fn enable_noeeprom(&mut self) {
        self.lights.push(LightCall::Enable);
    }

    fn suspend(&mut self) {
        self.lights.push(LightCall::Suspend);
    }

    fn wakeup(&mut self) {
        self.lights.push(LightCall::Wakeup);
    }

    fn set_layers(&mut self, layers: &'static [&'static [Segment]]) {
        self.lights.push(LightCall::SetLayers(layers.len()));
    }

    fn set_layer_state(&mut self, index: u8, on: bool) {
        self.lights.push(LightCall::LayerState(index, on));
    }

    fn flush(&mut self) {
        self.lights.push(LightCall::Flush);
    }

    fn set_color(&mut self, index: u8, color: Rgb) {
        self.lights.push(LightCall::Color(index, color));
    }
}

impl Display for MockHost {
    fn set_cursor(&mut self, col: u8, line: u8) {
        self.display.push(DisplayCall::Cursor(col, line));
    }

    fn write(&mut self, text: &str) {
        self.display.push(DisplayCall::Text(String::from(text)));
    }

    fn write_raw(&mut self, data: &[u8]) {
        self.display.push(DisplayCall::Raw(data.len()));
    }
}
