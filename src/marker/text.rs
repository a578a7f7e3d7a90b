use binrw::binrw;

use crate::common::{Position, read_bool_from, utf_length, write_bool_as, write_utf};
use crate::icons::fetch_text;

use super::MarkerControl;

/// A floating label.
#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct TextMarker {
    pub pos: Position,
    #[br(temp)]
    #[bw(try_calc = utf_length(text))]
    text_length: u16,
    #[br(count = text_length)]
    #[br(try_map = String::from_utf8)]
    #[bw(map = write_utf)]
    pub text: String,
    pub font_size: f32,
    /// Whether icon tags in `text` are resolved when displayed.
    #[br(map = read_bool_from::<u8>)]
    #[bw(map = write_bool_as::<u8>)]
    pub formatted: bool,
}

impl Default for TextMarker {
    fn default() -> Self {
        Self {
            pos: Position::default(),
            text: String::new(),
            font_size: 1.0,
            formatted: false,
        }
    }
}

impl TextMarker {
    /// Creates a label at `(x, y)` in world units.
    pub fn new(text: &str, x: f32, y: f32) -> Self {
        Self {
            pos: Position::new(x, y),
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn set_text(&mut self, text: &str, formatted: bool) {
        self.text = text.to_string();
        self.formatted = formatted;
    }

    /// The text as it should be drawn.
    pub fn display_text(&self) -> String {
        if self.formatted {
            fetch_text(&self.text)
        } else {
            self.text.clone()
        }
    }

    pub fn control(&mut self, code: MarkerControl, value: f64, p1: f64, _p2: f64) {
        match code {
            MarkerControl::Pos => self.pos = Position::from_tiles(value, p1),
            MarkerControl::FontSize => self.font_size = value as f32,
            _ => {}
        }
    }
}
