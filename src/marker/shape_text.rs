use binrw::binrw;

use crate::common::{
    Color, Position, read_bool_from, utf_length, write_bool_as, write_utf,
};
use crate::icons::fetch_text;

use super::{MarkerControl, control::truthy};

/// A polygon with a label next to it. Accepts every control code of both [`ShapeMarker`](super::ShapeMarker) and [`TextMarker`](super::TextMarker).
#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTextMarker {
    pub pos: Position,
    #[br(temp)]
    #[bw(try_calc = utf_length(text))]
    text_length: u16,
    #[br(count = text_length)]
    #[br(try_map = String::from_utf8)]
    #[bw(map = write_utf)]
    pub text: String,
    pub radius: f32,
    pub sides: i32,
    pub font_size: f32,
    /// In degrees.
    pub rotation: f32,
    pub stroke: f32,
    #[br(map = Color::from_rgba8888)]
    #[bw(map = Color::rgba8888)]
    pub color: Color,
    #[br(map = read_bool_from::<u8>)]
    #[bw(map = write_bool_as::<u8>)]
    pub fill: bool,
    #[br(map = read_bool_from::<u8>)]
    #[bw(map = write_bool_as::<u8>)]
    pub outline: bool,
    /// Whether icon tags in `text` are resolved when displayed.
    #[br(map = read_bool_from::<u8>)]
    #[bw(map = write_bool_as::<u8>)]
    pub formatted: bool,
}

impl Default for ShapeTextMarker {
    fn default() -> Self {
        Self {
            pos: Position::default(),
            text: String::new(),
            radius: 6.0,
            sides: 4,
            font_size: 1.0,
            rotation: 0.0,
            stroke: 1.0,
            color: Color::from_rgba8888(0xffd37fff),
            fill: false,
            outline: false,
            formatted: false,
        }
    }
}

impl ShapeTextMarker {
    /// Creates a labelled shape at `(x, y)` in world units.
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

    pub fn control(&mut self, code: MarkerControl, value: f64, p1: f64, p2: f64) {
        match code {
            MarkerControl::Pos => self.pos = Position::from_tiles(value, p1),
            MarkerControl::Radius => self.radius = value as f32,
            MarkerControl::Rotation => self.rotation = value as f32,
            MarkerControl::Stroke => self.stroke = value as f32,
            MarkerControl::FontSize => self.font_size = value as f32,
            MarkerControl::Shape => {
                self.sides = value as i32;
                self.fill = truthy(p1);
                self.outline = truthy(p2);
            }
            MarkerControl::Color => self.color = Color::from_double_bits(value),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::TILE_SIZE;

    use super::*;

    #[test]
    fn shape_text_marker() {
        let mut marker = ShapeTextMarker::new("test text", 70.0, 80.0);

        assert_eq!(marker.pos, Position::new(70.0, 80.0));
        assert_eq!(marker.text, "test text");
        assert_eq!(marker.radius, 6.0);
        assert_eq!(marker.sides, 4);

        marker.control(MarkerControl::Radius, 8.0, f64::NAN, f64::NAN);
        assert_eq!(marker.radius, 8.0);

        marker.control(MarkerControl::FontSize, 1.5, f64::NAN, f64::NAN);
        assert_eq!(marker.font_size, 1.5);

        marker.control(MarkerControl::Shape, 5.0, 0.0, 1.0);
        assert_eq!(marker.sides, 5);
        assert!(!marker.fill);
        assert!(marker.outline);

        marker.set_text("new text", false);
        assert_eq!(marker.text, "new text");
    }

    #[test]
    fn ignores_line_codes() {
        let mut marker = ShapeTextMarker::new("label", 0.0, 0.0);
        marker.control(MarkerControl::EndPos, 1.0, 1.0, f64::NAN);
        marker.control(MarkerControl::TextureSize, 1.0, 1.0, f64::NAN);
        assert_eq!(marker, ShapeTextMarker::new("label", 0.0, 0.0));
    }

    #[test]
    fn shape_text_pos_rotation_stroke_and_color() {
        let mut marker = ShapeTextMarker::new("core", 0.0, 0.0);

        marker.control(MarkerControl::Pos, 4.0, 6.0, f64::NAN);
        assert_eq!(marker.pos, Position::new(4.0 * TILE_SIZE, 6.0 * TILE_SIZE));

        marker.control(MarkerControl::Rotation, 30.0, f64::NAN, f64::NAN);
        assert_eq!(marker.rotation, 30.0);

        marker.control(MarkerControl::Stroke, 2.5, f64::NAN, f64::NAN);
        assert_eq!(marker.stroke, 2.5);

        marker.control(MarkerControl::Color, Color::GREEN.to_double_bits(), f64::NAN, f64::NAN);
        assert_eq!(marker.color, Color::GREEN);
    }
}
