use binrw::binrw;

use crate::common::{Position, tiles_to_world, utf_length, write_utf};

use super::MarkerControl;

/// A texture drawn over the world, sized in world units.
#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct TextureMarker {
    pub pos: Position,
    #[br(temp)]
    #[bw(try_calc = utf_length(texture_name))]
    texture_name_length: u16,
    #[br(count = texture_name_length)]
    #[br(try_map = String::from_utf8)]
    #[bw(map = write_utf)]
    pub texture_name: String,
    /// Zero means the texture's own width.
    pub width: f32,
    /// Zero means the texture's own height.
    pub height: f32,
    /// In degrees.
    pub rotation: f32,
}

impl Default for TextureMarker {
    fn default() -> Self {
        Self {
            pos: Position::default(),
            texture_name: String::new(),
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
        }
    }
}

impl TextureMarker {
    /// Creates a texture marker at `(x, y)` in world units.
    pub fn new(texture_name: &str, x: f32, y: f32) -> Self {
        Self {
            pos: Position::new(x, y),
            texture_name: texture_name.to_string(),
            ..Default::default()
        }
    }

    pub fn control(&mut self, code: MarkerControl, value: f64, p1: f64, _p2: f64) {
        match code {
            MarkerControl::Pos => self.pos = Position::from_tiles(value, p1),
            MarkerControl::Rotation => self.rotation = value as f32,
            MarkerControl::TextureSize => {
                self.width = tiles_to_world(value);
                self.height = tiles_to_world(p1);
            }
            _ => {}
        }
    }
}
