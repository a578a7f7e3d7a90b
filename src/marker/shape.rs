use binrw::binrw;

use crate::common::{Color, Position, read_bool_from, write_bool_as};

use super::{MarkerControl, control::truthy};

/// A regular polygon, optionally filled and outlined.
#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMarker {
    pub pos: Position,
    pub radius: f32,
    /// In degrees.
    pub rotation: f32,
    pub stroke: f32,
    pub sides: i32,
    #[br(map = Color::from_rgba8888)]
    #[bw(map = Color::rgba8888)]
    pub color: Color,
    #[br(map = read_bool_from::<u8>)]
    #[bw(map = write_bool_as::<u8>)]
    pub fill: bool,
    #[br(map = read_bool_from::<u8>)]
    #[bw(map = write_bool_as::<u8>)]
    pub outline: bool,
}

impl Default for ShapeMarker {
    fn default() -> Self {
        Self {
            pos: Position::default(),
            radius: 8.0,
            rotation: 0.0,
            stroke: 1.0,
            sides: 4,
            color: Color::from_rgba8888(0xffd37fff),
            fill: false,
            outline: false,
        }
    }
}

impl ShapeMarker {
    /// Creates a shape at `(x, y)` in world units.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Position::new(x, y),
            ..Default::default()
        }
    }

    pub fn control(&mut self, code: MarkerControl, value: f64, p1: f64, p2: f64) {
        match code {
            MarkerControl::Pos => self.pos = Position::from_tiles(value, p1),
            MarkerControl::Radius => self.radius = value as f32,
            MarkerControl::Rotation => self.rotation = value as f32,
            MarkerControl::Stroke => self.stroke = value as f32,
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
