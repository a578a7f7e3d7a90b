use binrw::binrw;

use crate::common::{Color, Position};

use super::MarkerControl;

/// A circle marking a single spot.
#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarker {
    pub pos: Position,
    pub radius: f32,
    pub stroke: f32,
    #[br(map = Color::from_rgba8888)]
    #[bw(map = Color::rgba8888)]
    pub color: Color,
}

impl Default for PointMarker {
    fn default() -> Self {
        Self {
            pos: Position::default(),
            radius: 5.0,
            stroke: 11.0,
            color: Color::from_rgba8888(0xf25555ff),
        }
    }
}

impl PointMarker {
    /// Creates a point at `(x, y)` in world units.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Position::new(x, y),
            ..Default::default()
        }
    }

    pub fn control(&mut self, code: MarkerControl, value: f64, p1: f64, _p2: f64) {
        match code {
            MarkerControl::Pos => self.pos = Position::from_tiles(value, p1),
            MarkerControl::Radius => self.radius = value as f32,
            MarkerControl::Stroke => self.stroke = value as f32,
            MarkerControl::Color => self.color = Color::from_double_bits(value),
            _ => {}
        }
    }
}
