use binrw::binrw;

use crate::common::Position;

use super::MarkerControl;

/// A straight line between two points.
#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct LineMarker {
    /// Where the line starts.
    pub pos: Position,
    pub end_pos: Position,
    pub stroke: f32,
}

impl Default for LineMarker {
    fn default() -> Self {
        Self {
            pos: Position::default(),
            end_pos: Position::default(),
            stroke: 1.0,
        }
    }
}

impl LineMarker {
    /// Creates a line from `(x1, y1)` to `(x2, y2)` in world units.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            pos: Position::new(x1, y1),
            end_pos: Position::new(x2, y2),
            ..Default::default()
        }
    }

    pub fn control(&mut self, code: MarkerControl, value: f64, p1: f64, _p2: f64) {
        match code {
            MarkerControl::Pos => self.pos = Position::from_tiles(value, p1),
            MarkerControl::EndPos => self.end_pos = Position::from_tiles(value, p1),
            MarkerControl::Stroke => self.stroke = value as f32,
            _ => {}
        }
    }
}
