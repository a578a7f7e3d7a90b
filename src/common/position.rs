use binrw::binrw;

use super::tiles_to_world;

/// Represents a point on the map, in world units.
#[binrw]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Builds a position from tile coordinates as handed over by scripts.
    pub fn from_tiles(x: f64, y: f64) -> Self {
        Self {
            x: tiles_to_world(x),
            y: tiles_to_world(y),
        }
    }
}
