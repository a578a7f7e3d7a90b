mod color;
pub use color::Color;

mod position;
pub use position::Position;

mod parsing;
pub(crate) use parsing::*;

/// Size of a single tile in world units. Scripts address the map in tiles, markers store world units.
pub const TILE_SIZE: f32 = 8.0;

/// Converts a script-facing tile coordinate into world units.
pub fn tiles_to_world(tiles: f64) -> f32 {
    tiles as f32 * TILE_SIZE
}

/// Texture name used by quads that are not textured at all.
pub const UNTEXTURED: &str = "white";
