use binrw::binrw;

use crate::common::{
    Color, Position, TILE_SIZE, UNTEXTURED, tiles_to_world, utf_length, write_utf,
};

use super::MarkerControl;

/// Number of floats per corner: x, y and the packed color.
pub const VERTEX_SIZE: usize = 3;

/// A free-form quad, described directly by its four corners.
#[binrw]
#[derive(Debug, Clone, PartialEq)]
pub struct QuadMarker {
    #[br(temp)]
    #[bw(try_calc = utf_length(texture_name))]
    texture_name_length: u16,
    #[br(count = texture_name_length)]
    #[br(try_map = String::from_utf8)]
    #[bw(map = write_utf)]
    pub texture_name: String,
    /// Corners in counter-clockwise order starting at the bottom left.
    /// Each is `x, y, color` with the color packed by [`Color::to_float_bits`].
    pub vertices: [f32; 4 * VERTEX_SIZE],
    /// World-space width of the texture.
    pub width: f32,
    /// World-space height of the texture.
    pub height: f32,
}

impl Default for QuadMarker {
    fn default() -> Self {
        let white = Color::WHITE.to_float_bits();

        #[rustfmt::skip]
        let vertices = [
            0.0, 0.0, white,
            0.0, 0.0, white,
            0.0, 0.0, white,
            0.0, 0.0, white,
        ];

        Self {
            texture_name: UNTEXTURED.to_string(),
            vertices,
            width: TILE_SIZE,
            height: TILE_SIZE,
        }
    }
}

impl QuadMarker {
    /// Whether this quad is drawn without a texture.
    pub fn is_untextured(&self) -> bool {
        self.texture_name == UNTEXTURED
    }

    /// The average of all four corners.
    pub fn center(&self) -> Position {
        let (x, y) = self
            .vertices
            .chunks_exact(VERTEX_SIZE)
            .fold((0.0, 0.0), |(x, y), vertex| (x + vertex[0], y + vertex[1]));

        Position::new(x / 4.0, y / 4.0)
    }

    /// Lays the corners out as a `width` by `height` rectangle around `center`.
    fn set_rect(&mut self, center: Position) {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;

        let corners = [
            (center.x - half_width, center.y - half_height),
            (center.x + half_width, center.y - half_height),
            (center.x + half_width, center.y + half_height),
            (center.x - half_width, center.y + half_height),
        ];

        for (vertex, (x, y)) in self.vertices.chunks_exact_mut(VERTEX_SIZE).zip(corners) {
            vertex[0] = x;
            vertex[1] = y;
        }
    }

    fn set_color(&mut self, color: Color) {
        let packed = color.to_float_bits();
        for vertex in self.vertices.chunks_exact_mut(VERTEX_SIZE) {
            vertex[2] = packed;
        }
    }

    pub fn control(&mut self, code: MarkerControl, value: f64, p1: f64, _p2: f64) {
        match code {
            MarkerControl::Pos => self.set_rect(Position::from_tiles(value, p1)),
            MarkerControl::TextureSize => {
                let center = self.center();
                self.width = tiles_to_world(value);
                self.height = tiles_to_world(p1);
                self.set_rect(center);
            }
            MarkerControl::Color => self.set_color(Color::from_double_bits(value)),
            _ => {}
        }
    }
}
