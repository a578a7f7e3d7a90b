//! Numeric control codes scripts use to mutate markers one field group at a time.

use strum_macros::{Display, EnumIter, FromRepr};

use super::{MarkerKind, ObjectiveMarker};

/// A field mutation a script can request on a marker.
///
/// Gaps in the numbering are codes that exist in the scripting protocol but have no effect on any
/// marker stored here. Scripts sending them, or anything else without a variant, are ignored.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerControl {
    /// `value != 0` toggles drawing in the world.
    World = 1,
    /// `value != 0` toggles drawing on the minimap.
    Minimap = 2,
    /// `value != 0` toggles scaling with the camera zoom.
    Autoscale = 3,
    /// Moves the marker to tile `(value, p1)`.
    Pos = 4,
    /// Moves the end of a line to tile `(value, p1)`.
    EndPos = 5,
    /// `value` is a color packed with [`Color::to_double_bits`](crate::common::Color::to_double_bits).
    Color = 7,
    Radius = 8,
    Stroke = 9,
    Rotation = 11,
    /// Sets the number of sides to `value`, fill to `p1 != 0` and outline to `p2 != 0`.
    Shape = 12,
    /// Replaces the text, see [`ObjectiveMarker::control_text`].
    Text = 14,
    FontSize = 15,
    /// Replaces the texture name, see [`ObjectiveMarker::control_text`].
    Texture = 20,
    /// Sets the texture size to `(value, p1)` tiles.
    TextureSize = 21,
}

impl mlua::IntoLua for MarkerControl {
    fn into_lua(self, _: &mlua::Lua) -> mlua::Result<mlua::Value> {
        Ok(mlua::Value::Integer(self as i64))
    }
}

impl TryFrom<u8> for MarkerControl {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(())
    }
}

/// Reads a script boolean, where anything but zero is true.
pub(super) fn truthy(value: f64) -> bool {
    value != 0.0
}

impl ObjectiveMarker {
    /// Applies a numeric control code. Unused arguments are expected to be NaN.
    /// Codes this marker's variant doesn't have a field for are ignored.
    pub fn control(&mut self, code: MarkerControl, value: f64, p1: f64, p2: f64) {
        match code {
            MarkerControl::World => self.world = truthy(value),
            MarkerControl::Minimap => self.minimap = truthy(value),
            MarkerControl::Autoscale => self.autoscale = truthy(value),
            _ => match &mut self.kind {
                MarkerKind::Point(marker) => marker.control(code, value, p1, p2),
                MarkerKind::Shape(marker) => marker.control(code, value, p1, p2),
                MarkerKind::Text(marker) => marker.control(code, value, p1, p2),
                MarkerKind::Line(marker) => marker.control(code, value, p1, p2),
                MarkerKind::Texture(marker) => marker.control(code, value, p1, p2),
                MarkerKind::ShapeText(marker) => marker.control(code, value, p1, p2),
                MarkerKind::Quad(marker) => marker.control(code, value, p1, p2),
            },
        }
    }

    /// Applies a control code that carries a string instead of numbers.
    /// Only [`MarkerControl::Text`] and [`MarkerControl::Texture`] carry one, anything else is ignored.
    pub fn control_text(&mut self, code: MarkerControl, text: &str, formatted: bool) {
        match code {
            MarkerControl::Text => self.set_text(text, formatted),
            MarkerControl::Texture => match &mut self.kind {
                MarkerKind::Texture(marker) => marker.texture_name = text.to_string(),
                MarkerKind::Quad(marker) => marker.texture_name = text.to_string(),
                _ => {}
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::{Color, TILE_SIZE};
    use crate::marker::{LineMarker, PointMarker, QuadMarker, TextMarker, TextureMarker};

    use super::*;

    #[test]
    fn control_codes() {
        assert_eq!(MarkerControl::try_from(1), Ok(MarkerControl::World));
        assert_eq!(MarkerControl::try_from(5), Ok(MarkerControl::EndPos));
        assert_eq!(MarkerControl::try_from(21), Ok(MarkerControl::TextureSize));
        assert_eq!(MarkerControl::try_from(0), Err(()));
        assert_eq!(MarkerControl::try_from(6), Err(()));
        assert_eq!(MarkerControl::EndPos.to_string(), "END_POS");
        assert_eq!(MarkerControl::FontSize.to_string(), "FONT_SIZE");
    }

    #[test]
    fn shared_flags() {
        let mut marker = ObjectiveMarker::from(PointMarker::default());

        marker.control(MarkerControl::World, 0.0, f64::NAN, f64::NAN);
        assert!(!marker.world);

        marker.control(MarkerControl::Minimap, 1.0, f64::NAN, f64::NAN);
        assert!(marker.minimap);

        marker.control(MarkerControl::Autoscale, 1.0, f64::NAN, f64::NAN);
        assert!(marker.autoscale);

        marker.control(MarkerControl::World, -2.5, f64::NAN, f64::NAN);
        assert!(marker.world);
    }

    #[test]
    fn shared_flags_apply_to_every_variant() {
        let mut marker = ObjectiveMarker::from(QuadMarker::default());
        marker.control(MarkerControl::Minimap, 1.0, f64::NAN, f64::NAN);
        assert!(marker.minimap);
    }

    #[test]
    fn unrelated_codes_are_ignored() {
        let mut marker = ObjectiveMarker::from(TextMarker::new("label", 1.0, 2.0));
        let before = marker.clone();

        marker.control(MarkerControl::Radius, 10.0, f64::NAN, f64::NAN);
        marker.control(MarkerControl::EndPos, 3.0, 4.0, f64::NAN);
        marker.control(MarkerControl::Shape, 6.0, 1.0, 1.0);
        marker.control(MarkerControl::Text, 1.0, f64::NAN, f64::NAN);
        marker.control(MarkerControl::TextureSize, 1.0, 1.0, f64::NAN);

        assert_eq!(marker, before);
    }

    #[test]
    fn control_through_marker() {
        let mut marker = ObjectiveMarker::from(LineMarker::new(5.0, 10.0, 15.0, 20.0));
        marker.control(MarkerControl::EndPos, 3.0, 4.0, f64::NAN);

        let MarkerKind::Line(line) = &marker.kind else {
            panic!("kind changed");
        };
        assert_eq!(line.end_pos.x, 3.0 * TILE_SIZE);
        assert_eq!(line.end_pos.y, 4.0 * TILE_SIZE);

        let mut marker = ObjectiveMarker::from(PointMarker::new(0.0, 0.0));
        marker.control(MarkerControl::Color, Color::GREEN.to_double_bits(), f64::NAN, f64::NAN);
        let MarkerKind::Point(point) = &marker.kind else {
            panic!("kind changed");
        };
        assert_eq!(point.color, Color::GREEN);
    }

    #[test]
    fn control_text() {
        let mut marker = ObjectiveMarker::from(TextMarker::new("", 0.0, 0.0));
        marker.control_text(MarkerControl::Text, "[accent]hello", true);
        let MarkerKind::Text(text) = &marker.kind else {
            panic!("kind changed");
        };
        assert_eq!(text.text, "[accent]hello");
        assert!(text.formatted);

        let mut marker = ObjectiveMarker::from(TextureMarker::new("error", 0.0, 0.0));
        marker.control_text(MarkerControl::Texture, "copper-wall", false);
        marker.control_text(MarkerControl::Radius, "ignored", false);
        let MarkerKind::Texture(texture) = &marker.kind else {
            panic!("kind changed");
        };
        assert_eq!(texture.texture_name, "copper-wall");

        let mut marker = ObjectiveMarker::from(QuadMarker::default());
        marker.control_text(MarkerControl::Texture, "router", false);
        let MarkerKind::Quad(quad) = &marker.kind else {
            panic!("kind changed");
        };
        assert_eq!(quad.texture_name, "router");
    }
}
