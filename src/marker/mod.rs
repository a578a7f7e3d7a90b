use binrw::{BinRead, BinResult, BinWrite, Endian, binrw};
use bitflags::bitflags;
use std::io::{Read, Seek, Write};
use strum_macros::{Display, EnumIter, FromRepr};

use crate::common::Position;

mod control;
pub use control::MarkerControl;

mod line;
pub use line::LineMarker;

mod point;
pub use point::PointMarker;

mod quad;
pub use quad::QuadMarker;

mod shape;
pub use shape::ShapeMarker;

mod shape_text;
pub use shape_text::ShapeTextMarker;

mod text;
pub use text::TextMarker;

mod texture;
pub use texture::TextureMarker;

/// Identifies which variant a persisted marker record holds.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkerType {
    Point = 0,
    Shape = 1,
    Text = 2,
    Line = 3,
    Texture = 4,
    ShapeText = 5,
    Quad = 6,
}

impl mlua::IntoLua for MarkerType {
    fn into_lua(self, _: &mlua::Lua) -> mlua::Result<mlua::Value> {
        Ok(mlua::Value::Integer(self as i64))
    }
}

impl TryFrom<u8> for MarkerType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or(())
    }
}

/// Visibility flags shared by every marker, persisted as a single byte.
#[binrw]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MarkerFlags(pub u8);

impl std::fmt::Debug for MarkerFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

bitflags! {
    impl MarkerFlags : u8 {
        const NONE = 0x00;
        /// Drawn in the world.
        const WORLD = 0x01;
        /// Drawn on the minimap.
        const MINIMAP = 0x02;
        /// Scales with the camera zoom.
        const AUTOSCALE = 0x04;
    }
}

/// The per-variant payload of a marker.
#[binrw]
#[br(import(marker_type: MarkerType))]
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerKind {
    #[br(pre_assert(marker_type == MarkerType::Point))]
    Point(PointMarker),
    #[br(pre_assert(marker_type == MarkerType::Shape))]
    Shape(ShapeMarker),
    #[br(pre_assert(marker_type == MarkerType::Text))]
    Text(TextMarker),
    #[br(pre_assert(marker_type == MarkerType::Line))]
    Line(LineMarker),
    #[br(pre_assert(marker_type == MarkerType::Texture))]
    Texture(TextureMarker),
    #[br(pre_assert(marker_type == MarkerType::ShapeText))]
    ShapeText(ShapeTextMarker),
    #[br(pre_assert(marker_type == MarkerType::Quad))]
    Quad(QuadMarker),
}

impl MarkerKind {
    pub fn marker_type(&self) -> MarkerType {
        match self {
            MarkerKind::Point(_) => MarkerType::Point,
            MarkerKind::Shape(_) => MarkerType::Shape,
            MarkerKind::Text(_) => MarkerType::Text,
            MarkerKind::Line(_) => MarkerType::Line,
            MarkerKind::Texture(_) => MarkerType::Texture,
            MarkerKind::ShapeText(_) => MarkerType::ShapeText,
            MarkerKind::Quad(_) => MarkerType::Quad,
        }
    }

    /// The anchor of this marker. Quads have no single anchor and report the center of their corners.
    pub fn pos(&self) -> Position {
        match self {
            MarkerKind::Point(marker) => marker.pos,
            MarkerKind::Shape(marker) => marker.pos,
            MarkerKind::Text(marker) => marker.pos,
            MarkerKind::Line(marker) => marker.pos,
            MarkerKind::Texture(marker) => marker.pos,
            MarkerKind::ShapeText(marker) => marker.pos,
            MarkerKind::Quad(marker) => marker.center(),
        }
    }
}

macro_rules! marker_kind_from {
    ($($variant:ident => $marker:ty),* $(,)?) => {
        $(
            impl From<$marker> for MarkerKind {
                fn from(marker: $marker) -> Self {
                    MarkerKind::$variant(marker)
                }
            }

            impl From<$marker> for ObjectiveMarker {
                fn from(marker: $marker) -> Self {
                    ObjectiveMarker::new(MarkerKind::$variant(marker))
                }
            }
        )*
    };
}

marker_kind_from! {
    Point => PointMarker,
    Shape => ShapeMarker,
    Text => TextMarker,
    Line => LineMarker,
    Texture => TextureMarker,
    ShapeText => ShapeTextMarker,
    Quad => QuadMarker,
}

/// A marker as held by a [`MarkerStore`](crate::MarkerStore): the shared flags plus the variant payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveMarker {
    /// Whether the marker is drawn in the world.
    pub world: bool,
    /// Whether the marker is drawn on the minimap.
    pub minimap: bool,
    /// Whether the marker scales with the camera zoom.
    pub autoscale: bool,
    /// Position in the owning store, only ever written by the store.
    array_index: usize,
    pub kind: MarkerKind,
}

impl ObjectiveMarker {
    pub fn new(kind: impl Into<MarkerKind>) -> Self {
        Self {
            world: true,
            minimap: false,
            autoscale: false,
            array_index: 0,
            kind: kind.into(),
        }
    }

    pub fn marker_type(&self) -> MarkerType {
        self.kind.marker_type()
    }

    /// The slot this marker occupies in its store. Meaningless for markers outside of a store.
    pub fn array_index(&self) -> usize {
        self.array_index
    }

    pub(crate) fn set_array_index(&mut self, index: usize) {
        self.array_index = index;
    }

    pub fn flags(&self) -> MarkerFlags {
        let mut flags = MarkerFlags::NONE;
        flags.set(MarkerFlags::WORLD, self.world);
        flags.set(MarkerFlags::MINIMAP, self.minimap);
        flags.set(MarkerFlags::AUTOSCALE, self.autoscale);
        flags
    }

    /// Replaces the text of text-bearing markers, other variants ignore this.
    /// If `formatted` is set, icon tags are resolved when the text is displayed.
    pub fn set_text(&mut self, text: &str, formatted: bool) {
        match &mut self.kind {
            MarkerKind::Text(marker) => marker.set_text(text, formatted),
            MarkerKind::ShapeText(marker) => marker.set_text(text, formatted),
            _ => {}
        }
    }
}

impl BinRead for ObjectiveMarker {
    type Args<'a> = (MarkerType,);

    fn read_options<R: Read + Seek>(
        reader: &mut R,
        endian: Endian,
        (marker_type,): Self::Args<'_>,
    ) -> BinResult<Self> {
        let flags = MarkerFlags::read_options(reader, endian, ())?;
        let kind = MarkerKind::read_options(reader, endian, (marker_type,))?;

        Ok(Self {
            world: flags.contains(MarkerFlags::WORLD),
            minimap: flags.contains(MarkerFlags::MINIMAP),
            autoscale: flags.contains(MarkerFlags::AUTOSCALE),
            array_index: 0,
            kind,
        })
    }
}

impl BinWrite for ObjectiveMarker {
    type Args<'a> = ();

    fn write_options<W: Write + Seek>(
        &self,
        writer: &mut W,
        endian: Endian,
        _: Self::Args<'_>,
    ) -> BinResult<()> {
        self.flags().write_options(writer, endian, ())?;
        self.kind.write_options(writer, endian, ())
    }
}
