/// An RGBA color with each channel in the range 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::from_rgba8888(0xffffffff);
    pub const RED: Color = Color::from_rgba8888(0xff0000ff);
    pub const GREEN: Color = Color::from_rgba8888(0x00ff00ff);
    pub const BLUE: Color = Color::from_rgba8888(0x0000ffff);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks a color stored as `0xRRGGBBAA`.
    pub const fn from_rgba8888(value: u32) -> Self {
        Self {
            r: ((value >> 24) & 0xff) as f32 / 255.0,
            g: ((value >> 16) & 0xff) as f32 / 255.0,
            b: ((value >> 8) & 0xff) as f32 / 255.0,
            a: (value & 0xff) as f32 / 255.0,
        }
    }

    /// Packs this color as `0xRRGGBBAA`.
    pub fn rgba8888(&self) -> u32 {
        (channel(self.r) << 24) | (channel(self.g) << 16) | (channel(self.b) << 8) | channel(self.a)
    }

    /// Parses `rrggbb` or `rrggbbaa`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Self::from_rgba8888((value << 8) | 0xff)),
            8 => Some(Self::from_rgba8888(value)),
            _ => None,
        }
    }

    /// Encodes this color as the double scripts pass to the `color` control code.
    /// The RGBA8888 value occupies the low 32 bits of the double's bit pattern.
    pub fn to_double_bits(&self) -> f64 {
        f64::from_bits(self.rgba8888() as u64)
    }

    /// Inverse of [`Color::to_double_bits`]. Only the low 32 bits are considered.
    pub fn from_double_bits(value: f64) -> Self {
        Self::from_rgba8888(value.to_bits() as u32)
    }

    /// Packs this color as ABGR8888 into the bits of an `f32`, as used in vertex buffers.
    /// Bit 24 is cleared so the result is never NaN.
    pub fn to_float_bits(&self) -> f32 {
        let abgr =
            (channel(self.a) << 24) | (channel(self.b) << 16) | (channel(self.g) << 8) | channel(self.r);
        f32::from_bits(abgr & 0xfeff_ffff)
    }

    /// Inverse of [`Color::to_float_bits`], the lowest alpha bit is lost.
    pub fn from_float_bits(value: f32) -> Self {
        let abgr = value.to_bits();
        Self {
            r: (abgr & 0xff) as f32 / 255.0,
            g: ((abgr >> 8) & 0xff) as f32 / 255.0,
            b: ((abgr >> 16) & 0xff) as f32 / 255.0,
            a: ((abgr >> 24) & 0xff) as f32 / 255.0,
        }
    }
}

fn channel(value: f32) -> u32 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u32
}
