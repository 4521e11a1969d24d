use bytemuck::{Pod, Zeroable};

use crate::packed::PackedColor;

/// Linear straight-alpha RGBA color.
///
/// Channels are expected in [0, 1]. Nothing enforces this; [`pack`](Self::pack)
/// clamps on the way into the packed representation.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Quantizes this color into a single 32-bit word.
    #[inline]
    pub fn pack(self) -> PackedColor {
        PackedColor::pack(self.r, self.g, self.b, self.a)
    }

    /// Largest absolute per-channel difference to `other`.
    ///
    /// Useful for comparing a decoded color against its source, where exact
    /// equality never holds because packing is lossy.
    pub fn max_channel_delta(self, other: Self) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs())
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for ColorRgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<ColorRgba> for (f32, f32, f32, f32) {
    fn from(c: ColorRgba) -> Self {
        (c.r, c.g, c.b, c.a)
    }
}
