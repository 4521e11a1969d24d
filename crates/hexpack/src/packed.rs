//! The packed 32-bit color word.
//!
//! Layout, most significant byte first:
//!
//! | bits | 31..24 | 23..16 | 15..8 | 7..0 |
//! |------|--------|--------|-------|------|
//! | byte | alpha  | red    | green | blue |
//!
//! The alpha byte stores transparency (`255 - alpha`), so an opaque color packs
//! to `0x00RRGGBB` and reads the same as a 24-bit hex literal. Any color with
//! an alpha byte `>= 0x80` (alpha below one half) has bit 31 set and is
//! negative when viewed as `i32`. That sign has no color meaning.

use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::color::ColorRgba;
use crate::quantize::{dequantize, is_out_of_range, quantize};

pub const ALPHA_SHIFT: u32 = 24;
pub const RED_SHIFT: u32 = 16;
pub const GREEN_SHIFT: u32 = 8;
pub const BLUE_SHIFT: u32 = 0;

const BYTE_MASK: u32 = 0xFF;
const RGB_MASK: u32 = 0x00FF_FFFF;

/// Four quantized channels in one 32-bit word.
///
/// Equality compares bit patterns. No ordering is provided: the numeric value
/// of a packed color says nothing about brightness.
///
/// `Default` and `Zeroable` both yield `0x00000000`, opaque black.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedColor(u32);

impl PackedColor {
    #[inline]
    pub const fn from_u32(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Reinterprets a signed word, as produced by hosts whose bitwise
    /// operators yield `i32`. Bits are kept as-is.
    #[inline]
    pub const fn from_i32(bits: i32) -> Self {
        Self(bits as u32)
    }

    /// Signed view of the same bits. Negative whenever the alpha byte is `>= 0x80`.
    #[inline]
    pub const fn to_i32(self) -> i32 {
        self.0 as i32
    }

    /// Quantizes straight-alpha channels in [0, 1] into a packed word.
    ///
    /// Out-of-range channels are clamped and NaN is treated as `0`.
    pub fn pack(r: f32, g: f32, b: f32, a: f32) -> Self {
        if [r, g, b, a].into_iter().any(is_out_of_range) {
            log::debug!("pack: clamping out-of-range channels r={r} g={g} b={b} a={a}");
        }
        Self::from_rgba_u8(quantize(r), quantize(g), quantize(b), quantize(a))
    }

    /// Opaque color from RGB channels; the alpha byte is zero.
    pub fn pack_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::pack(r, g, b, 1.0)
    }

    /// Packs straight-alpha bytes.
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            ((u8::MAX - a) as u32) << ALPHA_SHIFT
                | (r as u32) << RED_SHIFT
                | (g as u32) << GREEN_SHIFT
                | (b as u32) << BLUE_SHIFT,
        )
    }

    /// Straight-alpha bytes in `[r, g, b, a]` order.
    #[inline]
    pub const fn to_rgba_u8(self) -> [u8; 4] {
        [
            self.byte_at(RED_SHIFT),
            self.byte_at(GREEN_SHIFT),
            self.byte_at(BLUE_SHIFT),
            u8::MAX - self.byte_at(ALPHA_SHIFT),
        ]
    }

    /// Raw byte at `shift` bits from the bottom.
    ///
    /// The word is unsigned, so the shift never sign-extends and masking is
    /// enough for every position including the top one.
    #[inline]
    pub const fn byte_at(self, shift: u32) -> u8 {
        ((self.0 >> shift) & BYTE_MASK) as u8
    }

    /// Recovers all four channels, each within 1/255 of what was packed.
    pub fn unpack(self) -> ColorRgba {
        let [r, g, b, a] = self.to_rgba_u8();
        ColorRgba::new(dequantize(r), dequantize(g), dequantize(b), dequantize(a))
    }

    /// Alpha channel only.
    #[inline]
    pub fn alpha(self) -> f32 {
        alpha_from_byte(self.byte_at(ALPHA_SHIFT))
    }

    /// True when the color is not fully opaque.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        self.byte_at(ALPHA_SHIFT) != 0
    }

    /// Same RGB, fully opaque.
    #[inline]
    pub const fn without_alpha(self) -> Self {
        Self(self.0 & RGB_MASK)
    }
}

/// Alpha channel value for a raw (transparency) alpha byte.
#[inline]
pub(crate) fn alpha_from_byte(byte: u8) -> f32 {
    dequantize(u8::MAX - byte)
}

impl fmt::Debug for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedColor({:#010x})", self.0)
    }
}

/// Formats as a `#rrggbbaa` literal with straight alpha.
impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba_u8();
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl From<ColorRgba> for PackedColor {
    fn from(c: ColorRgba) -> Self {
        c.pack()
    }
}

impl From<PackedColor> for ColorRgba {
    fn from(p: PackedColor) -> Self {
        p.unpack()
    }
}

/// Packs straight-alpha channels in [0, 1]. See [`PackedColor::pack`].
#[inline]
pub fn pack(r: f32, g: f32, b: f32, a: f32) -> PackedColor {
    PackedColor::pack(r, g, b, a)
}

/// Packs an opaque color. See [`PackedColor::pack_rgb`].
#[inline]
pub fn pack_rgb(r: f32, g: f32, b: f32) -> PackedColor {
    PackedColor::pack_rgb(r, g, b)
}

/// Inverse of [`pack`] within quantization error.
#[inline]
pub fn unpack(packed: PackedColor) -> ColorRgba {
    packed.unpack()
}

/// Alpha-only fast path of [`unpack`].
#[inline]
pub fn extract_alpha(packed: PackedColor) -> f32 {
    packed.alpha()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / 255.0;

    fn close(actual: f32, expected: f32) -> bool {
        (actual - expected).abs() <= STEP
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn opaque_color_matches_hex_literal() {
        assert_eq!(pack(1.0, 0.0, 0.0, 1.0).to_u32(), 0x00FF_0000);
        assert_eq!(pack(0.0, 1.0, 0.0, 1.0).to_u32(), 0x0000_FF00);
        assert_eq!(pack(0.0, 0.0, 1.0, 1.0).to_u32(), 0x0000_00FF);
        assert_eq!(pack(1.0, 1.0, 1.0, 1.0).to_u32(), 0x00FF_FFFF);
    }

    #[test]
    fn fully_transparent_sets_top_byte() {
        let p = pack(0.0, 0.0, 0.0, 0.0);
        assert_eq!(p.to_u32(), 0xFF00_0000);
        assert_eq!(p.to_i32(), -16_777_216);
    }

    #[test]
    fn bytes_land_at_their_offsets() {
        let p = PackedColor::from_rgba_u8(0x12, 0x34, 0x56, 0xFF - 0x78);
        assert_eq!(p.to_u32(), 0x7812_3456);
        assert_eq!(p.byte_at(ALPHA_SHIFT), 0x78);
        assert_eq!(p.byte_at(RED_SHIFT), 0x12);
        assert_eq!(p.byte_at(GREEN_SHIFT), 0x34);
        assert_eq!(p.byte_at(BLUE_SHIFT), 0x56);
    }

    // ── sign ──────────────────────────────────────────────────────────────

    #[test]
    fn low_alpha_is_negative_as_i32() {
        let p = pack(0.1, 0.5, 1.0, 0.45);
        assert!(p.to_i32() < 0);
        assert_eq!(p.byte_at(ALPHA_SHIFT), 140);
    }

    #[test]
    fn high_alpha_is_non_negative_as_i32() {
        assert!(pack(0.1, 0.5, 1.0, 0.75).to_i32() >= 0);
        assert!(pack(0.1, 0.5, 1.0, 1.0).to_i32() >= 0);
    }

    #[test]
    fn signed_round_trip_keeps_bits() {
        for bits in [0u32, 1, 0x7FFF_FFFF, 0x8000_0000, 0xFFFF_FFFF, 0x8C1A_80FF] {
            let p = PackedColor::from_u32(bits);
            assert_eq!(PackedColor::from_i32(p.to_i32()), p);
        }
    }

    // ── unpack ────────────────────────────────────────────────────────────

    #[test]
    fn unpack_recovers_channels() {
        let c = unpack(pack(0.1, 0.5, 1.0, 0.45));
        assert!(close(c.r, 0.1), "r = {}", c.r);
        assert!(close(c.g, 0.5), "g = {}", c.g);
        assert!(close(c.b, 1.0), "b = {}", c.b);
        assert!(close(c.a, 0.45), "a = {}", c.a);
    }

    #[test]
    fn extract_alpha_matches_unpack() {
        for bits in [0u32, 0x7F00_0000, 0x8000_0000, 0xFF12_3456, 0x8C1A_80FF] {
            let p = PackedColor::from_u32(bits);
            assert_eq!(extract_alpha(p), unpack(p).a);
        }
    }

    #[test]
    fn unpack_is_total() {
        let c = unpack(PackedColor::from_i32(i32::MIN));
        assert_eq!(c, ColorRgba::new(0.0, 0.0, 0.0, 127.0 / 255.0));
        let c = unpack(PackedColor::from_i32(-1));
        assert_eq!(c, ColorRgba::new(1.0, 1.0, 1.0, 0.0));
    }

    // ── alpha helpers ─────────────────────────────────────────────────────

    #[test]
    fn pack_rgb_is_opaque() {
        let p = pack_rgb(0.2, 0.4, 0.6);
        assert!(!p.has_alpha());
        assert_eq!(p.alpha(), 1.0);
    }

    #[test]
    fn has_alpha_detects_translucency() {
        assert!(pack(0.2, 0.4, 0.6, 0.99).has_alpha());
        assert!(pack(0.2, 0.4, 0.6, 0.0).has_alpha());
        assert!(!pack(0.2, 0.4, 0.6, 1.0).has_alpha());
    }

    #[test]
    fn without_alpha_keeps_rgb() {
        let p = pack(0.1, 0.5, 1.0, 0.45);
        let opaque = p.without_alpha();
        assert!(!opaque.has_alpha());
        assert_eq!(opaque.to_rgba_u8()[..3], p.to_rgba_u8()[..3]);
        assert_eq!(opaque, pack_rgb(0.1, 0.5, 1.0));
    }

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(pack(-0.5, 1.5, 2.0, 3.0), pack(0.0, 1.0, 1.0, 1.0));
        assert_eq!(pack(f32::NAN, 0.0, 0.0, f32::NAN), pack(0.0, 0.0, 0.0, 0.0));
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn display_is_straight_alpha_hex() {
        assert_eq!(PackedColor::from_rgba_u8(0x0b, 0x97, 0xc4, 0x70).to_string(), "#0b97c470");
        assert_eq!(pack_rgb(1.0, 1.0, 1.0).to_string(), "#ffffffff");
    }

    #[test]
    fn debug_shows_raw_word() {
        assert_eq!(format!("{:?}", PackedColor::from_u32(0x8000_00ff)), "PackedColor(0x800000ff)");
    }

    #[test]
    fn pod_cast_is_the_raw_word() {
        let p = pack(0.1, 0.5, 1.0, 0.45);
        let raw: u32 = bytemuck::cast(p);
        assert_eq!(raw, p.to_u32());
    }
}
