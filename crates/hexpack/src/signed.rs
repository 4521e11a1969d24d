//! Extraction from signed 32-bit words.
//!
//! Some producers hand out packed colors as `i32`, built with bitwise operators
//! that only know signed integers. Reading such a word back with the same
//! operators hits one trap: an arithmetic `>> 24` sign-extends, so a top byte
//! `>= 0x80` comes out in `-128..=-1` instead of `128..=255`. [`sign_fix`]
//! undoes that. The lower three bytes are masked with `0xFF` after the shift,
//! which discards the extended bits and needs no correction.
//!
//! [`PackedColor`](crate::PackedColor) itself is unsigned and never takes this path; these
//! functions exist for interop and must agree with it bit for bit.

use crate::color::ColorRgba;
use crate::packed::{alpha_from_byte, ALPHA_SHIFT, BLUE_SHIFT, GREEN_SHIFT, RED_SHIFT};
use crate::quantize::dequantize;

/// Recovers the unsigned byte from a sign-extended top byte.
///
/// `value` must be in `-128..=127`, i.e. the result of `word >> 24` on an `i32`.
/// Negative inputs map to `value + 256`; non-negative inputs are returned as-is.
#[inline]
pub fn sign_fix(value: i32) -> u8 {
    debug_assert!(
        (-128..=127).contains(&value),
        "sign_fix: {value} is not a sign-extended byte"
    );
    if value < 0 {
        (value + 256) as u8
    } else {
        value as u8
    }
}

/// Top (alpha) byte of a signed word.
#[inline]
pub fn top_byte(packed: i32) -> u8 {
    sign_fix(packed >> ALPHA_SHIFT)
}

#[inline]
fn masked_byte(packed: i32, shift: u32) -> u8 {
    ((packed >> shift) & 0xFF) as u8
}

/// Same result as [`PackedColor::unpack`](crate::PackedColor::unpack) on `PackedColor::from_i32(packed)`.
pub fn unpack_signed(packed: i32) -> ColorRgba {
    ColorRgba::new(
        dequantize(masked_byte(packed, RED_SHIFT)),
        dequantize(masked_byte(packed, GREEN_SHIFT)),
        dequantize(masked_byte(packed, BLUE_SHIFT)),
        alpha_from_byte(top_byte(packed)),
    )
}

/// Same result as [`PackedColor::alpha`](crate::PackedColor::alpha) on `PackedColor::from_i32(packed)`.
#[inline]
pub fn extract_alpha_signed(packed: i32) -> f32 {
    alpha_from_byte(top_byte(packed))
}
