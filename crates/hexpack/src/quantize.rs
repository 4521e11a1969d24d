//! Float channel <-> 8-bit byte conversion.
//!
//! Rounding policy: values are clamped to [0, 1] first (NaN maps to 0), then
//! scaled by 255 and rounded half away from zero. On the clamped domain this
//! is round-half-up, so `0.5` (exactly `127.5` after scaling) quantizes to `128`.

/// Largest byte value; also the scale factor between channel and byte.
pub const BYTE_MAX: f32 = 255.0;

/// Maps a channel in [0, 1] to a byte in [0, 255].
///
/// Out-of-range inputs are clamped. NaN quantizes to `0`.
#[inline]
pub fn quantize(channel: f32) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    // Clamped and rounded, so the value is already in 0..=255.
    (channel.clamp(0.0, 1.0) * BYTE_MAX).round() as u8
}

/// Maps a byte back to a channel in [0, 1].
#[inline]
pub fn dequantize(byte: u8) -> f32 {
    byte as f32 / BYTE_MAX
}

/// Returns true when `channel` would be altered by clamping.
#[inline]
pub(crate) fn is_out_of_range(channel: f32) -> bool {
    !(0.0..=1.0).contains(&channel)
}
