//! `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` color literals.
//!
//! The trailing alpha digits are straight alpha, the way style sheets write
//! them (`#0b97c470` is 0x70/255 opaque). Omitted alpha means opaque.

use std::str::FromStr;

use crate::error::ParseError;
use crate::packed::PackedColor;

/// Parses a hex color literal into a packed color.
pub fn parse_hex(src: &str) -> Result<PackedColor, ParseError> {
    let Some(digits) = src.strip_prefix('#') else {
        return Err(ParseError::new("color literal must start with `#`", 0));
    };

    let mut nibbles = [0u8; 8];
    for (i, c) in digits.char_indices() {
        let Some(v) = c.to_digit(16) else {
            return Err(ParseError::new(format!("invalid hex digit {c:?}"), i + 1));
        };
        if i < nibbles.len() {
            nibbles[i] = v as u8;
        }
    }

    let n = nibbles;
    let [r, g, b, a] = match digits.len() {
        3 => [n[0] * 17, n[1] * 17, n[2] * 17, u8::MAX],
        4 => [n[0] * 17, n[1] * 17, n[2] * 17, n[3] * 17],
        6 => [n[0] << 4 | n[1], n[2] << 4 | n[3], n[4] << 4 | n[5], u8::MAX],
        8 => [n[0] << 4 | n[1], n[2] << 4 | n[3], n[4] << 4 | n[5], n[6] << 4 | n[7]],
        count => {
            return Err(ParseError::new(
                format!("color literal must have 3, 4, 6 or 8 digits, got {count}"),
                1,
            ));
        }
    };

    Ok(PackedColor::from_rgba_u8(r, g, b, a))
}

impl FromStr for PackedColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}
