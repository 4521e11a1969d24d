//! Packs normalized RGBA colors into a single 32-bit word and back.
//!
//! Each channel in [0, 1] is quantized to 8 bits. The four bytes are laid out
//! alpha, red, green, blue from the most significant end. Packing is lossy:
//! unpacking recovers every channel within 1/255.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`packed`] | `PackedColor`, `pack`, `unpack`, `extract_alpha` |
//! | [`signed`] | `sign_fix` and extraction from `i32` words |
//! | [`quantize`] | channel <-> byte conversion and its rounding policy |
//! | [`color`] | `ColorRgba` |
//! | [`hex`] | `#rrggbbaa` literal parsing |
//! | [`logging`] | `env_logger` setup for binaries |
//!
//! # Quick start
//!
//! ```rust
//! use hexpack::{extract_alpha, pack, unpack};
//!
//! let packed = pack(0.1, 0.5, 1.0, 0.45);
//! assert!(packed.to_i32() < 0);
//!
//! let color = unpack(packed);
//! assert!((color.g - 0.5).abs() <= 1.0 / 255.0);
//! assert!((extract_alpha(packed) - 0.45).abs() <= 1.0 / 255.0);
//! ```

pub mod color;
pub mod error;
pub mod hex;
pub mod logging;
pub mod packed;
pub mod quantize;
pub mod signed;

pub use color::ColorRgba;
pub use error::ParseError;
pub use hex::parse_hex;
pub use packed::{extract_alpha, pack, pack_rgb, unpack, PackedColor};
pub use signed::sign_fix;
