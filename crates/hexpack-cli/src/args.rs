use argh::FromArgs;
use hexpack::PackedColor;

#[derive(FromArgs, Debug, PartialEq)]
/// Pack normalized RGBA channels into a 32-bit color word and back
pub struct TopLevel {
    /// log filter in env_logger syntax, e.g. `hexpack=debug` to see clamped channels [default: warn]
    #[argh(option)]
    pub log: Option<String>,

    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug, PartialEq)]
#[argh(subcommand)]
pub enum Command {
    Pack(PackCmd),
    Unpack(UnpackCmd),
    Alpha(AlphaCmd),
    Parse(ParseCmd),
}

#[derive(FromArgs, Debug, PartialEq)]
/// Quantize channels in [0, 1] into a packed word (use `--` before negative values)
#[argh(subcommand, name = "pack")]
pub struct PackCmd {
    /// red channel
    #[argh(positional)]
    pub r: f32,

    /// green channel
    #[argh(positional)]
    pub g: f32,

    /// blue channel
    #[argh(positional)]
    pub b: f32,

    /// alpha channel
    #[argh(positional)]
    pub a: f32,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Decode a packed word: decimal, 0x hex, or negative after `--`
#[argh(subcommand, name = "unpack")]
pub struct UnpackCmd {
    /// packed color word
    #[argh(positional, from_str_fn(parse_word))]
    pub word: PackedColor,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Decode the alpha channel of a packed word
#[argh(subcommand, name = "alpha")]
pub struct AlphaCmd {
    /// packed color word
    #[argh(positional, from_str_fn(parse_word))]
    pub word: PackedColor,
}

#[derive(FromArgs, Debug, PartialEq)]
/// Parse a #rgb, #rgba, #rrggbb or #rrggbbaa literal
#[argh(subcommand, name = "parse")]
pub struct ParseCmd {
    /// hex color literal
    #[argh(positional)]
    pub color: PackedColor,
}

/// Accepts unsigned or negative decimal and `0x` hex.
///
/// Negative values are read as the signed view of the same 32 bits.
pub fn parse_word(s: &str) -> Result<PackedColor, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16)
            .map(PackedColor::from_u32)
            .map_err(|e| format!("invalid hex word `{s}`: {e}"));
    }
    if s.starts_with('-') {
        return s
            .parse::<i32>()
            .map(PackedColor::from_i32)
            .map_err(|e| format!("`{s}` is not a signed 32-bit word: {e}"));
    }
    s.parse::<u32>()
        .map(PackedColor::from_u32)
        .map_err(|e| format!("`{s}` is not a 32-bit word: {e}"))
}
