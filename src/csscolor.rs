//! This file handles the string-parsing side of the crate: recognizing `#rrggbb` hex literals and
//! the CSS-ish functional notations `rgb(r, g, b)` and `hsl(h, s%, l%)`, and turning them into
//! checked integer components. Its end goal is the implementation of `FromStr` for the RGB and HSL
//! color types, although the specific `impl` blocks live in `color.rs`. Two deliberate caveats:
//! components are only integral ("45.5%" is invalid, as is a fractional channel like "127.5"), and
//! every malformed or out-of-range input is a hard error rather than a silently mangled color.

use std::error::Error;
use std::fmt;

use regex::Regex;

lazy_static! {
    // exactly '#' plus six hex digits; shorthand #rgb is not supported
    static ref HEX_PATTERN: Regex = Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap();
    static ref RGB_PATTERN: Regex =
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap();
    static ref HSL_PATTERN: Regex =
        Regex::new(r"^hsl\(\s*(\d+)\s*,\s*(\d{1,3})%\s*,\s*(\d{1,3})%\s*\)$").unwrap();
}

/// An error in interpreting a color, format, or palette-type string. Every parse failure in the
/// crate surfaces as one of these variants; nothing is coerced or guessed at.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string was dispatched as a hex literal (leading `#`) but is not `#` followed by exactly
    /// six hexadecimal digits.
    InvalidHexLiteral,
    /// The string was dispatched as RGB functional notation but does not match
    /// `rgb(int, int, int)`.
    InvalidRgbSyntax,
    /// The string was dispatched as HSL functional notation but does not match
    /// `hsl(int, int%, int%)`.
    InvalidHslSyntax,
    /// Every component parsed, but one of them falls outside its allowed range: an RGB channel
    /// above 255, or a saturation or lightness percentage above 100.
    ComponentOutOfRange,
    /// A format tag that is none of "hex", "rgb", or "hsl".
    UnknownFormat,
    /// A palette-type tag that matches none of the recognized palette kinds.
    UnknownPaletteType,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::InvalidHexLiteral => {
                write!(f, "invalid hex color: expected '#' followed by six hex digits")
            }
            ColorParseError::InvalidRgbSyntax => {
                write!(f, "invalid RGB color: expected the form 'rgb(r, g, b)'")
            }
            ColorParseError::InvalidHslSyntax => {
                write!(f, "invalid HSL color: expected the form 'hsl(h, s%, l%)'")
            }
            ColorParseError::ComponentOutOfRange => {
                write!(f, "color component out of range (channels 0-255, percentages 0-100)")
            }
            ColorParseError::UnknownFormat => {
                write!(f, "unknown color format: expected one of 'hex', 'rgb', 'hsl'")
            }
            ColorParseError::UnknownPaletteType => write!(
                f,
                "unknown palette type: expected one of 'analogous', 'complementary', \
                 'split-complementary', 'triadic', 'tetradic', 'square', 'monochromatic'"
            ),
        }
    }
}

impl Error for ColorParseError {}

/// Parses a `#rrggbb` literal into its three byte components. The pattern check guarantees the
/// substring parses succeed, so the `unwrap`s cannot fire.
pub(crate) fn parse_hex_str(hex: &str) -> Result<(u8, u8, u8), ColorParseError> {
    if !HEX_PATTERN.is_match(hex) {
        return Err(ColorParseError::InvalidHexLiteral);
    }
    let r = u8::from_str_radix(&hex[1..3], 16).unwrap();
    let g = u8::from_str_radix(&hex[3..5], 16).unwrap();
    let b = u8::from_str_radix(&hex[5..7], 16).unwrap();
    Ok((r, g, b))
}

/// Parses a string of the form `rgb(r, g, b)`, where r, g, and b are integers 0-255, returning
/// the three components. Whitespace around the commas is tolerated; floats, percentages, and
/// extra arguments are not.
pub(crate) fn parse_rgb_str(rgb: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let caps = match RGB_PATTERN.captures(rgb) {
        Some(caps) => caps,
        None => return Err(ColorParseError::InvalidRgbSyntax),
    };
    // at most three digits each, so u32 parsing cannot overflow
    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let val: u32 = caps[i + 1].parse().unwrap();
        if val > 255 {
            return Err(ColorParseError::ComponentOutOfRange);
        }
        *channel = val as u8;
    }
    Ok((channels[0], channels[1], channels[2]))
}

/// Parses a string of the form `hsl(h, s%, l%)` into integer hue, saturation, and lightness.
/// Hue is an angle and therefore cyclic: a literal of 360 or more, of any number of digits, is
/// reduced mod 360 rather than rejected (a literal too large even for a `u64` is a range error).
/// Saturation and lightness above 100 are range errors.
pub(crate) fn parse_hsl_str(hsl: &str) -> Result<(u16, u8, u8), ColorParseError> {
    let caps = match HSL_PATTERN.captures(hsl) {
        Some(caps) => caps,
        None => return Err(ColorParseError::InvalidHslSyntax),
    };
    let h: u64 = caps[1]
        .parse()
        .map_err(|_| ColorParseError::ComponentOutOfRange)?;
    let s: u32 = caps[2].parse().unwrap();
    let l: u32 = caps[3].parse().unwrap();
    if s > 100 || l > 100 {
        return Err(ColorParseError::ComponentOutOfRange);
    }
    Ok(((h % 360) as u16, s as u8, l as u8))
}
