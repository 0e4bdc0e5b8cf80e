//! The string-in, string-out conversion surface. [`convert_color`] sniffs the source encoding
//! itself and is what most callers want; the three per-encoding entry points are for callers who
//! already know what they are holding and want a parse failure if they are wrong, rather than a
//! fallback guess. All four are symmetric over the target: any source encoding can reach any of
//! hex, RGB, or HSL in one call.

use color::{Color, ColorFormat, ColorParseError, HSLColor, RGBColor};

/// Converts a color string in any supported encoding to the requested output encoding. The
/// source encoding is recognized by the first character of the string: `#` for hex, `r` for
/// `rgb()`, anything else tried as `hsl()`.
///
/// ```
/// use huewheel::color::ColorFormat;
/// use huewheel::convert::convert_color;
///
/// assert_eq!(convert_color("#ff0000", ColorFormat::Rgb).unwrap(), "rgb(255, 0, 0)");
/// assert_eq!(convert_color("rgb(255, 0, 0)", ColorFormat::Hsl).unwrap(), "hsl(0, 100%, 50%)");
/// assert_eq!(convert_color("hsl(0, 100%, 50%)", ColorFormat::Rgb).unwrap(), "rgb(255, 0, 0)");
/// ```
pub fn convert_color(color: &str, format: ColorFormat) -> Result<String, ColorParseError> {
    color.parse::<Color>().map(|c| c.to_format(format))
}

/// Converts a `#rrggbb` hex literal to the requested encoding. Errors on anything that is not a
/// well-formed hex literal, even if it would parse as another encoding.
pub fn hex_to_any(hex: &str, format: ColorFormat) -> Result<String, ColorParseError> {
    RGBColor::from_hex_str(hex).map(|c| Color::Rgb(c).to_format(format))
}

/// Converts an `rgb(r, g, b)` string to the requested encoding. This covers both directions the
/// RGB source can go: hex (always zero-padded) and HSL, plus reformatting to RGB itself, which
/// emits the parsed integer channels as-is.
pub fn rgb_to_any(rgb: &str, format: ColorFormat) -> Result<String, ColorParseError> {
    rgb.parse::<RGBColor>().map(|c| Color::Rgb(c).to_format(format))
}

/// Converts an `hsl(h, s%, l%)` string to the requested encoding, including straight to hex:
/// the conversion goes through sRGB internally, so no second call is ever needed.
pub fn hsl_to_any(hsl: &str, format: ColorFormat) -> Result<String, ColorParseError> {
    hsl.parse::<HSLColor>().map(|c| Color::Hsl(c).to_format(format))
}
