//! This file defines the color value types and the conversion math between them. There are two
//! concrete spaces: integer sRGB (the familiar 0-255 channels, which is also what a hex literal
//! encodes) and integer HSL (hue in degrees, saturation and lightness as percentages). The
//! conversions are the standard cylindrical-transform formulas, done in `f64` internally and
//! rounded back to integers at the boundary. Because HSL keeps whole-degree hue and whole-percent
//! saturation and lightness (one percent of lightness is already 2.55 channel units), a round
//! trip through the other space can drift by up to five units per channel; colors with higher
//! HSL-side precision simply do not exist. A parsed color is carried as a [`Color`], which
//! remembers its source space: converting a color to the encoding it already lives in reformats
//! it exactly instead of bouncing it through the other space and picking up rounding drift.

use std::fmt;
use std::str::FromStr;

use csscolor;
pub use csscolor::ColorParseError;

/// A color in the integer sRGB space: three channels, each 0-255. This is the space a `#rrggbb`
/// literal denotes, two hex digits per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, 0-255.
    pub r: u8,
    /// The green channel, 0-255.
    pub g: u8,
    /// The blue channel, 0-255.
    pub b: u8,
}

/// A color in the integer HSL space: hue as a whole degree on the color wheel, saturation and
/// lightness as whole percentages. Gray (any color with zero saturation) is represented with a
/// hue of 0, although any hue would denote the same color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, 0-359 degrees.
    pub h: u16,
    /// The saturation component, 0-100 percent.
    pub s: u8,
    /// The lightness component, 0-100 percent.
    pub l: u8,
}

/// One of the three textual encodings a color can be rendered to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    /// A `#rrggbb` literal, lowercase and always zero-padded to six digits.
    Hex,
    /// `rgb(r, g, b)` functional notation with integer channels.
    Rgb,
    /// `hsl(h, s%, l%)` functional notation with integer components.
    Hsl,
}

/// A parsed color, tagged with the space it was written in. Hex literals parse to the `Rgb` arm,
/// since a hex literal is just an sRGB color in different clothes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// A color parsed from a hex literal or `rgb()` notation.
    Rgb(RGBColor),
    /// A color parsed from `hsl()` notation.
    Hsl(HSLColor),
}

impl RGBColor {
    /// Parses a `#rrggbb` hex literal. This is separate from the `FromStr` impl, which handles
    /// `rgb()` functional notation, because the two encodings denote the same space but have
    /// entirely different syntax.
    pub fn from_hex_str(hex: &str) -> Result<RGBColor, ColorParseError> {
        let (r, g, b) = csscolor::parse_hex_str(hex)?;
        Ok(RGBColor { r, g, b })
    }

    /// Renders this color as a lowercase `#rrggbb` literal. Channels are always zero-padded to
    /// two digits, so the result is exactly seven characters.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to HSL. This is the standard transform: lightness is the midpoint of the largest
    /// and smallest channels, saturation is the spread between them scaled by where the lightness
    /// sits, and hue comes from which channel dominates. When two channels tie for largest, red
    /// wins over green wins over blue, which only changes which of two equivalent hue formulas is
    /// used, not the resulting angle.
    pub fn to_hsl(&self) -> HSLColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let (h, s) = if max == min {
            // achromatic: hue is arbitrary, use 0
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            // hue as a fraction of the wheel, offset by which sixth we're in
            let h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (h / 6.0, s)
        };
        HSLColor {
            // rounding can push the hue fraction to exactly 1, which is the same angle as 0
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

/// The piecewise-linear segment evaluation at the heart of HSL-to-RGB: given the two chroma
/// intermediates and a hue fraction, produces one channel in [0, 1]. The fraction is first
/// wrapped back into [0, 1), since the red and blue channels are sampled a third of a turn away
/// from the hue itself.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl HSLColor {
    /// Converts to integer sRGB using the standard transform: the two chroma intermediates `q`
    /// and `p` bracket the channel values, and each channel samples the same piecewise-linear
    /// ramp a third of a turn apart. Channels are rounded to the nearest integer; by
    /// construction they cannot leave 0-255.
    pub fn to_rgb(&self) -> RGBColor {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;
        let (r, g, b) = if s == 0.0 {
            // achromatic: every channel is just the lightness
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };
        RGBColor {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }

    /// Rotates the hue by the given number of degrees, positive or negative, wrapping around the
    /// wheel: rotating hue 10 by -30 gives 340, not -20. Saturation and lightness are untouched.
    pub fn rotate(&self, degrees: i32) -> HSLColor {
        HSLColor {
            h: (i32::from(self.h) + degrees).rem_euclid(360) as u16,
            ..*self
        }
    }

    /// Shifts saturation by the given signed percentage, clamping to 0-100.
    pub fn saturate(&self, delta: i32) -> HSLColor {
        HSLColor {
            s: clamp_percent(i32::from(self.s) + delta),
            ..*self
        }
    }

    /// Shifts lightness by the given signed percentage, clamping to 0-100.
    pub fn lighten(&self, delta: i32) -> HSLColor {
        HSLColor {
            l: clamp_percent(i32::from(self.l) + delta),
            ..*self
        }
    }
}

fn clamp_percent(val: i32) -> u8 {
    val.max(0).min(100) as u8
}

impl Color {
    /// Renders this color in the requested encoding. A color already in the target space is
    /// formatted directly; otherwise it is converted first. Every (source, target) pair works,
    /// including HSL straight to hex.
    pub fn to_format(&self, format: ColorFormat) -> String {
        match (*self, format) {
            (Color::Rgb(c), ColorFormat::Hex) => c.to_hex_string(),
            (Color::Rgb(c), ColorFormat::Rgb) => c.to_string(),
            (Color::Rgb(c), ColorFormat::Hsl) => c.to_hsl().to_string(),
            (Color::Hsl(c), ColorFormat::Hex) => c.to_rgb().to_hex_string(),
            (Color::Hsl(c), ColorFormat::Rgb) => c.to_rgb().to_string(),
            (Color::Hsl(c), ColorFormat::Hsl) => c.to_string(),
        }
    }

    /// This color's HSL representation, converting if it was parsed as sRGB. This is the
    /// normalization step palette generation starts from.
    pub fn to_hsl(&self) -> HSLColor {
        match *self {
            Color::Rgb(c) => c.to_hsl(),
            Color::Hsl(c) => c,
        }
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for HSLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl FromStr for RGBColor {
    type Err = ColorParseError;

    /// Parses `rgb(r, g, b)` functional notation. For hex literals use
    /// [`RGBColor::from_hex_str`].
    fn from_str(s: &str) -> Result<RGBColor, ColorParseError> {
        let (r, g, b) = csscolor::parse_rgb_str(s)?;
        Ok(RGBColor { r, g, b })
    }
}

impl FromStr for HSLColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<HSLColor, ColorParseError> {
        let (h, sat, l) = csscolor::parse_hsl_str(s)?;
        Ok(HSLColor { h, s: sat, l })
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Recognizes the source encoding by the first character: `#` means a hex literal, `r` means
    /// `rgb()` notation, and anything else is tried as `hsl()` notation. A string that matches
    /// none of the three grammars is an error, never a guess.
    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        match s.chars().next() {
            Some('#') => RGBColor::from_hex_str(s).map(Color::Rgb),
            Some('r') => s.parse::<RGBColor>().map(Color::Rgb),
            _ => s.parse::<HSLColor>().map(Color::Hsl),
        }
    }
}

impl FromStr for ColorFormat {
    type Err = ColorParseError;

    /// Case-insensitive match on the three format tags.
    fn from_str(s: &str) -> Result<ColorFormat, ColorParseError> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "hsl" => Ok(ColorFormat::Hsl),
            _ => Err(ColorParseError::UnknownFormat),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_to_hsl() {
        let red = RGBColor { r: 255, g: 0, b: 0 };
        assert_eq!(red.to_hsl(), HSLColor { h: 0, s: 100, l: 50 });
        let teal = RGBColor { r: 0, g: 128, b: 128 };
        assert_eq!(teal.to_hsl(), HSLColor { h: 180, s: 100, l: 25 });
        // achromatic colors come out with hue and saturation 0
        let gray = RGBColor { r: 128, g: 128, b: 128 };
        assert_eq!(gray.to_hsl(), HSLColor { h: 0, s: 0, l: 50 });
        let white = RGBColor { r: 255, g: 255, b: 255 };
        assert_eq!(white.to_hsl(), HSLColor { h: 0, s: 0, l: 100 });
        // yellow ties red and green for the maximum; the red branch wins but the angle is the same
        let yellow = RGBColor { r: 255, g: 255, b: 0 };
        assert_eq!(yellow.to_hsl(), HSLColor { h: 60, s: 100, l: 50 });
    }

    #[test]
    fn test_hsl_to_rgb() {
        let red = HSLColor { h: 0, s: 100, l: 50 };
        assert_eq!(red.to_rgb(), RGBColor { r: 255, g: 0, b: 0 });
        let green = HSLColor { h: 120, s: 100, l: 50 };
        assert_eq!(green.to_rgb(), RGBColor { r: 0, g: 255, b: 0 });
        let blue = HSLColor { h: 240, s: 100, l: 50 };
        assert_eq!(blue.to_rgb(), RGBColor { r: 0, g: 0, b: 255 });
        // zero saturation short-circuits to pure lightness
        let gray = HSLColor { h: 300, s: 0, l: 50 };
        assert_eq!(gray.to_rgb(), RGBColor { r: 128, g: 128, b: 128 });
    }

    #[test]
    fn test_hue_to_channel_segments() {
        // q and p chosen so the four segments are distinguishable
        let (p, q) = (0.2, 0.8);
        // rising segment at t just above 0
        assert!(approx_eq!(f64, hue_to_channel(p, q, 1.0 / 12.0), 0.5, epsilon = 1e-9));
        // flat top between 1/6 and 1/2
        assert!(approx_eq!(f64, hue_to_channel(p, q, 0.25), q, epsilon = 1e-9));
        // falling segment between 1/2 and 2/3
        assert!(approx_eq!(f64, hue_to_channel(p, q, 7.0 / 12.0), 0.5, epsilon = 1e-9));
        // flat bottom past 2/3
        assert!(approx_eq!(f64, hue_to_channel(p, q, 0.9), p, epsilon = 1e-9));
        // wrapping: sampling a third of a turn below zero lands in the falling segment
        assert!(approx_eq!(
            f64,
            hue_to_channel(p, q, -1.0 / 3.0),
            hue_to_channel(p, q, 2.0 / 3.0),
            epsilon = 1e-9
        ));
    }

    #[test]
    fn test_round_trip_tolerance() {
        // a 17-step lattice over the RGB cube: every channel must survive the trip through HSL
        // and back to within five units. The bound is set by the integer quantization of the HSL
        // side, not by the transform: one percent of lightness is 2.55 channel units, and hue and
        // saturation quantize on top of that. Exhaustive search over [0,255]^3 puts the worst
        // case at exactly 5.
        for r in (0..256).step_by(17) {
            for g in (0..256).step_by(17) {
                for b in (0..256).step_by(17) {
                    let rgb = RGBColor {
                        r: r as u8,
                        g: g as u8,
                        b: b as u8,
                    };
                    let back = rgb.to_hsl().to_rgb();
                    assert!(
                        (i32::from(back.r) - i32::from(rgb.r)).abs() <= 5
                            && (i32::from(back.g) - i32::from(rgb.g)).abs() <= 5
                            && (i32::from(back.b) - i32::from(rgb.b)).abs() <= 5,
                        "{} came back as {}",
                        rgb,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_round_trip_quantization_cases() {
        // dark near-black blue: lightness 3.33% rounds to 3%, pulling the channel down two units
        let dim = RGBColor { r: 0, g: 0, b: 17 };
        assert_eq!(dim.to_hsl().to_rgb(), RGBColor { r: 0, g: 0, b: 15 });
        // the cube-wide worst case: all of hue, saturation, and lightness land badly at once
        let worst = RGBColor { r: 2, g: 228, b: 230 };
        let back = worst.to_hsl().to_rgb();
        assert!(
            (i32::from(back.r) - 2).abs() <= 5
                && (i32::from(back.g) - 228).abs() <= 5
                && (i32::from(back.b) - 230).abs() <= 5,
            "{} came back as {}",
            worst,
            back
        );
    }

    #[test]
    fn test_hue_rotation() {
        let base = HSLColor { h: 10, s: 100, l: 50 };
        assert_eq!(base.rotate(30).h, 40);
        // negative rotation wraps to 340, not -20
        assert_eq!(base.rotate(-30).h, 340);
        assert_eq!(base.rotate(360).h, 10);
        assert_eq!(base.rotate(-720).h, 10);
        let late = HSLColor { h: 350, s: 50, l: 50 };
        assert_eq!(late.rotate(30).h, 20);
    }

    #[test]
    fn test_saturate_and_lighten_clamp() {
        let vivid = HSLColor { h: 200, s: 95, l: 5 };
        assert_eq!(vivid.saturate(10).s, 100);
        assert_eq!(vivid.saturate(-10).s, 85);
        assert_eq!(vivid.lighten(-10).l, 0);
        assert_eq!(vivid.lighten(10).l, 15);
    }

    #[test]
    fn test_display_and_hex() {
        let c = RGBColor { r: 255, g: 0, b: 10 };
        assert_eq!(c.to_string(), "rgb(255, 0, 10)");
        // single-digit channels are zero-padded, so the literal is always seven characters
        assert_eq!(c.to_hex_string(), "#ff000a");
        assert_eq!(RGBColor { r: 5, g: 5, b: 5 }.to_hex_string(), "#050505");
        let h = HSLColor { h: 0, s: 100, l: 50 };
        assert_eq!(h.to_string(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_color_from_str_dispatch() {
        assert_eq!(
            "#ff0000".parse::<Color>().unwrap(),
            Color::Rgb(RGBColor { r: 255, g: 0, b: 0 })
        );
        assert_eq!(
            "rgb(1, 2, 3)".parse::<Color>().unwrap(),
            Color::Rgb(RGBColor { r: 1, g: 2, b: 3 })
        );
        assert_eq!(
            "hsl(120, 50%, 50%)".parse::<Color>().unwrap(),
            Color::Hsl(HSLColor { h: 120, s: 50, l: 50 })
        );
        // anything that starts with 'r' but isn't rgb() fails as RGB, not as HSL
        assert_eq!(
            "red".parse::<Color>(),
            Err(ColorParseError::InvalidRgbSyntax)
        );
        assert_eq!("".parse::<Color>(), Err(ColorParseError::InvalidHslSyntax));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("hex".parse::<ColorFormat>().unwrap(), ColorFormat::Hex);
        assert_eq!("RGB".parse::<ColorFormat>().unwrap(), ColorFormat::Rgb);
        assert_eq!("Hsl".parse::<ColorFormat>().unwrap(), ColorFormat::Hsl);
        assert_eq!("cmyk".parse::<ColorFormat>(), Err(ColorParseError::UnknownFormat));
    }
}
