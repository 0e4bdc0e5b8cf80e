//! Palette generation: deriving an ordered family of related colors from a single base color.
//! Six of the seven palette kinds are walks around the color wheel, each a fixed set of hue
//! rotations applied to the base; the seventh, monochromatic, holds the hue still and perturbs
//! saturation and lightness instead. The base color is normalized to HSL first, the shades are
//! built there, and each shade is then rendered in whatever output encoding the caller asked
//! for.

use std::str::FromStr;

use color::{Color, ColorFormat, ColorParseError, HSLColor};

/// A named rule for deriving related colors from a base color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteKind {
    /// The base plus its two neighbors 30 degrees to either side.
    Analogous,
    /// The base plus the color directly across the wheel.
    Complementary,
    /// The base plus the two colors flanking its complement by 30 degrees.
    SplitComplementary,
    /// Three colors spaced evenly 120 degrees apart.
    Triadic,
    /// Four colors forming two complementary pairs, 60 degrees between the members of each.
    Tetradic,
    /// Four colors spaced evenly 90 degrees apart.
    Square,
    /// The base plus four variants: saturation nudged 10 points each way, then lightness nudged
    /// 10 points each way, all clamped to 0-100. The hue never moves.
    Monochromatic,
}

impl PaletteKind {
    /// Every recognized palette kind, in the order their tags are documented.
    pub const ALL: [PaletteKind; 7] = [
        PaletteKind::Analogous,
        PaletteKind::Complementary,
        PaletteKind::SplitComplementary,
        PaletteKind::Triadic,
        PaletteKind::Tetradic,
        PaletteKind::Square,
        PaletteKind::Monochromatic,
    ];

    /// Builds the ordered shades of this palette kind from a base HSL color. The base itself is
    /// always the first element.
    pub fn shades(&self, base: HSLColor) -> Vec<HSLColor> {
        match *self {
            PaletteKind::Analogous => vec![base, base.rotate(30), base.rotate(-30)],
            PaletteKind::Complementary => vec![base, base.rotate(180)],
            PaletteKind::SplitComplementary => {
                vec![base, base.rotate(150), base.rotate(210)]
            }
            PaletteKind::Triadic => vec![base, base.rotate(120), base.rotate(240)],
            PaletteKind::Tetradic => {
                vec![base, base.rotate(60), base.rotate(180), base.rotate(240)]
            }
            PaletteKind::Square => {
                vec![base, base.rotate(90), base.rotate(180), base.rotate(270)]
            }
            PaletteKind::Monochromatic => vec![
                base,
                base.saturate(10),
                base.saturate(-10),
                base.lighten(10),
                base.lighten(-10),
            ],
        }
    }
}

impl FromStr for PaletteKind {
    type Err = ColorParseError;

    /// Case-insensitive match on the palette-type tags. "split-complementary" is also accepted
    /// with a space instead of the hyphen. An unrecognized tag is an error whose message lists
    /// the valid tags; nothing falls back to a default palette.
    fn from_str(s: &str) -> Result<PaletteKind, ColorParseError> {
        match s.to_lowercase().as_str() {
            "analogous" => Ok(PaletteKind::Analogous),
            "complementary" => Ok(PaletteKind::Complementary),
            "split-complementary" | "split complementary" => Ok(PaletteKind::SplitComplementary),
            "triadic" => Ok(PaletteKind::Triadic),
            "tetradic" => Ok(PaletteKind::Tetradic),
            "square" => Ok(PaletteKind::Square),
            "monochromatic" => Ok(PaletteKind::Monochromatic),
            _ => Err(ColorParseError::UnknownPaletteType),
        }
    }
}

/// Generates a palette from a base color string in any supported encoding, rendering every
/// shade in the requested output encoding. A malformed base color fails the whole operation;
/// there is no partial palette.
///
/// ```
/// use huewheel::color::ColorFormat;
/// use huewheel::palette::{generate_palette, PaletteKind};
///
/// let pair = generate_palette("#ff0000", PaletteKind::Complementary, ColorFormat::Hsl).unwrap();
/// assert_eq!(pair, vec!["hsl(0, 100%, 50%)", "hsl(180, 100%, 50%)"]);
/// ```
pub fn generate_palette(
    color: &str,
    kind: PaletteKind,
    format: ColorFormat,
) -> Result<Vec<String>, ColorParseError> {
    let base = color.parse::<Color>()?.to_hsl();
    Ok(kind
        .shades(base)
        .into_iter()
        .map(|shade| Color::Hsl(shade).to_format(format))
        .collect())
}
