//! This module simply brings the whole public surface of the crate under a single namespace, to
//! prevent excessive imports: the two color types, the tagged [`Color`] union, the format and
//! palette-kind tags, the parse error, and the string-level conversion and palette entry points.

pub use color::{Color, ColorFormat, ColorParseError, HSLColor, RGBColor};
pub use convert::{convert_color, hex_to_any, hsl_to_any, rgb_to_any};
pub use palette::{generate_palette, PaletteKind};
