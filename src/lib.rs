//! Huewheel is a small library for moving colors between their three common textual encodings
//! (`#rrggbb` hex literals, `rgb(r, g, b)` functional notation, and `hsl(h, s%, l%)` functional
//! notation) and for spinning palettes off a base color by walking the color wheel. The
//! underlying philosophy is that string-typed color plumbing is where bugs breed: a color that
//! has been parsed once should be able to reach any output encoding without being re-parsed, and
//! a malformed color string should fail loudly at the parse step instead of leaking `NaN`-shaped
//! garbage into output. Everything here is a pure function over value types; there is no I/O, no
//! shared state, and nothing to configure.

// we don't mess around with documentation
#![deny(missing_docs)]

extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod color;
pub mod convert;
mod csscolor;
pub mod palette;
pub mod prelude;
