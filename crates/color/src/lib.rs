//! Color harmony generation.
//!
//! All palettes are computed in HSL space by fixed hue or lightness offsets
//! from a base color, then rendered as `#RRGGBB` strings. Hues always land in
//! `[0, 360)`; saturation and lightness are clamped to `[0, 100]`.

pub mod harmony;
pub mod hsl;
pub mod parse;

pub use harmony::{
    analogous, complementary, generate, generate_hsl, monochromatic, split_complementary, tetradic,
    triadic, HarmonyType,
};
pub use hsl::{Hsl, Rgb};
pub use parse::{parse_color_input, parse_hsl, NAMED_COLORS};
