//! Color-theory palettes derived from one base color by fixed HSL offsets.

use std::fmt;
use std::str::FromStr;

use dh_domain::Error;
use serde::{Deserialize, Serialize};

use crate::hsl::Hsl;

const MONOCHROMATIC_LIGHTNESS: [f64; 5] = [-40.0, -20.0, 0.0, 20.0, 40.0];
const ANALOGOUS_HUES: [f64; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];
const COMPLEMENTARY_HUES: [f64; 2] = [0.0, 180.0];
const SPLIT_COMPLEMENTARY_HUES: [f64; 3] = [0.0, 150.0, 210.0];
const TRIADIC_HUES: [f64; 3] = [0.0, 120.0, 240.0];
const TETRADIC_HUES: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyType {
    Monochromatic,
    Analogous,
    Complementary,
    SplitComplementary,
    Triadic,
    Tetradic,
}

impl HarmonyType {
    pub const ALL: [HarmonyType; 6] = [
        HarmonyType::Monochromatic,
        HarmonyType::Analogous,
        HarmonyType::Complementary,
        HarmonyType::SplitComplementary,
        HarmonyType::Triadic,
        HarmonyType::Tetradic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyType::Monochromatic => "monochromatic",
            HarmonyType::Analogous => "analogous",
            HarmonyType::Complementary => "complementary",
            HarmonyType::SplitComplementary => "split-complementary",
            HarmonyType::Triadic => "triadic",
            HarmonyType::Tetradic => "tetradic",
        }
    }

    /// Number of colors the palette always contains.
    pub fn palette_len(self) -> usize {
        match self {
            HarmonyType::Monochromatic => MONOCHROMATIC_LIGHTNESS.len(),
            HarmonyType::Analogous => ANALOGOUS_HUES.len(),
            HarmonyType::Complementary => COMPLEMENTARY_HUES.len(),
            HarmonyType::SplitComplementary => SPLIT_COMPLEMENTARY_HUES.len(),
            HarmonyType::Triadic => TRIADIC_HUES.len(),
            HarmonyType::Tetradic => TETRADIC_HUES.len(),
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        HarmonyType::ALL
            .into_iter()
            .find(|h| h.as_str() == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("unknown harmony type '{s}'")))
    }
}

fn rotations(base: Hsl, offsets: &[f64]) -> Vec<Hsl> {
    offsets.iter().map(|d| base.rotate(*d)).collect()
}

/// Five shades of the base hue, lightness `l-40 .. l+40` in steps of 20 (clamped).
pub fn monochromatic(base: Hsl) -> Vec<Hsl> {
    MONOCHROMATIC_LIGHTNESS.iter().map(|d| base.lighten(*d)).collect()
}

/// Hues at -30, -15, 0, +15, +30 degrees. The middle entry is the base.
pub fn analogous(base: Hsl) -> Vec<Hsl> {
    rotations(base, &ANALOGOUS_HUES)
}

pub fn complementary(base: Hsl) -> Vec<Hsl> {
    rotations(base, &COMPLEMENTARY_HUES)
}

pub fn split_complementary(base: Hsl) -> Vec<Hsl> {
    rotations(base, &SPLIT_COMPLEMENTARY_HUES)
}

pub fn triadic(base: Hsl) -> Vec<Hsl> {
    rotations(base, &TRIADIC_HUES)
}

pub fn tetradic(base: Hsl) -> Vec<Hsl> {
    rotations(base, &TETRADIC_HUES)
}

/// The palette for `kind` in HSL, before hex conversion.
pub fn generate_hsl(base: Hsl, kind: HarmonyType) -> Vec<Hsl> {
    let base = Hsl::new(base.h, base.s, base.l);
    match kind {
        HarmonyType::Monochromatic => monochromatic(base),
        HarmonyType::Analogous => analogous(base),
        HarmonyType::Complementary => complementary(base),
        HarmonyType::SplitComplementary => split_complementary(base),
        HarmonyType::Triadic => triadic(base),
        HarmonyType::Tetradic => tetradic(base),
    }
}

/// The palette for `kind` as `#RRGGBB` strings.
pub fn generate(base: Hsl, kind: HarmonyType) -> Vec<String> {
    generate_hsl(base, kind).into_iter().map(Hsl::to_hex).collect()
}
