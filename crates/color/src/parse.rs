//! Permissive color input parsing.
//!
//! Recognised notations are normalised to `#RRGGBB`; anything else is handed
//! back unchanged so the caller can echo it as an invalid color.

use std::sync::LazyLock;

use regex::Regex;

use crate::hsl::{Hsl, Rgb};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern is valid")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
        .expect("rgb pattern is valid")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsl\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$",
    )
    .expect("hsl pattern is valid")
});

/// CSS named colors accepted as input.
pub const NAMED_COLORS: [(&str, &str); 18] = [
    ("red", "#FF0000"),
    ("green", "#008000"),
    ("blue", "#0000FF"),
    ("yellow", "#FFFF00"),
    ("cyan", "#00FFFF"),
    ("magenta", "#FF00FF"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("gray", "#808080"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("pink", "#FFC0CB"),
    ("brown", "#A52A2A"),
    ("lime", "#00FF00"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("olive", "#808000"),
    ("maroon", "#800000"),
];

enum Parsed {
    Rgb(Rgb),
    Hsl(Hsl),
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let caps = HEX_RE.captures(hex)?;
    let digits = &caps[1];
    let full: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let channel = |i: usize| u8::from_str_radix(&full[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_any(input: &str) -> Option<Parsed> {
    let trimmed = input.trim();

    if let Some(rgb) = parse_hex(trimmed) {
        return Some(Parsed::Rgb(rgb));
    }

    if let Some(caps) = RGB_RE.captures(trimmed) {
        let channel = |i: usize| caps[i].parse::<u8>().ok();
        return Some(Parsed::Rgb(Rgb::new(channel(1)?, channel(2)?, channel(3)?)));
    }

    if let Some(caps) = HSL_RE.captures(trimmed) {
        let component = |i: usize| caps[i].parse::<f64>().ok();
        return Some(Parsed::Hsl(Hsl::new(component(1)?, component(2)?, component(3)?)));
    }

    let lower = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .and_then(|(_, hex)| parse_hex(hex))
        .map(Parsed::Rgb)
}

/// Normalise a hex, `rgb()`, `hsl()` or named color to `#RRGGBB`. Unrecognised
/// or malformed input is returned unchanged.
pub fn parse_color_input(input: &str) -> String {
    match parse_any(input) {
        Some(Parsed::Rgb(rgb)) => rgb.to_hex(),
        Some(Parsed::Hsl(hsl)) => hsl.to_hex(),
        None => {
            tracing::debug!(input, "color input not recognised, passing through");
            input.to_string()
        }
    }
}

/// Typed counterpart of [`parse_color_input`]: `None` when the input is not
/// a recognised color.
pub fn parse_hsl(input: &str) -> Option<Hsl> {
    match parse_any(input)? {
        Parsed::Rgb(rgb) => Some(rgb.to_hsl()),
        Parsed::Hsl(hsl) => Some(hsl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms() {
        assert_eq!(parse_color_input("#ff0000"), "#FF0000");
        assert_eq!(parse_color_input("#F00"), "#FF0000");
        assert_eq!(parse_color_input("  #1a2B3c "), "#1A2B3C");
    }

    #[test]
    fn rgb_and_hsl_functions() {
        assert_eq!(parse_color_input("rgb(255, 165, 0)"), "#FFA500");
        assert_eq!(parse_color_input("RGB(0,0,0)"), "#000000");
        assert_eq!(parse_color_input("hsl(120, 100%, 50%)"), "#00FF00");
        assert_eq!(parse_color_input("hsl(0,0%,100%)"), "#FFFFFF");
    }

    #[test]
    fn named_colors() {
        assert_eq!(NAMED_COLORS.len(), 18);
        assert_eq!(parse_color_input("red"), "#FF0000");
        assert_eq!(parse_color_input("Navy"), "#000080");
        assert_eq!(parse_color_input("maroon"), "#800000");
    }

    #[test]
    fn malformed_input_passes_through() {
        for raw in ["#12", "#GGGGGG", "rgb(256, 0, 0)", "rgb(1,2)", "hsl(10, 50, 50)", "chartreuse", ""] {
            assert_eq!(parse_color_input(raw), raw);
        }
    }

    #[test]
    fn parse_hsl_keeps_hsl_precision() {
        let c = parse_hsl("hsl(210.5, 40%, 60%)").unwrap();
        assert_eq!(c.h, 210.5);
        assert_eq!(c.s, 40.0);
        assert!(parse_hsl("not a color").is_none());
        assert_eq!(parse_hsl("#FF0000").unwrap(), Hsl::new(0.0, 100.0, 50.0));
    }
}
