//! HSL and RGB value types and the conversions between them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A color in HSL space: hue in `[0, 360)`, saturation and lightness in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Build a normalised color: hue wraps into `[0, 360)`, saturation and
    /// lightness are clamped. Non-finite components become 0.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Same saturation and lightness, hue rotated by `degrees`.
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Same hue and saturation, lightness shifted by `delta` and clamped.
    pub fn lighten(self, delta: f64) -> Self {
        Self::new(self.h, self.s, self.l + delta)
    }

    pub fn to_rgb(self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.h / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgb {
            r: to_channel(r + m),
            g: to_channel(g + m),
            b: to_channel(b + m),
        }
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
