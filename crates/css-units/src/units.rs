//! Supported CSS length units and their pixel ratios.

use std::fmt;
use std::str::FromStr;

use dh_domain::Error;
use serde::{Deserialize, Serialize};

use crate::settings::ConversionSettings;

// Absolute ratios, CSS reference approximations.
const PT_TO_PX: f64 = 1.333;
const PC_TO_PX: f64 = 16.0;
const IN_TO_PX: f64 = 96.0;
const CM_TO_PX: f64 = 37.8;
const MM_TO_PX: f64 = 3.78;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CssUnit {
    Px,
    Pt,
    Pc,
    In,
    Cm,
    Mm,
    Em,
    Rem,
    Percent,
    Vw,
    Vh,
    Vmin,
    Vmax,
}

impl CssUnit {
    pub const ALL: [CssUnit; 13] = [
        CssUnit::Px,
        CssUnit::Em,
        CssUnit::Rem,
        CssUnit::Percent,
        CssUnit::Vw,
        CssUnit::Vh,
        CssUnit::Vmin,
        CssUnit::Vmax,
        CssUnit::Pt,
        CssUnit::Pc,
        CssUnit::In,
        CssUnit::Cm,
        CssUnit::Mm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CssUnit::Px => "px",
            CssUnit::Pt => "pt",
            CssUnit::Pc => "pc",
            CssUnit::In => "in",
            CssUnit::Cm => "cm",
            CssUnit::Mm => "mm",
            CssUnit::Em => "em",
            CssUnit::Rem => "rem",
            CssUnit::Percent => "%",
            CssUnit::Vw => "vw",
            CssUnit::Vh => "vh",
            CssUnit::Vmin => "vmin",
            CssUnit::Vmax => "vmax",
        }
    }

    /// Whether the unit depends on the reference frame.
    pub fn is_relative(self) -> bool {
        !matches!(
            self,
            CssUnit::Px | CssUnit::Pt | CssUnit::Pc | CssUnit::In | CssUnit::Cm | CssUnit::Mm
        )
    }

    /// Pixels per one of this unit under `settings`.
    pub fn px_per_unit(self, settings: &ConversionSettings) -> f64 {
        match self {
            CssUnit::Px => 1.0,
            CssUnit::Pt => PT_TO_PX,
            CssUnit::Pc => PC_TO_PX,
            CssUnit::In => IN_TO_PX,
            CssUnit::Cm => CM_TO_PX,
            CssUnit::Mm => MM_TO_PX,
            CssUnit::Em => settings.parent_font_size,
            CssUnit::Rem => settings.root_font_size,
            CssUnit::Percent => settings.parent_font_size / 100.0,
            CssUnit::Vw => settings.viewport_width / 100.0,
            CssUnit::Vh => settings.viewport_height / 100.0,
            CssUnit::Vmin => settings.viewport_width.min(settings.viewport_height) / 100.0,
            CssUnit::Vmax => settings.viewport_width.max(settings.viewport_height) / 100.0,
        }
    }

    pub fn to_px(self, value: f64, settings: &ConversionSettings) -> f64 {
        match self {
            CssUnit::Px => value,
            CssUnit::Percent => value * settings.parent_font_size / 100.0,
            CssUnit::Vw => value * settings.viewport_width / 100.0,
            CssUnit::Vh => value * settings.viewport_height / 100.0,
            CssUnit::Vmin => value * settings.viewport_width.min(settings.viewport_height) / 100.0,
            CssUnit::Vmax => value * settings.viewport_width.max(settings.viewport_height) / 100.0,
            _ => value * self.px_per_unit(settings),
        }
    }

    pub fn from_px(self, px: f64, settings: &ConversionSettings) -> f64 {
        match self {
            CssUnit::Px => px,
            CssUnit::Percent => px * 100.0 / settings.parent_font_size,
            CssUnit::Vw => px * 100.0 / settings.viewport_width,
            CssUnit::Vh => px * 100.0 / settings.viewport_height,
            CssUnit::Vmin => px * 100.0 / settings.viewport_width.min(settings.viewport_height),
            CssUnit::Vmax => px * 100.0 / settings.viewport_width.max(settings.viewport_height),
            _ => px / self.px_per_unit(settings),
        }
    }
}

impl fmt::Display for CssUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CssUnit::ALL
            .into_iter()
            .find(|u| u.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnsupportedUnit(s.to_string()))
    }
}

impl TryFrom<String> for CssUnit {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CssUnit> for String {
    fn from(u: CssUnit) -> Self {
        u.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> ConversionSettings {
        ConversionSettings {
            base_font_size: 16.0,
            root_font_size: 16.0,
            parent_font_size: 20.0,
            viewport_width: 1000.0,
            viewport_height: 500.0,
        }
    }

    #[test]
    fn absolute_ratios_are_fixed() {
        let s = frame();
        assert_eq!(CssUnit::Pt.to_px(3.0, &s), 3.0 * 1.333);
        assert_eq!(CssUnit::Pc.to_px(1.0, &s), 16.0);
        assert_eq!(CssUnit::In.to_px(1.0, &s), 96.0);
        assert_eq!(CssUnit::Cm.to_px(1.0, &s), 37.8);
        assert!((CssUnit::Mm.to_px(10.0, &s) - 37.8).abs() < 1e-9);
    }

    #[test]
    fn relative_units_use_frame() {
        let s = frame();
        assert_eq!(CssUnit::Em.to_px(2.0, &s), 40.0);
        assert_eq!(CssUnit::Rem.to_px(2.0, &s), 32.0);
        assert_eq!(CssUnit::Percent.to_px(50.0, &s), 10.0);
        assert_eq!(CssUnit::Vw.to_px(10.0, &s), 100.0);
        assert_eq!(CssUnit::Vh.to_px(10.0, &s), 50.0);
        assert_eq!(CssUnit::Vmin.to_px(10.0, &s), 50.0);
        assert_eq!(CssUnit::Vmax.to_px(10.0, &s), 100.0);
    }

    #[test]
    fn from_px_inverts() {
        let s = frame();
        assert_eq!(CssUnit::Rem.from_px(32.0, &s), 2.0);
        assert_eq!(CssUnit::Percent.from_px(10.0, &s), 50.0);
        assert_eq!(CssUnit::Vmax.from_px(100.0, &s), 10.0);
    }

    #[test]
    fn parse_units() {
        assert_eq!("px".parse::<CssUnit>().unwrap(), CssUnit::Px);
        assert_eq!("REM".parse::<CssUnit>().unwrap(), CssUnit::Rem);
        assert_eq!("%".parse::<CssUnit>().unwrap(), CssUnit::Percent);
        assert!(matches!("ex".parse::<CssUnit>(), Err(Error::UnsupportedUnit(u)) if u == "ex"));
    }

    #[test]
    fn relative_flag() {
        assert!(!CssUnit::Cm.is_relative());
        assert!(CssUnit::Vmin.is_relative());
    }
}
