//! Unit-to-unit conversion through a pixel intermediate, and result formatting.

use dh_domain::{Error, Result};
use serde::Serialize;

use crate::settings::ConversionSettings;
use crate::units::CssUnit;

/// Convert `value` in `unit` to pixels.
pub fn convert_to_px(value: f64, unit: &str, settings: &ConversionSettings) -> Result<f64> {
    settings.validate()?;
    let unit: CssUnit = unit.parse()?;
    finite(unit.to_px(value, settings))
}

/// Convert a pixel magnitude to `unit`. Exact inverse of [`convert_to_px`].
pub fn convert_from_px(px: f64, unit: &str, settings: &ConversionSettings) -> Result<f64> {
    settings.validate()?;
    let unit: CssUnit = unit.parse()?;
    finite(unit.from_px(px, settings))
}

/// Typed conversion. Rejects non-finite input or output and invalid
/// reference frames.
pub fn convert_value(
    value: f64,
    from: CssUnit,
    to: CssUnit,
    settings: &ConversionSettings,
) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidInput(format!("'{value}' is not a finite number")));
    }
    settings.validate()?;
    finite(to.from_px(from.to_px(value, settings), settings))
}

fn finite(result: f64) -> Result<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(Error::InvalidInput(format!("result '{result}' is out of range")))
    }
}

/// Parse a user-supplied magnitude.
pub fn parse_value(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidInput(format!("'{trimmed}' is not a number"))),
    }
}

/// String-level conversion: parse `value`, convert, and render the plain
/// number (`16` px in `rem` at root 16 renders as `"1"`).
pub fn convert(value: &str, from: &str, to: &str, settings: &ConversionSettings) -> Result<String> {
    let value = parse_value(value)?;
    let from: CssUnit = from.parse()?;
    let to: CssUnit = to.parse()?;
    let result = convert_value(value, from, to, settings)?;
    Ok(result.to_string())
}

/// One row of a conversion table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub unit: CssUnit,
    pub value: f64,
    pub formatted: String,
}

/// Convert `value` in `from` to every supported unit, in [`CssUnit::ALL`] order.
pub fn convert_all(value: f64, from: CssUnit, settings: &ConversionSettings) -> Result<Vec<Conversion>> {
    CssUnit::ALL
        .into_iter()
        .map(|unit| {
            let v = convert_value(value, from, unit, settings)?;
            Ok(Conversion {
                unit,
                value: v,
                formatted: format_result(v),
            })
        })
        .collect()
}

/// Precision tiering for display:
/// `|v| < 0.01` → exponential with 2 digits, `>= 1000` → 0 decimals,
/// `>= 100` → 1, `>= 10` → 2, otherwise 3.
pub fn format_result(value: f64) -> String {
    let abs = value.abs();
    if abs < 0.01 {
        to_exponential(value, 2)
    } else if abs >= 1000.0 {
        to_fixed(value, 0)
    } else if abs >= 100.0 {
        to_fixed(value, 1)
    } else if abs >= 10.0 {
        to_fixed(value, 2)
    } else {
        to_fixed(value, 3)
    }
}

/// Fixed-point rendering with ties rounded away from zero.
///
/// Only values whose binary representation is exactly halfway between two
/// outputs count as ties; everything else rounds to nearest.
pub(crate) fn to_fixed(value: f64, digits: usize) -> String {
    let abs = value.abs();
    let rounded = if is_exact_tie(abs, digits) {
        let scale = 10f64.powi(digits as i32);
        ((abs * scale).trunc() + 1.0) / scale
    } else {
        abs
    };
    let s = format!("{rounded:.digits$}");
    if value < 0.0 {
        format!("-{s}")
    } else {
        s
    }
}

// An f64 has at most 1074 fractional binary digits, so this many decimals
// is its exact expansion.
const EXACT_DECIMALS: usize = 1100;

fn is_exact_tie(abs: f64, digits: usize) -> bool {
    let exact = format!("{:.*}", EXACT_DECIMALS, abs);
    let Some((_, frac)) = exact.split_once('.') else {
        return false;
    };
    match frac.get(digits..).and_then(|tail| tail.strip_prefix('5')) {
        Some(rest) => rest.bytes().all(|b| b == b'0'),
        None => false,
    }
}

/// Exponential rendering with an explicitly signed exponent (`1.00e-3`, `1.50e+0`).
fn to_exponential(value: f64, digits: usize) -> String {
    let s = format!("{value:.digits$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}
