//! Batch conversion of newline-separated `<number><unit>` lines.

use std::sync::LazyLock;

use dh_domain::Result;
use regex::Regex;

use crate::convert::to_fixed;
use crate::settings::ConversionSettings;
use crate::units::CssUnit;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(\.\d+)?)\s*([a-zA-Z%]+)$").expect("batch line pattern is valid")
});

pub const INVALID_UNIT: &str = "Invalid unit";
pub const INVALID_FORMAT: &str = "Invalid format";

const BATCH_DECIMALS: usize = 3;

/// Convert every non-blank line of `input` to `to_unit`.
///
/// Each result is rendered with three decimals. Lines are independent: a bad line yields `"<line> = Invalid unit"` or
/// `"<line> = Invalid format"` and does not affect its neighbours. Only an
/// unsupported target unit or an invalid reference frame fails the whole batch.
pub fn batch_convert(input: &str, to_unit: &str, settings: &ConversionSettings) -> Result<Vec<String>> {
    let to: CssUnit = to_unit.parse()?;
    settings.validate()?;

    let results = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| convert_line(line, to, settings))
        .collect();
    Ok(results)
}

fn convert_line(line: &str, to: CssUnit, settings: &ConversionSettings) -> String {
    let Some(caps) = LINE_RE.captures(line) else {
        tracing::debug!(line, "batch line rejected: format");
        return format!("{line} = {INVALID_FORMAT}");
    };

    // Plain decimals always parse, but very long ones overflow to infinity.
    let value = match caps[1].parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            tracing::debug!(line, "batch line rejected: magnitude");
            return format!("{line} = {INVALID_FORMAT}");
        }
    };
    let Ok(from) = caps[3].parse::<CssUnit>() else {
        tracing::debug!(line, unit = &caps[3], "batch line rejected: unit");
        return format!("{line} = {INVALID_UNIT}");
    };

    let converted = to.from_px(from.to_px(value, settings), settings);
    if !converted.is_finite() {
        tracing::debug!(line, "batch line rejected: result out of range");
        return format!("{line} = {INVALID_FORMAT}");
    }
    format!("{line} = {}{to}", to_fixed(converted, BATCH_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_batch_to_px() {
        let out = batch_convert("16px\n2rem", "px", &ConversionSettings::default()).unwrap();
        assert_eq!(out, vec!["16px = 16.000px", "2rem = 32.000px"]);
    }

    #[test]
    fn bad_lines_are_marked_individually() {
        let out = batch_convert("12qq\nhello\n1.5 em\n\n", "px", &ConversionSettings::default()).unwrap();
        assert_eq!(
            out,
            vec![
                "12qq = Invalid unit",
                "hello = Invalid format",
                "1.5 em = 24.000px",
            ]
        );
    }

    #[test]
    fn negative_and_bare_numbers_are_format_errors() {
        let out = batch_convert("-4px\n42", "rem", &ConversionSettings::default()).unwrap();
        assert_eq!(out, vec!["-4px = Invalid format", "42 = Invalid format"]);
    }

    #[test]
    fn unsupported_target_fails_batch() {
        assert!(batch_convert("16px", "furlong", &ConversionSettings::default()).is_err());
    }

    #[test]
    fn percent_lines() {
        let out = batch_convert("50%\n1000px", "px", &ConversionSettings::default()).unwrap();
        assert_eq!(out, vec!["50% = 8.000px", "1000px = 1000.000px"]);
    }

    #[test]
    fn converts_into_relative_target() {
        let out = batch_convert("24px\n8px", "rem", &ConversionSettings::default()).unwrap();
        assert_eq!(out, vec!["24px = 1.500rem", "8px = 0.500rem"]);
    }

    #[test]
    fn overflowing_lines_are_format_errors() {
        let huge = format!("{}px", "9".repeat(400));
        let big_cm = format!("{}cm", "9".repeat(308));
        let input = format!("{huge}\n{big_cm}\n16px");
        let out = batch_convert(&input, "rem", &ConversionSettings::default()).unwrap();
        assert_eq!(
            out,
            vec![
                format!("{huge} = Invalid format"),
                format!("{big_cm} = Invalid format"),
                "16px = 1.000rem".to_string(),
            ]
        );
    }
}
