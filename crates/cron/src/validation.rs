//! Field-by-field validation of 5-field cron expressions.
//!
//! Validation is fail-fast: the first offending field/value is reported and
//! the remaining fields are not inspected.

use dh_domain::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::model::CronField;

/// `{isValid, error}` view of a validation outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronValidation {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&Result<()>> for CronValidation {
    fn from(result: &Result<()>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                error: None,
            },
            Err(e) => Self {
                is_valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Validate a 5-field cron expression.
///
/// Returns [`Error::Format`] for a wrong field count or an unparsable
/// sub-token, and [`Error::Range`] (carrying the field name) for an
/// out-of-range literal, an inverted range, or a non-positive step.
pub fn validate(expression: &str) -> Result<()> {
    let fields: Vec<&str> = expression.split_whitespace().collect();
    if fields.len() != 5 {
        let err = Error::Format(format!(
            "expression must have exactly 5 fields (minute hour day-of-month month day-of-week), got {}",
            fields.len()
        ));
        tracing::debug!(expression, error = %err, "cron validation failed");
        return Err(err);
    }

    for (field, value) in CronField::ALL.into_iter().zip(fields) {
        if let Err(err) = expand_field(field, value) {
            tracing::debug!(expression, field = field.name(), error = %err, "cron validation failed");
            return Err(err);
        }
    }
    Ok(())
}

/// [`validate`] folded into the `{isValid, error}` record.
pub fn check(expression: &str) -> CronValidation {
    CronValidation::from(&validate(expression))
}

/// Validate one field's sub-expression and expand it into the sorted,
/// de-duplicated set of values it selects (raw, so day-of-week may hold 7).
pub(crate) fn expand_field(field: CronField, expr: &str) -> Result<Vec<u32>> {
    let (min, max) = field.range();
    let name = field.name();
    let mut values = Vec::new();

    for part in expr.split(',') {
        let (base, step) = match part.split_once('/') {
            Some((base, step_s)) => (base, Some(parse_step(name, part, step_s)?)),
            None => (part, None),
        };

        let (start, end) = if base == "*" {
            (min, max)
        } else if let Some((start_s, end_s)) = base.split_once('-') {
            let start = parse_value(name, part, start_s)?;
            let end = parse_value(name, part, end_s)?;
            check_bounds(name, start, min, max)?;
            check_bounds(name, end, min, max)?;
            if start > end {
                return Err(Error::range(
                    name,
                    format!("range start {start} > end {end}"),
                ));
            }
            (start, end)
        } else {
            // `N/step` is not part of the grammar.
            if step.is_some() {
                return Err(invalid_token(name, part));
            }
            let n = parse_value(name, part, base)?;
            check_bounds(name, n, min, max)?;
            (n, n)
        };

        let step = step.unwrap_or(1);
        values.extend((start..=end).step_by(step as usize));
    }

    values.sort_unstable();
    values.dedup();
    Ok(values)
}

fn invalid_token(name: &str, token: &str) -> Error {
    Error::Format(format!("{name}: invalid token '{token}'"))
}

fn parse_value(name: &str, token: &str, s: &str) -> Result<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_token(name, token));
    }
    // All digits: the only failure left is overflow, which is out of any range.
    s.parse::<u32>()
        .map_err(|_| Error::range(name, format!("value {s} out of range")))
}

fn parse_step(name: &str, token: &str, s: &str) -> Result<u32> {
    // Digits with an optional leading '-', so negative steps reach the range check.
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_token(name, token));
    }
    let step: i64 = s
        .parse()
        .map_err(|_| Error::range(name, format!("step {s} out of range")))?;
    if step <= 0 {
        return Err(Error::range(
            name,
            format!("step {step} must be greater than 0"),
        ));
    }
    u32::try_from(step).map_err(|_| Error::range(name, format!("step {step} out of range")))
}

fn check_bounds(name: &str, n: u32, min: u32, max: u32) -> Result<()> {
    if n < min || n > max {
        return Err(Error::range(
            name,
            format!("value {n} out of range {min}..={max}"),
        ));
    }
    Ok(())
}

/// Validate an IANA timezone string.
pub fn validate_timezone(tz: &str) -> Result<()> {
    if tz.parse::<chrono_tz::Tz>().is_err() {
        Err(Error::InvalidInput(format!(
            "invalid timezone: '{}', use IANA names like 'America/New_York' or 'UTC'",
            tz
        )))
    } else {
        Ok(())
    }
}
