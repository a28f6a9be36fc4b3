//! English descriptions of cron expressions.
//!
//! Common shapes are matched in priority order; anything else falls back to a
//! verbatim field-by-field listing. Callers are expected to validate first.

use crate::model::{CronField, CronOptions};
use crate::validation::expand_field;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Describe `expression` in English.
pub fn describe(expression: &str) -> String {
    let Some(opts) = CronOptions::parse(expression) else {
        return expression.trim().to_string();
    };

    if opts.fields().iter().all(|(_, v)| is_any(v)) {
        return "every minute".to_string();
    }

    if let (Some(minute), Some(hour)) = (literal(&opts.minute), literal(&opts.hour)) {
        let time = format!("{hour:02}:{minute:02}");
        let dom = &opts.day_of_month;
        let month = &opts.month;
        let dow = &opts.day_of_week;

        if is_any(dom) && is_any(month) && is_any(dow) {
            return format!("at {time} every day");
        }
        if is_any(dom) && is_any(month) {
            return format!("at {time} on {}", weekday_names(dow));
        }
        if !dom.contains('/') && is_any(month) && is_any(dow) {
            return format!("at {time} on day {dom} of every month");
        }
    }

    if let Some(s) = describe_step(&opts) {
        return s;
    }

    fallback(&opts)
}

fn is_any(v: &str) -> bool {
    v == "*"
}

fn literal(v: &str) -> Option<u32> {
    if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    v.parse().ok()
}

fn weekday(n: u32) -> &'static str {
    WEEKDAYS[(n % 7) as usize]
}

/// Render a day-of-week sub-expression: `1-5` reads "Monday through Friday",
/// lists and steps are spelled out day by day.
fn weekday_names(dow: &str) -> String {
    let mut parts = Vec::new();
    for token in dow.split(',') {
        if let Some(n) = literal(token) {
            parts.push(weekday(n).to_string());
            continue;
        }
        if let Some((a, b)) = token.split_once('-') {
            if let (Some(a), Some(b)) = (literal(a), literal(b)) {
                parts.push(format!("{} through {}", weekday(a), weekday(b)));
                continue;
            }
        }
        match expand_field(CronField::DayOfWeek, token) {
            Ok(values) => {
                let mut names: Vec<&str> = Vec::new();
                for v in values {
                    let name = weekday(v);
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
                parts.push(names.join(", "));
            }
            Err(_) => parts.push(token.to_string()),
        }
    }
    parts.join(", ")
}

/// `*/n` in one field, literals before it, `*` after it.
fn describe_step(opts: &CronOptions) -> Option<String> {
    let fields = opts.fields();
    let (idx, n) = fields.iter().enumerate().find_map(|(i, (_, v))| {
        v.strip_prefix("*/")
            .and_then(literal)
            .map(|n| (i, n))
    })?;

    let unit = match fields[idx].0 {
        CronField::Minute => "minute",
        CronField::Hour => "hour",
        CronField::DayOfMonth => "day",
        CronField::Month => "month",
        CronField::DayOfWeek => return None,
    };
    if !fields[..idx].iter().all(|(_, v)| literal(v).is_some()) {
        return None;
    }
    if !fields[idx + 1..].iter().all(|(_, v)| is_any(v)) {
        return None;
    }

    let mut out = if n == 1 {
        format!("every {unit}")
    } else {
        format!("every {n} {unit}s")
    };

    match idx {
        1 => {
            if let Some(minute) = literal(&opts.minute).filter(|m| *m != 0) {
                out.push_str(&format!(" at minute {minute}"));
            }
        }
        2 | 3 => {
            if let (Some(minute), Some(hour)) = (literal(&opts.minute), literal(&opts.hour)) {
                out.push_str(&format!(" at {hour:02}:{minute:02}"));
            }
            if idx == 3 {
                if let Some(day) = literal(&opts.day_of_month) {
                    out.push_str(&format!(" on day {day}"));
                }
            }
        }
        _ => {}
    }
    Some(out)
}

fn fallback(opts: &CronOptions) -> String {
    format!(
        "minute: {}, hour: {}, day of month: {}, month: {}, day of week: {}",
        opts.minute, opts.hour, opts.day_of_month, opts.month, opts.day_of_week
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_wildcards() {
        assert_eq!(describe("* * * * *"), "every minute");
    }

    #[test]
    fn daily_at_time() {
        assert_eq!(describe("30 14 * * *"), "at 14:30 every day");
        assert_eq!(describe("0 0 * * *"), "at 00:00 every day");
    }

    #[test]
    fn weekday_range() {
        let s = describe("0 9 * * 1-5");
        assert_eq!(s, "at 09:00 on Monday through Friday");
        assert!(s.contains("9:00"));
    }

    #[test]
    fn weekday_list_and_sunday_aliases() {
        assert_eq!(describe("15 8 * * 1,3,5"), "at 08:15 on Monday, Wednesday, Friday");
        assert_eq!(describe("0 0 * * 7"), "at 00:00 on Sunday");
        assert_eq!(describe("0 0 * * 0"), "at 00:00 on Sunday");
    }

    #[test]
    fn weekday_step_is_spelled_out() {
        assert_eq!(describe("0 6 * * */3"), "at 06:00 on Sunday, Wednesday, Saturday");
    }

    #[test]
    fn day_of_month() {
        assert_eq!(describe("0 5 1 * *"), "at 05:00 on day 1 of every month");
        assert_eq!(describe("0 5 1,15 * *"), "at 05:00 on day 1,15 of every month");
    }

    #[test]
    fn step_patterns() {
        assert_eq!(describe("*/5 * * * *"), "every 5 minutes");
        assert_eq!(describe("*/1 * * * *"), "every minute");
        assert_eq!(describe("0 */2 * * *"), "every 2 hours");
        assert_eq!(describe("30 */6 * * *"), "every 6 hours at minute 30");
        assert_eq!(describe("0 9 */2 * *"), "every 2 days at 09:00");
        assert_eq!(describe("0 3 1 */3 *"), "every 3 months at 03:00 on day 1");
    }

    #[test]
    fn fallback_lists_fields() {
        assert_eq!(
            describe("*/5 9-17 * * 1-5"),
            "minute: */5, hour: 9-17, day of month: *, month: *, day of week: 1-5"
        );
        assert_eq!(
            describe("* 9 * * *"),
            "minute: *, hour: 9, day of month: *, month: *, day of week: *"
        );
    }

    #[test]
    fn wrong_token_count_echoes_input() {
        assert_eq!(describe(" 0 9 * "), "0 9 *");
    }
}
