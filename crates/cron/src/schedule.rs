//! Timezone-aware next-run walker (5-field: min hour dom month dow).
//!
//! A best-effort forward scanner: each candidate minute is tested for
//! membership in every field. Day-of-month and day-of-week are both required
//! to match.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use dh_domain::Result;

use crate::model::CronField;
use crate::validation::expand_field;

/// How far ahead the walker looks before giving up.
const MAX_CHECKS: usize = 366 * 24 * 60; // one year of minutes

/// Upper bound on how many occurrences one call will compute.
pub const MAX_RUNS: usize = 1000;

/// Parse a timezone string into a `chrono_tz::Tz`, falling back to UTC.
pub fn parse_tz(tz: &str) -> chrono_tz::Tz {
    tz.parse::<chrono_tz::Tz>().unwrap_or(chrono_tz::UTC)
}

/// A validated cron expression expanded into per-field value sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CronSchedule {
    minutes: Vec<u32>,
    hours: Vec<u32>,
    days_of_month: Vec<u32>,
    months: Vec<u32>,
    days_of_week: Vec<u32>,
}

impl CronSchedule {
    /// Validate and expand `expression`. Fails with the same error as
    /// [`crate::validate`].
    pub fn parse(expression: &str) -> Result<Self> {
        crate::validation::validate(expression)?;
        let fields: Vec<&str> = expression.split_whitespace().collect();

        let mut days_of_week = expand_field(CronField::DayOfWeek, fields[4])?;
        // 7 is an alias for Sunday.
        for d in days_of_week.iter_mut() {
            if *d == 7 {
                *d = 0;
            }
        }
        days_of_week.sort_unstable();
        days_of_week.dedup();

        Ok(Self {
            minutes: expand_field(CronField::Minute, fields[0])?,
            hours: expand_field(CronField::Hour, fields[1])?,
            days_of_month: expand_field(CronField::DayOfMonth, fields[2])?,
            months: expand_field(CronField::Month, fields[3])?,
            days_of_week,
        })
    }

    /// The values selected for `field`, sorted. Day-of-week uses 0 for Sunday.
    pub fn values(&self, field: CronField) -> &[u32] {
        match field {
            CronField::Minute => &self.minutes,
            CronField::Hour => &self.hours,
            CronField::DayOfMonth => &self.days_of_month,
            CronField::Month => &self.months,
            CronField::DayOfWeek => &self.days_of_week,
        }
    }

    /// Check if a **local** naive datetime matches.
    pub fn matches_naive(&self, dt: &NaiveDateTime) -> bool {
        self.minutes.binary_search(&dt.minute()).is_ok()
            && self.hours.binary_search(&dt.hour()).is_ok()
            && self.days_of_month.binary_search(&dt.day()).is_ok()
            && self.months.binary_search(&dt.month()).is_ok()
            && self
                .days_of_week
                .binary_search(&dt.weekday().num_days_from_sunday())
                .is_ok()
    }

    /// Check if a UTC datetime matches (UTC shorthand).
    pub fn matches(&self, dt: &DateTime<Utc>) -> bool {
        self.matches_naive(&dt.naive_utc())
    }

    /// Next occurrence strictly after `after`, evaluated in `tz`.
    ///
    /// **DST handling:**
    /// - Spring-forward gaps: local times that don't exist are skipped.
    /// - Fall-back overlaps: the earliest (pre-transition) mapping is chosen.
    pub fn next_after_tz(&self, after: &DateTime<Utc>, tz: chrono_tz::Tz) -> Option<DateTime<Utc>> {
        use chrono::TimeZone;

        // Convert `after` to local time and advance to the next whole minute.
        let local_after = after.with_timezone(&tz).naive_local();
        let next_min_secs = 60 - (local_after.second() as i64);
        let mut candidate = local_after + chrono::Duration::seconds(next_min_secs);
        candidate = candidate.with_second(0).unwrap_or(candidate);
        candidate = candidate.with_nanosecond(0).unwrap_or(candidate);

        for _ in 0..MAX_CHECKS {
            if self.matches_naive(&candidate) {
                match tz.from_local_datetime(&candidate) {
                    chrono::LocalResult::Single(dt) => return Some(dt.with_timezone(&Utc)),
                    chrono::LocalResult::Ambiguous(earliest, _) => {
                        return Some(earliest.with_timezone(&Utc));
                    }
                    chrono::LocalResult::None => {
                        // DST gap: this local minute doesn't exist.
                    }
                }
            }
            candidate += chrono::Duration::minutes(1);
        }
        None
    }

    /// Up to `n` occurrences after `after`, timezone-aware. `n` is capped at
    /// [`MAX_RUNS`]. Stops early when the walker finds nothing within a year.
    pub fn next_n_tz(&self, after: &DateTime<Utc>, n: usize, tz: chrono_tz::Tz) -> Vec<DateTime<Utc>> {
        if n > MAX_RUNS {
            tracing::warn!(requested = n, max = MAX_RUNS, "next-run count capped");
        }
        let n = n.min(MAX_RUNS);
        let mut results = Vec::with_capacity(n);
        let mut cursor = *after;
        for _ in 0..n {
            match self.next_after_tz(&cursor, tz) {
                Some(next) => {
                    results.push(next);
                    cursor = next;
                }
                None => {
                    tracing::warn!(found = results.len(), wanted = n, "no further cron occurrence within a year");
                    break;
                }
            }
        }
        results
    }
}

/// Validate `expression` and compute up to `count` next run times after `after`.
pub fn next_runs(
    expression: &str,
    after: &DateTime<Utc>,
    count: usize,
    tz: chrono_tz::Tz,
) -> Result<Vec<DateTime<Utc>>> {
    let schedule = CronSchedule::parse(expression)?;
    Ok(schedule.next_n_tz(after, count, tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sched(expr: &str) -> CronSchedule {
        CronSchedule::parse(expr).unwrap()
    }

    #[test]
    fn cron_every_5_minutes() {
        let s = sched("*/5 * * * *");
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        assert!(s.matches(&dt));
        let dt2 = Utc.with_ymd_and_hms(2024, 6, 15, 10, 3, 0).unwrap();
        assert!(!s.matches(&dt2));
    }

    #[test]
    fn cron_range() {
        let s = sched("0 9-17 * * *");
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        assert!(s.matches(&dt));
        let dt2 = Utc.with_ymd_and_hms(2024, 6, 15, 20, 0, 0).unwrap();
        assert!(!s.matches(&dt2));
    }

    #[test]
    fn sunday_as_seven() {
        // 2024-06-16 is a Sunday.
        let dt = Utc.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap();
        assert!(sched("0 0 * * 7").matches(&dt));
        assert!(sched("0 0 * * 0").matches(&dt));
        assert_eq!(sched("0 0 * * 0,7").values(CronField::DayOfWeek), &[0]);
    }

    #[test]
    fn parse_rejects_invalid() {
        assert!(CronSchedule::parse("60 * * * *").is_err());
        assert!(CronSchedule::parse("* * *").is_err());
    }

    #[test]
    fn next_is_strictly_after() {
        let after = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let next = sched("30 * * * *").next_after_tz(&after, chrono_tz::UTC).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2024, 6, 15, 11, 30, 0).unwrap());
    }

    #[test]
    fn next_runs_weekdays() {
        // 2024-06-15 is a Saturday; next weekday 09:00 runs are Mon..Fri.
        let after = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let runs = next_runs("0 9 * * 1-5", &after, 5, chrono_tz::UTC).unwrap();
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], Utc.with_ymd_and_hms(2024, 6, 17, 9, 0, 0).unwrap());
        assert_eq!(runs[4], Utc.with_ymd_and_hms(2024, 6, 21, 9, 0, 0).unwrap());
    }

    #[test]
    fn next_runs_propagates_validation_error() {
        let after = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let err = next_runs("0 24 * * *", &after, 3, chrono_tz::UTC).unwrap_err();
        assert_eq!(err.field(), Some("hour"));
    }

    #[test]
    fn impossible_date_yields_nothing() {
        let after = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let runs = next_runs("0 0 31 2 *", &after, 3, chrono_tz::UTC).unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn huge_count_is_capped() {
        let after = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let none = next_runs("0 0 31 2 *", &after, usize::MAX, chrono_tz::UTC).unwrap();
        assert!(none.is_empty());

        let runs = next_runs("* * * * *", &after, usize::MAX, chrono_tz::UTC).unwrap();
        assert_eq!(runs.len(), MAX_RUNS);
        assert_eq!(runs[0], Utc.with_ymd_and_hms(2024, 6, 15, 12, 1, 0).unwrap());
    }

    // ── Timezone-aware ────────────────────────────────────────────────

    #[test]
    fn next_tz_basic() {
        let after = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let next = sched("0 9 * * *").next_after_tz(&after, parse_tz("US/Eastern")).unwrap();
        assert_eq!(next.hour(), 13); // 9 ET = 13 UTC (EDT is UTC-4)
        assert_eq!(next.minute(), 0);
    }

    #[test]
    fn next_tz_spring_forward() {
        let after = Utc.with_ymd_and_hms(2024, 3, 10, 6, 0, 0).unwrap();
        let next = sched("30 2 * * *").next_after_tz(&after, parse_tz("US/Eastern")).unwrap();
        assert_eq!(next.day(), 11);
        assert_eq!(next.hour(), 6);
        assert_eq!(next.minute(), 30);
    }

    #[test]
    fn next_tz_fall_back() {
        let after = Utc.with_ymd_and_hms(2024, 11, 3, 4, 0, 0).unwrap();
        let next = sched("30 1 * * *").next_after_tz(&after, parse_tz("US/Eastern")).unwrap();
        assert_eq!(next.hour(), 5);
        assert_eq!(next.minute(), 30);
    }

    #[test]
    fn next_n_tz_produces_correct_utc_times() {
        let after = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let results = sched("0 9 * * *").next_n_tz(&after, 3, parse_tz("Asia/Tokyo"));
        assert_eq!(results.len(), 3);
        for r in &results {
            assert_eq!(r.hour(), 0); // 9 JST = 0 UTC
            assert_eq!(r.minute(), 0);
        }
    }

    #[test]
    fn parse_tz_invalid_returns_utc() {
        assert_eq!(parse_tz("Not/Real"), chrono_tz::UTC);
        assert_eq!(parse_tz(""), chrono_tz::UTC);
        assert_eq!(parse_tz("Europe/London"), chrono_tz::Europe::London);
    }
}
