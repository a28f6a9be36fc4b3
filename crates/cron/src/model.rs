//! Cron data model: the five named fields, their metadata, and the preset catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Fields
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One of the five positions of a cron expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CronField {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl CronField {
    /// Fields in expression order.
    pub const ALL: [CronField; 5] = [
        CronField::Minute,
        CronField::Hour,
        CronField::DayOfMonth,
        CronField::Month,
        CronField::DayOfWeek,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CronField::Minute => "minute",
            CronField::Hour => "hour",
            CronField::DayOfMonth => "day-of-month",
            CronField::Month => "month",
            CronField::DayOfWeek => "day-of-week",
        }
    }

    /// Inclusive bounds. Day-of-week accepts both 0 and 7 for Sunday.
    pub fn range(self) -> (u32, u32) {
        match self {
            CronField::Minute => (0, 59),
            CronField::Hour => (0, 23),
            CronField::DayOfMonth => (1, 31),
            CronField::Month => (1, 12),
            CronField::DayOfWeek => (0, 7),
        }
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CronOptions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// The five sub-expressions of a cron expression, held verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronOptions {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl CronOptions {
    pub fn new(
        minute: impl Into<String>,
        hour: impl Into<String>,
        day_of_month: impl Into<String>,
        month: impl Into<String>,
        day_of_week: impl Into<String>,
    ) -> Self {
        Self {
            minute: minute.into(),
            hour: hour.into(),
            day_of_month: day_of_month.into(),
            month: month.into(),
            day_of_week: day_of_week.into(),
        }
    }

    /// Join the fields with single spaces. No validation or trimming.
    pub fn generate(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }

    /// Split on whitespace and map positionally. `None` unless exactly five tokens.
    pub fn parse(expression: &str) -> Option<Self> {
        let tokens: Vec<&str> = expression.split_whitespace().collect();
        match tokens.as_slice() {
            [minute, hour, dom, month, dow] => Some(Self::new(*minute, *hour, *dom, *month, *dow)),
            _ => None,
        }
    }

    pub fn get(&self, field: CronField) -> &str {
        match field {
            CronField::Minute => &self.minute,
            CronField::Hour => &self.hour,
            CronField::DayOfMonth => &self.day_of_month,
            CronField::Month => &self.month,
            CronField::DayOfWeek => &self.day_of_week,
        }
    }

    /// `(field, sub-expression)` pairs in expression order.
    pub fn fields(&self) -> [(CronField, &str); 5] {
        CronField::ALL.map(|f| (f, self.get(f)))
    }
}

/// Free-function form of [`CronOptions::generate`].
pub fn generate(options: &CronOptions) -> String {
    options.generate()
}

/// Free-function form of [`CronOptions::parse`].
pub fn parse(expression: &str) -> Option<CronOptions> {
    CronOptions::parse(expression)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Field metadata
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SpecialToken {
    pub token: &'static str,
    pub meaning: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldExample {
    pub expression: &'static str,
    pub meaning: &'static str,
}

/// Static descriptive metadata for one cron field.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FieldInfo {
    pub field: CronField,
    pub name: &'static str,
    pub min: u32,
    pub max: u32,
    pub special: &'static [SpecialToken],
    pub examples: &'static [FieldExample],
}

const COMMON_TOKENS: &[SpecialToken] = &[
    SpecialToken { token: "*", meaning: "any value" },
    SpecialToken { token: ",", meaning: "value list separator" },
    SpecialToken { token: "-", meaning: "range of values" },
    SpecialToken { token: "/", meaning: "step values" },
];

const DOW_TOKENS: &[SpecialToken] = &[
    SpecialToken { token: "*", meaning: "any value" },
    SpecialToken { token: ",", meaning: "value list separator" },
    SpecialToken { token: "-", meaning: "range of values" },
    SpecialToken { token: "/", meaning: "step values" },
    SpecialToken { token: "0/7", meaning: "Sunday (both values are accepted)" },
];

const FIELD_INFO: [FieldInfo; 5] = [
    FieldInfo {
        field: CronField::Minute,
        name: "Minute",
        min: 0,
        max: 59,
        special: COMMON_TOKENS,
        examples: &[
            FieldExample { expression: "0", meaning: "at minute 0" },
            FieldExample { expression: "*/15", meaning: "every 15 minutes" },
            FieldExample { expression: "0,30", meaning: "at minutes 0 and 30" },
        ],
    },
    FieldInfo {
        field: CronField::Hour,
        name: "Hour",
        min: 0,
        max: 23,
        special: COMMON_TOKENS,
        examples: &[
            FieldExample { expression: "9", meaning: "at 9 AM" },
            FieldExample { expression: "9-17", meaning: "every hour from 9 AM to 5 PM" },
            FieldExample { expression: "*/2", meaning: "every 2 hours" },
        ],
    },
    FieldInfo {
        field: CronField::DayOfMonth,
        name: "Day of Month",
        min: 1,
        max: 31,
        special: COMMON_TOKENS,
        examples: &[
            FieldExample { expression: "1", meaning: "on the 1st" },
            FieldExample { expression: "1,15", meaning: "on the 1st and 15th" },
            FieldExample { expression: "*/2", meaning: "every other day" },
        ],
    },
    FieldInfo {
        field: CronField::Month,
        name: "Month",
        min: 1,
        max: 12,
        special: COMMON_TOKENS,
        examples: &[
            FieldExample { expression: "1", meaning: "in January" },
            FieldExample { expression: "6-8", meaning: "June through August" },
            FieldExample { expression: "*/3", meaning: "every quarter" },
        ],
    },
    FieldInfo {
        field: CronField::DayOfWeek,
        name: "Day of Week",
        min: 0,
        max: 7,
        special: DOW_TOKENS,
        examples: &[
            FieldExample { expression: "1-5", meaning: "Monday through Friday" },
            FieldExample { expression: "0,6", meaning: "weekends" },
            FieldExample { expression: "1", meaning: "on Monday" },
        ],
    },
];

pub fn field_info() -> &'static [FieldInfo] {
    &FIELD_INFO
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Presets
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CronPresetCategory {
    Common,
    Development,
    Maintenance,
    Backup,
}

impl fmt::Display for CronPresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CronPresetCategory::Common => "common",
            CronPresetCategory::Development => "development",
            CronPresetCategory::Maintenance => "maintenance",
            CronPresetCategory::Backup => "backup",
        };
        f.write_str(s)
    }
}

impl FromStr for CronPresetCategory {
    type Err = dh_domain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(Self::Common),
            "development" => Ok(Self::Development),
            "maintenance" => Ok(Self::Maintenance),
            "backup" => Ok(Self::Backup),
            other => Err(dh_domain::Error::InvalidInput(format!(
                "unknown preset category '{other}' (expected common, development, maintenance or backup)"
            ))),
        }
    }
}

/// A named, categorised, pre-built cron expression.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct CronPreset {
    pub name: &'static str,
    pub expression: &'static str,
    pub description: &'static str,
    pub category: CronPresetCategory,
}

const fn preset(
    name: &'static str,
    expression: &'static str,
    description: &'static str,
    category: CronPresetCategory,
) -> CronPreset {
    CronPreset {
        name,
        expression,
        description,
        category,
    }
}

const PRESETS: &[CronPreset] = &[
    preset("Every minute", "* * * * *", "Runs once every minute", CronPresetCategory::Common),
    preset("Every 5 minutes", "*/5 * * * *", "Runs every five minutes", CronPresetCategory::Common),
    preset("Every hour", "0 * * * *", "Runs at the start of every hour", CronPresetCategory::Common),
    preset("Every day at midnight", "0 0 * * *", "Runs once a day at 00:00", CronPresetCategory::Common),
    preset("Every Monday", "0 0 * * 1", "Runs every Monday at 00:00", CronPresetCategory::Common),
    preset("First of the month", "0 0 1 * *", "Runs at 00:00 on the 1st of every month", CronPresetCategory::Common),
    preset("Weekdays at 9 AM", "0 9 * * 1-5", "Runs at 09:00 Monday through Friday", CronPresetCategory::Development),
    preset("Every 15 minutes", "*/15 * * * *", "Polling or health check cadence", CronPresetCategory::Development),
    preset("Nightly build", "0 2 * * *", "Runs at 02:00 every day", CronPresetCategory::Development),
    preset("Business hours", "0 9-17 * * 1-5", "Hourly from 09:00 to 17:00 on weekdays", CronPresetCategory::Development),
    preset("Log rotation", "0 0 * * 0", "Rotates logs every Sunday at midnight", CronPresetCategory::Maintenance),
    preset("Cache cleanup", "0 */6 * * *", "Clears caches every six hours", CronPresetCategory::Maintenance),
    preset("Quarterly cleanup", "0 3 1 */3 *", "Runs at 03:00 on the 1st of every third month", CronPresetCategory::Maintenance),
    preset("Daily backup", "0 3 * * *", "Backs up at 03:00 every day", CronPresetCategory::Backup),
    preset("Weekly backup", "0 4 * * 6", "Backs up every Saturday at 04:00", CronPresetCategory::Backup),
    preset("Monthly backup", "0 5 1 * *", "Backs up at 05:00 on the 1st of every month", CronPresetCategory::Backup),
];

pub fn presets() -> &'static [CronPreset] {
    PRESETS
}

pub fn presets_by_category(category: CronPresetCategory) -> impl Iterator<Item = &'static CronPreset> {
    PRESETS.iter().filter(move |p| p.category == category)
}
