//! Cron expression tooling: build, parse, validate, describe, and walk
//! 5-field cron expressions.
//!
//! Split into submodules:
//! - [`model`]: `CronOptions`, field metadata and the preset catalog
//! - [`validation`]: fail-fast field validation
//! - [`describe`]: English descriptions
//! - [`schedule`]: timezone-aware next-run walker

pub mod describe;
pub mod model;
pub mod schedule;
pub mod validation;

pub use describe::describe;
pub use model::{
    field_info, generate, parse, presets, presets_by_category, CronField, CronOptions, CronPreset,
    CronPresetCategory, FieldExample, FieldInfo, SpecialToken,
};
pub use schedule::{next_runs, parse_tz, CronSchedule, MAX_RUNS};
pub use validation::{check, validate, validate_timezone, CronValidation};
