use std::fmt;
use std::path::Path;

use anyhow::Context;
use dh_color::HarmonyType;
use dh_css_units::{ConversionPreset, ConversionSettings, PresetCatalog};
use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub css: CssConfig,
    #[serde(default)]
    pub cron: CronConfig,
    #[serde(default)]
    pub color: ColorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CSS units
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CssConfig {
    /// Default reference frame for conversions.
    #[serde(flatten)]
    pub settings: ConversionSettings,
    /// Extra presets appended after the built-in device presets.
    #[serde(default)]
    pub presets: Vec<ConversionPreset>,
}

impl CssConfig {
    /// Built-in presets followed by the configured ones. Invalid entries are
    /// skipped with a warning; `devhub config validate` reports them.
    pub fn catalog(&self) -> PresetCatalog {
        let mut catalog = PresetCatalog::with_builtins();
        for preset in &self.presets {
            if let Err(e) = catalog.add(preset.clone()) {
                tracing::warn!(name = %preset.name, error = %e, "skipping invalid css preset");
            }
        }
        catalog
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Cron
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CronConfig {
    /// IANA timezone used for next-run times.
    #[serde(default = "d_utc")]
    pub timezone: String,
    /// How many upcoming runs `cron next` prints by default.
    #[serde(default = "d_5")]
    pub next_runs: usize,
}

impl Default for CronConfig {
    fn default() -> Self {
        Self {
            timezone: d_utc(),
            next_runs: 5,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Color
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "d_harmony")]
    pub default_harmony: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            default_harmony: d_harmony(),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Logging
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "d_warn")]
    pub level: String,
    /// Emit JSON lines instead of compact text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: d_warn(),
            json: false,
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_utc() -> String {
    "UTC".into()
}

fn d_5() -> usize {
    5
}

fn d_harmony() -> String {
    "complementary".into()
}

fn d_warn() -> String {
    "warn".into()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return every issue found.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let error = |field: String, message: String| ConfigIssue {
            severity: ConfigSeverity::Error,
            field,
            message,
        };

        if let Err(e) = self.css.settings.validate() {
            let (field, message) = split_range(&e);
            issues.push(error(format!("css.{field}"), message));
        }

        for (i, preset) in self.css.presets.iter().enumerate() {
            if preset.name.trim().is_empty() {
                issues.push(error(
                    format!("css.presets[{i}].name"),
                    "preset name must not be empty".into(),
                ));
            }
            if let Err(e) = preset.settings.validate() {
                let (field, message) = split_range(&e);
                issues.push(error(format!("css.presets[{i}].{field}"), message));
            }
        }

        if let Err(e) = dh_cron::validate_timezone(&self.cron.timezone) {
            issues.push(error("cron.timezone".into(), e.to_string()));
        }

        if self.cron.next_runs == 0 {
            issues.push(error(
                "cron.next_runs".into(),
                "next_runs must be greater than 0".into(),
            ));
        } else if self.cron.next_runs > dh_cron::MAX_RUNS {
            issues.push(error(
                "cron.next_runs".into(),
                format!(
                    "next_runs must be at most {}, got {}",
                    dh_cron::MAX_RUNS,
                    self.cron.next_runs
                ),
            ));
        } else if self.cron.next_runs > 100 {
            issues.push(ConfigIssue {
                severity: ConfigSeverity::Warning,
                field: "cron.next_runs".into(),
                message: format!(
                    "{} runs may take a while to compute for sparse schedules",
                    self.cron.next_runs
                ),
            });
        }

        if let Err(e) = self.color.default_harmony.parse::<HarmonyType>() {
            issues.push(error("color.default_harmony".into(), e.to_string()));
        }

        issues
    }
}

fn split_range(e: &dh_domain::Error) -> (String, String) {
    match e {
        dh_domain::Error::Range { field, message } => (field.clone(), message.clone()),
        other => ("settings".into(), other.to_string()),
    }
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the configuration from the path in `DEVHUB_CONFIG` (or
/// `devhub.toml` by default). Returns the parsed [`Config`] and the path
/// that was used. A missing file yields the defaults.
pub fn load_config() -> anyhow::Result<(Config, String)> {
    let config_path = std::env::var("DEVHUB_CONFIG").unwrap_or_else(|_| "devhub.toml".into());
    let config = load_from(Path::new(&config_path))?;
    Ok((config, config_path))
}

pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config =
        toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}
