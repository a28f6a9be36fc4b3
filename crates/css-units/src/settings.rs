use dh_domain::{Error, Result};
use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Reference frame
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Reference frame for relative units. All magnitudes are pixels and must be
/// strictly positive; see [`ConversionSettings::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionSettings {
    #[serde(default = "d_16")]
    pub base_font_size: f64,
    #[serde(default = "d_16")]
    pub root_font_size: f64,
    #[serde(default = "d_16")]
    pub parent_font_size: f64,
    #[serde(default = "d_1920")]
    pub viewport_width: f64,
    #[serde(default = "d_1080")]
    pub viewport_height: f64,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            root_font_size: 16.0,
            parent_font_size: 16.0,
            viewport_width: 1920.0,
            viewport_height: 1080.0,
        }
    }
}

impl ConversionSettings {
    /// Reject zero, negative, or non-finite settings. Reports the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("base_font_size", self.base_font_size),
            ("root_font_size", self.root_font_size),
            ("parent_font_size", self.parent_font_size),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::range(
                    name,
                    format!("must be a positive number, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_16() -> f64 {
    16.0
}

fn d_1920() -> f64 {
    1920.0
}

fn d_1080() -> f64 {
    1080.0
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Presets
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A named snapshot of a complete reference frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionPreset {
    pub name: String,
    #[serde(flatten)]
    pub settings: ConversionSettings,
}

impl ConversionPreset {
    pub fn new(name: impl Into<String>, settings: ConversionSettings) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }
}

fn builtin(name: &str, width: f64, height: f64) -> ConversionPreset {
    ConversionPreset::new(
        name,
        ConversionSettings {
            viewport_width: width,
            viewport_height: height,
            ..ConversionSettings::default()
        },
    )
}

/// Append-only in-memory preset catalog.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<ConversionPreset>,
}

impl PresetCatalog {
    /// Catalog seeded with the built-in device presets.
    pub fn with_builtins() -> Self {
        Self {
            presets: vec![
                builtin("Desktop", 1920.0, 1080.0),
                builtin("Laptop", 1366.0, 768.0),
                builtin("Tablet", 768.0, 1024.0),
                builtin("Mobile", 375.0, 667.0),
            ],
        }
    }

    /// Append a preset. The name must be non-empty and the settings valid.
    pub fn add(&mut self, preset: ConversionPreset) -> Result<()> {
        if preset.name.trim().is_empty() {
            return Err(Error::InvalidInput("preset name must not be empty".into()));
        }
        preset.settings.validate()?;
        tracing::debug!(name = %preset.name, "conversion preset added");
        self.presets.push(preset);
        Ok(())
    }

    /// Look up a preset by name (case-insensitive). Later additions shadow
    /// earlier ones with the same name.
    pub fn get(&self, name: &str) -> Option<&ConversionPreset> {
        self.presets
            .iter()
            .rev()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionPreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
