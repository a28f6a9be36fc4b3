use std::io::Read;

use anyhow::Context;
use dh_css_units::{ConversionSettings, CssUnit};
use serde_json::json;

use super::{print_json, CssCommand};
use crate::config::Config;

/// Reference frame from `--preset` when given, else the `[css]` section.
fn frame(config: &Config, preset: Option<&str>) -> anyhow::Result<ConversionSettings> {
    match preset {
        Some(name) => config
            .css
            .catalog()
            .get(name)
            .map(|p| p.settings)
            .ok_or_else(|| anyhow::anyhow!("unknown css preset '{name}'")),
        None => Ok(config.css.settings),
    }
}

pub fn run(cmd: CssCommand, config: &Config, json: bool) -> anyhow::Result<bool> {
    match cmd {
        CssCommand::Convert {
            value,
            from,
            to,
            preset,
        } => {
            let settings = frame(config, preset.as_deref())?;
            let result = dh_css_units::convert(&value, &from, &to, &settings)?;
            if json {
                print_json(&json!({ "value": value, "from": from, "to": to, "result": result }))?;
            } else {
                println!("{result}{to}");
            }
            Ok(true)
        }
        CssCommand::Batch { to, file, preset } => {
            let settings = frame(config, preset.as_deref())?;
            let input = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading stdin")?;
                    buf
                }
            };
            let lines = dh_css_units::batch_convert(&input, &to, &settings)?;
            if json {
                print_json(&lines)?;
            } else {
                for line in lines {
                    println!("{line}");
                }
            }
            Ok(true)
        }
        CssCommand::Table {
            value,
            from,
            preset,
        } => {
            let settings = frame(config, preset.as_deref())?;
            let value = dh_css_units::parse_value(&value)?;
            let from: CssUnit = from.parse()?;
            let rows = dh_css_units::convert_all(value, from, &settings)?;
            if json {
                print_json(&rows)?;
            } else {
                for row in rows {
                    println!("{:>14} {}", row.formatted, row.unit);
                }
            }
            Ok(true)
        }
        CssCommand::Presets => {
            let catalog = config.css.catalog();
            if json {
                let presets: Vec<_> = catalog.iter().collect();
                print_json(&presets)?;
            } else {
                for p in catalog.iter() {
                    let s = &p.settings;
                    println!(
                        "{:<12} root={} parent={} viewport={}x{}",
                        p.name, s.root_font_size, s.parent_font_size, s.viewport_width, s.viewport_height
                    );
                }
            }
            Ok(true)
        }
    }
}
