use anyhow::Context;
use chrono::Utc;
use dh_cron::{CronOptions, CronPresetCategory};
use serde_json::json;

use super::{print_json, CronCommand};
use crate::config::Config;

/// Resolve `--count` against `[cron] next_runs`, rejecting 0 and anything
/// over [`dh_cron::MAX_RUNS`].
fn run_count(requested: Option<usize>, config: &Config) -> anyhow::Result<usize> {
    let count = requested.unwrap_or(config.cron.next_runs);
    anyhow::ensure!(
        (1..=dh_cron::MAX_RUNS).contains(&count),
        "count must be between 1 and {}, got {count}",
        dh_cron::MAX_RUNS
    );
    Ok(count)
}

/// Run a `cron` subcommand. Returns `false` when the command should exit 1.
pub fn run(cmd: CronCommand, config: &Config, json: bool) -> anyhow::Result<bool> {
    match cmd {
        CronCommand::Generate {
            minute,
            hour,
            day_of_month,
            month,
            day_of_week,
        } => {
            let opts = CronOptions::new(minute, hour, day_of_month, month, day_of_week);
            let expression = opts.generate();
            if json {
                print_json(&json!({ "expression": expression, "options": opts }))?;
            } else {
                println!("{expression}");
            }
            Ok(true)
        }
        CronCommand::Validate { expression } => {
            let result = dh_cron::check(&expression);
            if json {
                print_json(&result)?;
            } else if let Some(err) = &result.error {
                println!("invalid: {err}");
            } else {
                println!("valid");
            }
            Ok(result.is_valid)
        }
        CronCommand::Describe { expression } => {
            // Descriptions are only meaningful for valid expressions.
            if let Err(e) = dh_cron::validate(&expression) {
                eprintln!("invalid: {e}");
                return Ok(false);
            }
            let description = dh_cron::describe(&expression);
            if json {
                print_json(&json!({ "expression": expression, "description": description }))?;
            } else {
                println!("{description}");
            }
            Ok(true)
        }
        CronCommand::Next {
            expression,
            count,
            tz,
        } => {
            let tz_name = tz.unwrap_or_else(|| config.cron.timezone.clone());
            dh_cron::validate_timezone(&tz_name)?;
            let tz = dh_cron::parse_tz(&tz_name);
            let count = run_count(count, config)?;

            let runs = dh_cron::next_runs(&expression, &Utc::now(), count, tz)
                .with_context(|| format!("computing next runs for '{expression}'"))?;
            if json {
                let times: Vec<String> = runs
                    .iter()
                    .map(|r| r.with_timezone(&tz).to_rfc3339())
                    .collect();
                print_json(&times)?;
            } else {
                for r in &runs {
                    println!("{}", r.with_timezone(&tz).format("%Y-%m-%d %H:%M %Z"));
                }
            }
            Ok(true)
        }
        CronCommand::Presets { category } => {
            let category = category
                .map(|c| c.parse::<CronPresetCategory>())
                .transpose()?;
            let presets: Vec<_> = dh_cron::presets()
                .iter()
                .filter(|p| category.map_or(true, |c| p.category == c))
                .collect();
            if json {
                print_json(&presets)?;
            } else {
                for p in presets {
                    println!(
                        "{:<16} {:<12} {:<24} {}",
                        p.expression, p.category, p.name, p.description
                    );
                }
            }
            Ok(true)
        }
        CronCommand::Fields => {
            let info = dh_cron::field_info();
            if json {
                print_json(info)?;
            } else {
                for f in info {
                    println!("{} ({}-{})", f.name, f.min, f.max);
                    for t in f.special {
                        println!("  {:<6} {}", t.token, t.meaning);
                    }
                    for ex in f.examples {
                        println!("  e.g. {:<8} {}", ex.expression, ex.meaning);
                    }
                }
            }
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_count_defaults_to_config() {
        let config = Config::default();
        assert_eq!(run_count(None, &config).unwrap(), config.cron.next_runs);
        assert_eq!(run_count(Some(12), &config).unwrap(), 12);
    }

    #[test]
    fn run_count_rejects_out_of_bounds() {
        let config = Config::default();
        assert!(run_count(Some(0), &config).is_err());
        assert!(run_count(Some(dh_cron::MAX_RUNS + 1), &config).is_err());
        let err = run_count(Some(usize::MAX), &config).unwrap_err();
        assert!(err.to_string().starts_with("count must be between 1 and"));
    }
}
