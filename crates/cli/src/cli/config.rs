use std::fmt::Write as _;

use crate::config::{Config, ConfigIssue, ConfigSeverity};

/// Print the config report. Returns `true` when there are no errors.
pub fn validate(config: &Config, config_path: &str) -> bool {
    let issues = config.validate();
    print!("{}", report(&issues, config_path));
    !issues.iter().any(|i| i.severity == ConfigSeverity::Error)
}

/// Render issues grouped under their top-level section (`[css]`, `[cron]`,
/// ...) in the order each section first appears, followed by a summary line.
fn report(issues: &[ConfigIssue], config_path: &str) -> String {
    if issues.is_empty() {
        return format!("Config OK ({config_path})\n");
    }

    let mut sections: Vec<(&str, Vec<&ConfigIssue>)> = Vec::new();
    for issue in issues {
        let section = issue.field.split('.').next().unwrap_or_default();
        match sections.iter_mut().find(|(name, _)| *name == section) {
            Some((_, group)) => group.push(issue),
            None => sections.push((section, vec![issue])),
        }
    }

    let mut out = String::new();
    for (section, group) in &sections {
        let _ = writeln!(out, "[{section}]");
        for issue in group {
            let _ = writeln!(out, "  {issue}");
        }
    }

    let errors = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .count();
    let _ = writeln!(
        out,
        "\n{errors} error(s), {} warning(s) in {config_path}",
        issues.len() - errors
    );
    out
}

/// Dump the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<()> {
    let output = toml::to_string_pretty(config)
        .map_err(|e| anyhow::anyhow!("serializing config: {e}"))?;
    print!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_config_reports_ok() {
        assert_eq!(report(&[], "devhub.toml"), "Config OK (devhub.toml)\n");
    }

    #[test]
    fn issues_are_grouped_by_section() {
        let issues = vec![
            ConfigIssue {
                severity: ConfigSeverity::Error,
                field: "css.root_font_size".into(),
                message: "must be greater than 0".into(),
            },
            ConfigIssue {
                severity: ConfigSeverity::Warning,
                field: "cron.next_runs".into(),
                message: "slow".into(),
            },
            ConfigIssue {
                severity: ConfigSeverity::Error,
                field: "css.presets[0].viewport_width".into(),
                message: "must be greater than 0".into(),
            },
        ];
        let out = report(&issues, "devhub.toml");
        assert_eq!(
            out,
            "[css]\n\
             \x20 [ERROR] css.root_font_size: must be greater than 0\n\
             \x20 [ERROR] css.presets[0].viewport_width: must be greater than 0\n\
             [cron]\n\
             \x20 [WARN] cron.next_runs: slow\n\
             \n2 error(s), 1 warning(s) in devhub.toml\n"
        );
    }
}
