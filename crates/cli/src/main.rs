use clap::Parser;
use tracing_subscriber::EnvFilter;

use dh_cli::cli::{Cli, Command, ConfigCommand};
use dh_cli::config::{load_config, LoggingConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, config_path) = load_config()?;
    init_tracing(&config.logging);
    tracing::debug!(config_path = %config_path, "configuration loaded");

    let ok = match cli.command {
        Command::Cron(cmd) => dh_cli::cli::cron::run(cmd, &config, cli.json)?,
        Command::Css(cmd) => dh_cli::cli::css::run(cmd, &config, cli.json)?,
        Command::Color(cmd) => dh_cli::cli::color::run(cmd, &config, cli.json)?,
        Command::Config(ConfigCommand::Validate) => {
            dh_cli::cli::config::validate(&config, &config_path)
        }
        Command::Config(ConfigCommand::Show) => {
            dh_cli::cli::config::show(&config)?;
            true
        }
        Command::Version => {
            println!("devhub {}", env!("CARGO_PKG_VERSION"));
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Initialize stderr-only tracing so diagnostics never pollute stdout.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
