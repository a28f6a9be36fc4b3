pub mod color;
pub mod config;
pub mod cron;
pub mod css;

use clap::{Parser, Subcommand};
use serde::Serialize;

/// DevHub: cron, CSS unit and color harmony tools.
#[derive(Debug, Parser)]
#[command(name = "devhub", version, about)]
pub struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build, validate and explain cron expressions.
    #[command(subcommand)]
    Cron(CronCommand),
    /// Convert between CSS length units.
    #[command(subcommand)]
    Css(CssCommand),
    /// Parse colors and generate harmony palettes.
    #[command(subcommand)]
    Color(ColorCommand),
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum CronCommand {
    /// Assemble an expression from its five fields.
    Generate {
        #[arg(long, default_value = "*", allow_hyphen_values = true)]
        minute: String,
        #[arg(long, default_value = "*", allow_hyphen_values = true)]
        hour: String,
        #[arg(long, default_value = "*", allow_hyphen_values = true)]
        day_of_month: String,
        #[arg(long, default_value = "*", allow_hyphen_values = true)]
        month: String,
        #[arg(long, default_value = "*", allow_hyphen_values = true)]
        day_of_week: String,
    },
    /// Check an expression; exits 1 when invalid.
    Validate {
        /// Quoted 5-field expression, e.g. "0 9 * * 1-5".
        expression: String,
    },
    /// Describe an expression in English.
    Describe { expression: String },
    /// List upcoming run times.
    Next {
        expression: String,
        /// Number of runs (defaults to `[cron] next_runs`).
        #[arg(long)]
        count: Option<usize>,
        /// IANA timezone (defaults to `[cron] timezone`).
        #[arg(long)]
        tz: Option<String>,
    },
    /// List the preset catalog.
    Presets {
        /// Only show one category: common, development, maintenance or backup.
        #[arg(long)]
        category: Option<String>,
    },
    /// Show per-field ranges, special tokens and examples.
    Fields,
}

#[derive(Debug, Subcommand)]
pub enum CssCommand {
    /// Convert one value, e.g. `devhub css convert 16 px rem`.
    Convert {
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        to: String,
        /// Use a named preset's reference frame instead of `[css]`.
        #[arg(long)]
        preset: Option<String>,
    },
    /// Convert newline-separated `<number><unit>` lines from a file or stdin.
    Batch {
        /// Target unit.
        #[arg(long)]
        to: String,
        /// Input file (reads stdin when omitted).
        #[arg(long)]
        file: Option<std::path::PathBuf>,
        #[arg(long)]
        preset: Option<String>,
    },
    /// Convert one value into every supported unit.
    Table {
        #[arg(allow_hyphen_values = true)]
        value: String,
        from: String,
        #[arg(long)]
        preset: Option<String>,
    },
    /// List reference-frame presets.
    Presets,
}

#[derive(Debug, Subcommand)]
pub enum ColorCommand {
    /// Generate a palette from a base color (hex, rgb(), hsl() or a name).
    Harmony {
        color: String,
        /// monochromatic, analogous, complementary, split-complementary,
        /// triadic or tetradic (defaults to `[color] default_harmony`).
        #[arg(long)]
        kind: Option<String>,
    },
    /// Normalise a color to hex; unrecognised input is echoed back.
    Parse { color: String },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

/// Pretty-print `value` as JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
