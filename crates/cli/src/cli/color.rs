use dh_color::HarmonyType;
use serde_json::json;

use super::{print_json, ColorCommand};
use crate::config::Config;

pub fn run(cmd: ColorCommand, config: &Config, json: bool) -> anyhow::Result<bool> {
    match cmd {
        ColorCommand::Harmony { color, kind } => {
            let kind: HarmonyType = kind
                .as_deref()
                .unwrap_or(&config.color.default_harmony)
                .parse()?;
            let Some(base) = dh_color::parse_hsl(&color) else {
                eprintln!("not a recognised color: {color}");
                return Ok(false);
            };
            let palette = dh_color::generate(base, kind);
            if json {
                print_json(&json!({ "base": base.to_hex(), "kind": kind, "palette": palette }))?;
            } else {
                println!("{kind} palette for {}:", base.to_hex());
                for (hex, hsl) in palette.iter().zip(dh_color::generate_hsl(base, kind)) {
                    println!("  {hex}  {hsl}");
                }
            }
            Ok(true)
        }
        ColorCommand::Parse { color } => {
            let parsed = dh_color::parse_color_input(&color);
            let recognised = dh_color::parse_hsl(&color).is_some();
            if json {
                print_json(&json!({ "input": color, "color": parsed, "recognised": recognised }))?;
            } else {
                println!("{parsed}");
            }
            Ok(recognised)
        }
    }
}
