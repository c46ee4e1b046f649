use std::path::PathBuf;

use anyhow::{bail, Context};
use sketchdeck::{init_logging, load_script, replay, Config, InteractionSettings, BUILD_DATE, VERSION};

const USAGE: &str = "usage: sketchdeck <script.json> [config.toml|config.json]";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut args = std::env::args_os().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let config_path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!(USAGE);
    }

    tracing::info!("SketchDeck {} (built {})", VERSION, BUILD_DATE);

    let config = match config_path {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            Err(err) => {
                tracing::warn!("{}, using default config", err);
                Config::default()
            }
        },
    };

    let script = load_script(&script_path)?;
    let report = replay(&script, InteractionSettings::from(&config));
    if !report.rejected.is_empty() {
        tracing::warn!("{} commands were rejected", report.rejected.len());
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
