//! Show the effective configuration

use std::path::Path;

use anyhow::Context;

use nbkit::config::Config;
use nbkit::output::OutputMode;

/// Print the configuration that commands would use
pub fn show_config(config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("Failed to load config")?;

    match mode {
        OutputMode::Human => print!("{}", config.to_toml()?),
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
