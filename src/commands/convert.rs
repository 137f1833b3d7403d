//! Convert a Markdown file to DOCX

use std::fs;
use std::path::Path;

use anyhow::Context;

use nbkit::adapters::PandocConverter;
use nbkit::config::Config;
use nbkit::core::services::MarkdownConversion;
use nbkit::output::{ConvertResult, OutputMode};

/// Convert `file` and print the produced document path
pub fn convert(file: &Path, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("Failed to load config")?;

    let filename = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("Not a file: {}", file.display()))?;
    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let converter = PandocConverter::from_config(&config.convert);
    let conversion = MarkdownConversion::new(
        &converter,
        config.convert.upload_dir.clone(),
        config.convert.output_dir.clone(),
    );
    let output_path = conversion.convert(&bytes, &filename)?;

    ConvertResult {
        source: filename,
        output_path,
    }
    .render(mode);
    Ok(())
}
