//! Publish an existing file

use std::path::{Path, PathBuf};

use anyhow::Context;

use nbkit::adapters::GitPublisher;
use nbkit::config::Config;
use nbkit::core::ports::Publisher;
use nbkit::output::OutputMode;

/// Publish `file` and print its Colab link
pub fn publish(file: &Path, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("Failed to load config")?;
    let source = resolve_source(file, &config.notebook.staging_dir);

    let publisher = GitPublisher::from_config(&config.publish);
    let publication = publisher
        .publish(&source)
        .with_context(|| format!("Failed to publish {}", source.display()))?;

    publication.render(mode);
    Ok(())
}

/// Use `file` as given if it exists, otherwise look for it in the staging directory
fn resolve_source(file: &Path, staging_dir: &Path) -> PathBuf {
    if file.exists() || file.is_absolute() {
        return file.to_path_buf();
    }
    let staged = staging_dir.join(file);
    if staged.exists() { staged } else { file.to_path_buf() }
}
