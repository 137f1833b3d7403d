//! Generate, save, execute and publish a notebook

use std::path::Path;

use anyhow::Context;

use nbkit::adapters::{AnthropicGenerator, GitPublisher, ProcessExecutor};
use nbkit::config::Config;
use nbkit::core::services::NotebookRunner;
use nbkit::output::OutputMode;

/// Run the notebook pipeline for one instruction
pub fn run(instruction: &str, config_path: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("Failed to load config")?;

    let generator =
        AnthropicGenerator::from_config(&config.llm).context("Failed to set up code generator")?;
    let executor = ProcessExecutor::from_config(&config.executor);
    let publisher = GitPublisher::from_config(&config.publish);

    let runner = NotebookRunner::new(
        &generator,
        &executor,
        &publisher,
        config.notebook.staging_dir.clone(),
        config.llm.prompt_template.clone(),
    );

    let report = runner.run(instruction).with_context(|| format!("Run failed for '{instruction}'"))?;
    report.render(mode);
    Ok(())
}
