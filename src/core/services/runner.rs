//! Notebook runner - orchestrates generate, save, execute, publish
//!
//! Every step blocks on the previous one. Only the publish step is allowed
//! to fail without failing the run: its error is reported in place of the
//! Colab link.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::models::{GeneratedArtifact, Notebook, RunReport, notebook_file_name};
use crate::core::ports::{CodeExecutor, CodeGenerator, Publisher};
use crate::core::services::fences::{render_prompt, strip_code_fences};
use crate::error::Result;

/// Prefix of the `colab_link` text when publishing failed
pub const PUBLISH_ERROR_PREFIX: &str = "Error while uploading to GitHub";

/// Runs the notebook pipeline against a set of ports
pub struct NotebookRunner<'a> {
    generator: &'a dyn CodeGenerator,
    executor: &'a dyn CodeExecutor,
    publisher: &'a dyn Publisher,
    staging_dir: PathBuf,
    prompt_template: String,
}

impl fmt::Debug for NotebookRunner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotebookRunner")
            .field("staging_dir", &self.staging_dir)
            .field("prompt_template", &self.prompt_template)
            .finish_non_exhaustive()
    }
}

impl<'a> NotebookRunner<'a> {
    /// Create a runner
    #[must_use]
    pub fn new(
        generator: &'a dyn CodeGenerator,
        executor: &'a dyn CodeExecutor,
        publisher: &'a dyn Publisher,
        staging_dir: impl Into<PathBuf>,
        prompt_template: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            executor,
            publisher,
            staging_dir: staging_dir.into(),
            prompt_template: prompt_template.into(),
        }
    }

    /// Ask the generator for code and strip fence decoration
    pub fn generate(&self, instruction: &str) -> Result<GeneratedArtifact> {
        let prompt = render_prompt(&self.prompt_template, instruction);
        log::debug!("Prompt is {} bytes", prompt.len());

        let response = self.generator.generate(&prompt)?;
        let code = strip_code_fences(&response);
        log::debug!("Generated {} bytes of code", code.len());

        Ok(GeneratedArtifact::new(instruction.to_string(), code))
    }

    /// Wrap the artifact in a one-cell notebook and write it
    ///
    /// The file name comes from the instruction, so a repeated instruction
    /// overwrites the earlier notebook.
    pub fn save_notebook(&self, artifact: &GeneratedArtifact) -> Result<PathBuf> {
        fs::create_dir_all(&self.staging_dir)?;
        let path = self.staging_dir.join(notebook_file_name(&artifact.instruction));

        Notebook::with_code_cell(artifact.code.as_str()).save(&path)?;
        Ok(path)
    }

    /// Run the full pipeline for one instruction
    pub fn run(&self, instruction: &str) -> Result<RunReport> {
        log::info!("Generating code");
        let artifact = self.generate(instruction)?;

        let notebook_path = self.save_notebook(&artifact)?;
        log::info!("Saved notebook to {}", notebook_path.display());

        log::info!("Executing generated code");
        let execution = self.executor.execute(&artifact.code)?;

        log::info!("Publishing {}", notebook_path.display());
        let colab_link = match self.publisher.publish(&notebook_path) {
            Ok(publication) => publication.colab_url,
            Err(e) => {
                log::warn!("Publish failed: {e}");
                format!("{PUBLISH_ERROR_PREFIX}: {e}")
            },
        };

        Ok(RunReport {
            generated_code: artifact.code,
            execution_output: execution.display_output(),
            colab_link,
            notebook_path,
        })
    }
}
