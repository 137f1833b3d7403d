//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Publication, RunReport};
use crate::core::services::runner::PUBLISH_ERROR_PREFIX;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a conversion
#[derive(Debug, Serialize)]
pub struct ConvertResult {
    /// Name of the Markdown file that was converted
    pub source: String,
    /// Path of the produced document
    pub output_path: PathBuf,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

impl RunReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", "Generated code:".bold());
        println!("{}\n", self.generated_code);

        println!("{}", "Execution output:".bold());
        println!("{}\n", self.execution_output.trim_end());

        println!("Notebook: {}", self.notebook_path.display());
        if self.colab_link.starts_with(PUBLISH_ERROR_PREFIX) {
            println!("{}", self.colab_link.red());
        } else {
            println!("Colab:    {}", self.colab_link.green());
        }
    }
}

impl Publication {
    /// Render the publication based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                match &self.commit {
                    Some(commit) => println!("Committed {} ({commit})", self.record.destination),
                    None => println!("{} unchanged, pushed existing commit", self.record.destination),
                }
                println!("Open in Colab: {}", self.colab_url.green());
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl ConvertResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Converted {} -> {}", self.source, self.output_path.display());
            },
            OutputMode::Json => print_json(self),
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
