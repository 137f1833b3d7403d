//! pandoc document converter
//!
//! Implements `DocumentConverter` by running the pandoc CLI with a fixed
//! option set: standalone output, TeX math input, MathML math (which Word
//! turns into editable equations) and an optional reference document for
//! styles.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::ConvertConfig;
use crate::core::ports::DocumentConverter;
use crate::error::{Error, Result};

/// Converts Markdown to DOCX with pandoc
#[derive(Debug, Clone)]
pub struct PandocConverter {
    program: String,
    from_format: String,
    reference_doc: Option<PathBuf>,
    extra_args: Vec<String>,
}

impl PandocConverter {
    /// Create a converter from config
    #[must_use]
    pub fn from_config(config: &ConvertConfig) -> Self {
        Self {
            program: config.pandoc.clone(),
            from_format: config.from_format.clone(),
            reference_doc: config.reference_doc.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    /// Command-line arguments for converting `input` into `output`
    #[must_use]
    pub fn arguments(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            input.into(),
            "--to=docx".into(),
            format!("--from={}", self.from_format).into(),
            "--standalone".into(),
            "--mathml".into(),
        ];

        if let Some(reference) = &self.reference_doc {
            args.push("--reference-doc".into());
            args.push(reference.into());
        }

        args.extend(self.extra_args.iter().map(OsString::from));

        let mut output_arg = OsString::from("--output=");
        output_arg.push(output);
        args.push(output_arg);
        args
    }
}

impl DocumentConverter for PandocConverter {
    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let args = self.arguments(input, output);
        log::debug!("Running {} {:?}", self.program, args);

        let out = Command::new(&self.program).args(&args).stdin(Stdio::null()).output()?;

        if !out.status.success() {
            return Err(Error::ToolFailed {
                program: self.program.clone(),
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
