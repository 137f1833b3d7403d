//! Markdown conversion workflow
//!
//! Validates the upload, stores it under a fresh id and hands it to a
//! [`DocumentConverter`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::core::ports::DocumentConverter;
use crate::error::{Error, Result};

/// Extension accepted as Markdown
pub const MARKDOWN_EXT: &str = ".md";

/// Extension of produced documents
pub const DOCX_EXT: &str = "docx";

/// Converts uploaded Markdown into DOCX files
pub struct MarkdownConversion<'a> {
    converter: &'a dyn DocumentConverter,
    upload_dir: PathBuf,
    output_dir: PathBuf,
}

impl fmt::Debug for MarkdownConversion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownConversion")
            .field("upload_dir", &self.upload_dir)
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}

impl<'a> MarkdownConversion<'a> {
    /// Create a conversion workflow
    #[must_use]
    pub fn new(
        converter: &'a dyn DocumentConverter,
        upload_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            converter,
            upload_dir: upload_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Save `bytes` as Markdown and convert them, returning the output path
    ///
    /// `filename` must end in `.md`; anything else is rejected before a
    /// file is written.
    pub fn convert(&self, bytes: &[u8], filename: &str) -> Result<PathBuf> {
        if !filename.ends_with(MARKDOWN_EXT) {
            return Err(Error::UnsupportedExtension(filename.to_string()));
        }

        let file_id = Uuid::new_v4();
        let input_path = self.upload_dir.join(format!("{file_id}{MARKDOWN_EXT}"));
        let output_path = self.output_dir.join(format!("{file_id}.{DOCX_EXT}"));

        fs::create_dir_all(&self.upload_dir)?;
        fs::create_dir_all(&self.output_dir)?;
        fs::write(&input_path, bytes)?;
        log::info!("Saved {filename} as {}", input_path.display());

        self.converter.convert(&input_path, &output_path)?;
        ensure_non_empty(&output_path)?;

        log::info!("Converted to {}", output_path.display());
        Ok(output_path)
    }
}

fn ensure_non_empty(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
        _ => Err(Error::EmptyOutput(path.to_path_buf())),
    }
}
