//! Document conversion port

use std::path::Path;

use crate::error::Result;

/// Document converter abstraction
pub trait DocumentConverter {
    /// Convert the Markdown file at `input` into a document at `output`
    fn convert(&self, input: &Path, output: &Path) -> Result<()>;
}
