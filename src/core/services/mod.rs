//! Workflow services
//!
//! - [`fences`] - Prompt rendering and code-fence stripping (pure)
//! - [`runner`] - Generate, save, execute, publish pipeline
//! - [`conversion`] - Markdown to DOCX workflow

pub mod conversion;
pub mod fences;
pub mod runner;

pub use conversion::MarkdownConversion;
pub use fences::{render_prompt, strip_code_fences};
pub use runner::NotebookRunner;
