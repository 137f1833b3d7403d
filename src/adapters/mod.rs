//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `llm/` - Anthropic Messages API code generator
//! - `process/` - Interpreter-backed code executor
//! - `git/` - libgit2 publisher for the Colab repository
//! - `pandoc/` - pandoc document converter

pub mod git;
pub mod llm;
pub mod pandoc;
pub mod process;

pub use git::GitPublisher;
pub use llm::AnthropicGenerator;
pub use pandoc::PandocConverter;
pub use process::ProcessExecutor;
