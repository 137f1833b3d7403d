//! Code generation port
//!
//! Defines the interface for asking a language model for code.

use crate::error::Result;

/// Language model abstraction
///
/// Implementations send a fully rendered prompt and return the raw model
/// text; fence stripping happens in the caller.
pub trait CodeGenerator {
    /// Send `prompt` and return the model's text response
    fn generate(&self, prompt: &str) -> Result<String>;
}
