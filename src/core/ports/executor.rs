//! Code execution port

use crate::core::models::ExecutionResult;
use crate::error::Result;

/// Code execution abstraction
///
/// Sandboxing, timeouts and resource limits are the implementation's
/// business; callers pass source through unchanged.
pub trait CodeExecutor {
    /// Run `code` and report what it produced
    fn execute(&self, code: &str) -> Result<ExecutionResult>;
}
