//! Code execution result

use serde::{Deserialize, Serialize};

/// Text reported when an execution produced neither `output` nor `stdout`
pub const NO_OUTPUT: &str = "No output returned.";

/// What an executor reports back after running a snippet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Primary result text, preferred over `stdout` when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Captured standard output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    /// Captured standard error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    /// Process exit code, when the executor ran a process
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl ExecutionResult {
    /// Text to show the user: `output`, then `stdout`, then [`NO_OUTPUT`]
    ///
    /// Empty strings count as absent.
    #[must_use]
    pub fn display_output(&self) -> String {
        [&self.output, &self.stdout]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .cloned()
            .unwrap_or_else(|| NO_OUTPUT.to_string())
    }
}
