//! Interpreter-backed code executor
//!
//! Writes the snippet to a temporary script and runs the configured
//! interpreter on it. No sandbox and no timeout.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::config::ExecutorConfig;
use crate::core::models::ExecutionResult;
use crate::core::ports::CodeExecutor;
use crate::error::Result;

/// Runs code by invoking an interpreter on a temporary file
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    interpreter: String,
    args: Vec<String>,
}

impl ProcessExecutor {
    /// Create an executor for `interpreter`, passing `args` before the script
    #[must_use]
    pub const fn new(interpreter: String, args: Vec<String>) -> Self {
        Self { interpreter, args }
    }

    /// Create an executor from config
    #[must_use]
    pub fn from_config(config: &ExecutorConfig) -> Self {
        Self::new(config.interpreter.clone(), config.args.clone())
    }
}

impl CodeExecutor for ProcessExecutor {
    fn execute(&self, code: &str) -> Result<ExecutionResult> {
        let mut script = tempfile::Builder::new().prefix("nbkit-").suffix(".py").tempfile()?;
        script.write_all(code.as_bytes())?;
        script.flush()?;

        log::debug!("Running {} {:?} {}", self.interpreter, self.args, script.path().display());
        let out = Command::new(&self.interpreter)
            .args(&self.args)
            .arg(script.path())
            .stdin(Stdio::null())
            .output()?;

        let stdout = String::from_utf8_lossy(&out.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&out.stderr).into_owned();

        // A failed run reports its diagnostics as the primary output
        let output = (!out.status.success() && !stderr.is_empty()).then(|| stderr.clone());

        Ok(ExecutionResult {
            output,
            stdout: Some(stdout),
            stderr: Some(stderr).filter(|s| !s.is_empty()),
            exit_code: out.status.code(),
        })
    }
}
