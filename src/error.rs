//! Error types for nbkit workflows
//!
//! Explicit validation failures (missing credentials, wrong file extension,
//! unconfigured publish target) get their own variants so callers can match
//! on them. Failures of the external tools are wrapped as they occur.

use std::path::PathBuf;

/// Errors produced by the nbkit library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The publish token env var is unset or empty
    #[error("{var} not found in environment variables")]
    MissingToken {
        /// Name of the env var that was consulted
        var: String,
    },

    /// The language model API key env var is unset or empty
    #[error("API key not found: set {var}")]
    MissingApiKey {
        /// Name of the env var that was consulted
        var: String,
    },

    /// The converter was given a file that is not Markdown
    #[error("Only Markdown (.md) files are supported, got '{0}'")]
    UnsupportedExtension(String),

    /// A required publish setting is empty
    #[error("publish.{0} is not configured")]
    NotConfigured(&'static str),

    /// The file to publish does not exist
    #[error("file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The remote refused a pushed reference
    #[error("push of {refname} rejected: {reason}")]
    PushRejected {
        /// Reference that was rejected
        refname: String,
        /// Reason reported by the remote
        reason: String,
    },

    /// An external program exited unsuccessfully
    #[error("{program} failed ({status}): {stderr}")]
    ToolFailed {
        /// Program that was run
        program: String,
        /// Exit status description
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// The converter reported success but left no usable output
    #[error("converter produced no output at {}", .0.display())]
    EmptyOutput(PathBuf),

    /// The language model answered with something unusable
    #[error("language model error: {0}")]
    Llm(String),

    /// Git operation failed
    #[error(transparent)]
    Git(#[from] git2::Error),

    /// HTTP transport failed
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Filesystem or process I/O failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
