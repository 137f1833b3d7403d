//! Publish records
//!
//! A publish has no identity of its own; these types describe what was
//! pushed and where it can be opened.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A file to push to a branch of the publish repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRecord {
    /// Local file being published
    pub source: PathBuf,
    /// Path of the file inside the repository
    pub destination: String,
    /// Branch the file is pushed to
    pub branch: String,
}

impl PublishRecord {
    /// Create a record for a file placed at the repository root
    #[must_use]
    pub const fn new(source: PathBuf, destination: String, branch: String) -> Self {
        Self {
            source,
            destination,
            branch,
        }
    }
}

/// Outcome of a successful publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// What was published
    pub record: PublishRecord,
    /// Commit created, or `None` when the file content was unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    /// Link that opens the file in Colab
    pub colab_url: String,
    /// When the push completed (RFC3339)
    pub published_at: String,
}
