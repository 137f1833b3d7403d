//! Generated code artifact

use serde::{Deserialize, Serialize};

/// Source code produced by the language model for one instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// The instruction the code was generated for
    pub instruction: String,
    /// Generated source with fence decoration removed
    pub code: String,
}

impl GeneratedArtifact {
    /// Create a new artifact
    #[must_use]
    pub const fn new(instruction: String, code: String) -> Self {
        Self { instruction, code }
    }
}
