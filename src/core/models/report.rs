//! Notebook runner report

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Combined result of one notebook run
///
/// `colab_link` holds either the Colab URL or the publish error message;
/// a failed publish does not fail the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Code written into the notebook
    pub generated_code: String,
    /// Text reported by the executor
    pub execution_output: String,
    /// Colab URL, or the publish error
    pub colab_link: String,
    /// Where the notebook was saved
    pub notebook_path: PathBuf,
}
