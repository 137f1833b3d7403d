//! Centralized path definitions for nbkit
//!
//! This module is the single source of truth for the file and directory
//! names nbkit reads or creates by default.
//!
//! ## Layout
//!
//! ### Per-Project (working directory)
//!
//! ```text
//! ./
//! ├── nbkit.toml              # Project config (optional)
//! ├── notebooks/              # Generated .ipynb files
//! ├── uploads/                # Saved Markdown inputs
//! ├── outputs/                # Converted .docx files
//! └── .nbkit/
//!     └── publish/            # Local clone of the publish repository
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.nbkit/
//! └── config.toml             # Fallback config
//! ```

use std::path::PathBuf;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "nbkit.toml";

/// Default directory for generated notebooks
pub const STAGING_DIR: &str = "notebooks";

/// Default directory holding the publish repository clone
pub const CLONE_DIR: &str = ".nbkit/publish";

/// Default directory for saved Markdown inputs
pub const UPLOAD_DIR: &str = "uploads";

/// Default directory for converted documents
pub const OUTPUT_DIR: &str = "outputs";

/// Notebook file extension
pub const NOTEBOOK_EXT: &str = "ipynb";

/// Global config directory name
const GLOBAL_DIR: &str = ".nbkit";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to `nbkit.toml` in the current directory.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get the global nbkit directory.
///
/// Returns `~/.nbkit/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.nbkit/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
