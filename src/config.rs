//! Configuration management
//!
//! Replaces hard-coded locations and credentials with a TOML file. Lookup
//! order is an explicit `--config` path, then `./nbkit.toml`, then
//! `~/.nbkit/config.toml`, then built-in defaults. Every field has its own
//! default so partial files are accepted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths;

/// Default instruction template; `{prompt}` is replaced by the user text
pub const DEFAULT_PROMPT_TEMPLATE: &str =
    "Write a clean Python script that {prompt}. Output only valid Python code without explanations.";

/// Default pandoc input format, with TeX math extensions enabled
pub const DEFAULT_FROM_FORMAT: &str = "markdown+tex_math_dollars+tex_math_single_backslash";

/// Top-level nbkit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Language model settings
    #[serde(default)]
    pub llm: LlmConfig,
    /// Notebook staging settings
    #[serde(default)]
    pub notebook: NotebookConfig,
    /// Code execution settings
    #[serde(default)]
    pub executor: ExecutorConfig,
    /// GitHub publish settings
    #[serde(default)]
    pub publish: PublishConfig,
    /// Markdown conversion settings
    #[serde(default)]
    pub convert: ConvertConfig,
}

/// Language model settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Messages API endpoint
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Name of the env var holding the API key
    pub api_key_env: String,
    /// Instruction template containing `{prompt}`
    pub prompt_template: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-sonnet-4-5-20250929".to_string(),
            max_tokens: 4096,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}

/// Notebook staging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotebookConfig {
    /// Directory generated notebooks are written to
    pub staging_dir: PathBuf,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            staging_dir: PathBuf::from(paths::STAGING_DIR),
        }
    }
}

/// Code execution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Interpreter program
    pub interpreter: String,
    /// Arguments placed before the script path
    pub args: Vec<String>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            args: Vec::new(),
        }
    }
}

/// GitHub publish settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Local clone the file is copied into
    pub clone_dir: PathBuf,
    /// GitHub account owning the repository
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch pushed to
    pub branch: String,
    /// Name of the env var holding the access token
    pub token_env: String,
    /// Push URL override (defaults to the GitHub HTTPS URL)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    /// Force-push the branch
    pub force: bool,
    /// Commit author name
    pub author_name: String,
    /// Commit author email
    pub author_email: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            clone_dir: PathBuf::from(paths::CLONE_DIR),
            owner: String::new(),
            repo: String::new(),
            branch: "main".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            remote_url: None,
            force: true,
            author_name: "nbkit".to_string(),
            author_email: "nbkit@users.noreply.github.com".to_string(),
        }
    }
}

impl PublishConfig {
    /// URL the branch is pushed to
    ///
    /// The token is never part of this URL; it is supplied through the
    /// credentials callback.
    #[must_use]
    pub fn push_url(&self) -> String {
        self.remote_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{}/{}.git", self.owner, self.repo))
    }

    /// Colab URL for a file at the repository root
    #[must_use]
    pub fn colab_url(&self, file_name: &str) -> String {
        format!(
            "https://colab.research.google.com/github/{}/{}/blob/{}/{}",
            self.owner, self.repo, self.branch, file_name
        )
    }
}

/// Markdown conversion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// pandoc program
    pub pandoc: String,
    /// Directory saved Markdown inputs go to
    pub upload_dir: PathBuf,
    /// Directory converted documents go to
    pub output_dir: PathBuf,
    /// pandoc `--from` format
    pub from_format: String,
    /// Reference document supplying Word styles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_doc: Option<PathBuf>,
    /// Extra arguments appended to the pandoc command line
    pub extra_args: Vec<String>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            pandoc: "pandoc".to_string(),
            upload_dir: PathBuf::from(paths::UPLOAD_DIR),
            output_dir: PathBuf::from(paths::OUTPUT_DIR),
            from_format: DEFAULT_FROM_FORMAT.to_string(),
            reference_doc: None,
            extra_args: Vec::new(),
        }
    }
}

impl Config {
    /// Resolve and load the effective configuration
    ///
    /// An explicit path must exist. Without one, the project file and then
    /// the global file are tried; if neither exists the defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        for candidate in [paths::project_config(), paths::global_config()] {
            if candidate.exists() {
                log::debug!("Loading config from {}", candidate.display());
                return Self::load_from(&candidate);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to disk, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}
