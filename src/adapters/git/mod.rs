//! Git publish adapter
//!
//! Implements `Publisher` with libgit2:
//!
//! - [`repo`] - Clone setup, commit and push helpers
//!
//! The access token is handed to libgit2 through a credentials callback
//! and never appears in a URL or a log line.

pub mod repo;

use std::fs;
use std::path::Path;

use git2::Signature;

use crate::config::PublishConfig;
use crate::core::models::{Publication, PublishRecord};
use crate::core::ports::Publisher;
use crate::error::{Error, Result};

/// Publishes files to the configured GitHub repository
pub struct GitPublisher {
    config: PublishConfig,
    token: Option<String>,
}

impl std::fmt::Debug for GitPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitPublisher")
            .field("config", &self.config)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GitPublisher {
    /// Create a publisher with an explicit token
    #[must_use]
    pub const fn new(config: PublishConfig, token: Option<String>) -> Self {
        Self { config, token }
    }

    /// Create a publisher reading the token from the configured env var
    #[must_use]
    pub fn from_config(config: &PublishConfig) -> Self {
        Self::new(config.clone(), std::env::var(&config.token_env).ok())
    }

    fn token(&self) -> Result<&str> {
        self.token.as_deref().filter(|t| !t.is_empty()).ok_or_else(|| Error::MissingToken {
            var: self.config.token_env.clone(),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.config.owner.is_empty() {
            return Err(Error::NotConfigured("owner"));
        }
        if self.config.repo.is_empty() {
            return Err(Error::NotConfigured("repo"));
        }
        if self.config.branch.is_empty() {
            return Err(Error::NotConfigured("branch"));
        }
        Ok(())
    }

    fn refspec(&self, head_ref: &str) -> String {
        let force = if self.config.force { "+" } else { "" };
        format!("{force}{head_ref}:refs/heads/{}", self.config.branch)
    }
}

impl Publisher for GitPublisher {
    fn publish(&self, file: &Path) -> Result<Publication> {
        // Credentials first: nothing is touched without a token
        let token = self.token()?;
        self.validate()?;

        let file_name = file
            .file_name()
            .filter(|_| file.is_file())
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::SourceNotFound(file.to_path_buf()))?;

        // Read before touching the clone: the source may live inside it
        let content = fs::read(file)?;
        let push_url = self.config.push_url();

        let clone_dir = &self.config.clone_dir;
        fs::create_dir_all(clone_dir)?;
        let repo = repo::open_or_init(clone_dir, &self.config.branch)?;
        repo::sync_with_remote(&repo, &push_url, &self.config.branch, &self.config.owner, token)?;

        fs::write(clone_dir.join(&file_name), &content)?;
        log::debug!("Copied {} into {}", file.display(), clone_dir.display());

        let signature = Signature::now(&self.config.author_name, &self.config.author_email)?;
        let message = format!("Add/Update {file_name}");
        let commit = repo::commit_file(&repo, &file_name, &message, &signature)?;

        let refspec = self.refspec(&repo::head_ref(&repo)?);
        repo::push(&repo, &push_url, &refspec, &self.config.owner, token)?;
        log::info!("Pushed {file_name} to {}/{}", self.config.owner, self.config.repo);

        Ok(Publication {
            colab_url: self.config.colab_url(&file_name),
            record: PublishRecord::new(file.to_path_buf(), file_name, self.config.branch.clone()),
            commit: commit.map(|oid| oid.to_string()),
            published_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}
