//! Temporary bare git remote for publish tests

use git2::{Repository, Signature};
use nbkit::config::PublishConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A workspace holding a bare "GitHub" remote and room for a local clone
pub struct TempRemote {
    temp_dir: TempDir,
    remote_path: PathBuf,
}

impl TempRemote {
    /// Create a bare repository under a new temp directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let remote_path = temp_dir.path().join("remote.git");
        Repository::init_bare(&remote_path).expect("Failed to init bare remote");

        Self {
            temp_dir,
            remote_path,
        }
    }

    /// Root of the temp directory
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the bare remote
    pub fn remote_path(&self) -> &Path {
        &self.remote_path
    }

    /// Publish settings pointing at this remote with the given clone directory name
    pub fn publish_config(&self, clone_name: &str) -> PublishConfig {
        PublishConfig {
            clone_dir: self.root().join(clone_name),
            owner: "octo".to_string(),
            repo: "notebooks".to_string(),
            remote_url: Some(self.remote_path.to_string_lossy().into_owned()),
            ..PublishConfig::default()
        }
    }

    /// Write a file into the temp directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join("src").join(name);
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create parent directories");
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Commit `name` directly on the remote `branch`, on top of its current tip
    pub fn seed_file(&self, branch: &str, name: &str, content: &str) {
        self.commit_on_remote(branch, name, content, true);
    }

    /// Replace the remote `branch` with a single unrelated commit holding `name`
    pub fn rewrite_branch(&self, branch: &str, name: &str, content: &str) {
        self.commit_on_remote(branch, name, content, false);
    }

    fn commit_on_remote(&self, branch: &str, name: &str, content: &str, keep_history: bool) {
        let repo = Repository::open_bare(&self.remote_path).expect("Failed to open remote");
        let refname = format!("refs/heads/{branch}");
        let parent = if keep_history {
            repo.find_reference(&refname).and_then(|r| r.peel_to_commit()).ok()
        } else {
            None
        };

        let blob = repo.blob(content.as_bytes()).expect("Failed to write blob");
        let base = parent.as_ref().map(|c| c.tree().expect("Commit has no tree"));
        let mut builder = repo.treebuilder(base.as_ref()).expect("Failed to create tree builder");
        builder.insert(name, blob, 0o100_644).expect("Failed to insert tree entry");
        let tree = repo.find_tree(builder.write().expect("Failed to write tree")).unwrap();

        let sig = Signature::now("Elsewhere", "elsewhere@example.com").unwrap();
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        let oid = repo.commit(None, &sig, &sig, "Seed", &tree, &parents).expect("Failed to commit");
        repo.reference(&refname, oid, true, "seed").expect("Failed to update branch");
    }

    /// Names and contents of the files at the tip of `branch` on the remote
    pub fn branch_files(&self, branch: &str) -> Vec<(String, String)> {
        let repo = Repository::open_bare(&self.remote_path).expect("Failed to open remote");
        let commit = repo
            .find_reference(&format!("refs/heads/{branch}"))
            .and_then(|r| r.peel_to_commit())
            .expect("Branch missing on remote");
        let tree = commit.tree().expect("Commit has no tree");

        tree.iter()
            .map(|entry| {
                let blob = repo.find_blob(entry.id()).expect("Tree entry is not a blob");
                (
                    entry.name().unwrap_or_default().to_string(),
                    String::from_utf8_lossy(blob.content()).into_owned(),
                )
            })
            .collect()
    }

    /// Number of commits reachable from `branch` on the remote
    pub fn commit_count(&self, branch: &str) -> usize {
        let repo = Repository::open_bare(&self.remote_path).expect("Failed to open remote");
        let mut walk = repo.revwalk().expect("Failed to create revwalk");
        walk.push_ref(&format!("refs/heads/{branch}")).expect("Branch missing on remote");
        walk.count()
    }
}

impl Default for TempRemote {
    fn default() -> Self {
        Self::new()
    }
}
