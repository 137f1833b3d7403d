//! libgit2 operations on the publish clone
//!
//! Thin helpers for the publish steps around the copy: open (or create)
//! the clone, bring it up to the remote branch, stage, commit, push.

use std::path::Path;

use git2::build::CheckoutBuilder;
use git2::{
    Commit, Cred, Direction, ErrorCode, FetchOptions, Oid, PushOptions, RemoteCallbacks,
    Repository, RepositoryInitOptions, Signature,
};

use crate::error::{Error, Result};

/// Open the clone at `path`, initializing it on `branch` if it is not a repository
///
/// A fresh repository has an unborn `branch`; [`sync_with_remote`] fills it
/// from the remote when the branch already exists there.
pub fn open_or_init(path: &Path, branch: &str) -> Result<Repository> {
    match Repository::open(path) {
        Ok(repo) => Ok(repo),
        Err(e) if e.code() == ErrorCode::NotFound => {
            log::info!("Initializing publish repository at {}", path.display());
            let mut opts = RepositoryInitOptions::new();
            opts.initial_head(branch);
            Ok(Repository::init_opts(path, &opts)?)
        },
        Err(e) => Err(e.into()),
    }
}

/// Commit HEAD points at, or `None` on an unborn branch
pub fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>> {
    match repo.head() {
        Ok(head) => Ok(Some(head.peel_to_commit()?)),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Full name of the reference HEAD points at (e.g. `refs/heads/main`)
pub fn head_ref(repo: &Repository) -> Result<String> {
    let head = repo.head()?;
    head.name()
        .map(String::from)
        .ok_or_else(|| git2::Error::from_str("HEAD name is not valid UTF-8").into())
}

/// Bring the clone up to `branch` on the remote at `url`
///
/// An unborn or older local branch is moved to the remote tip and checked
/// out, so files already published are kept. A branch missing on the remote
/// leaves the clone as it is. Diverged history is left alone and logged;
/// the push then decides.
pub fn sync_with_remote(
    repo: &Repository,
    url: &str,
    branch: &str,
    username: &str,
    token: &str,
) -> Result<()> {
    let target = format!("refs/heads/{branch}");
    let mut remote = repo.remote_anonymous(url)?;

    let tip = {
        let connection =
            remote.connect_auth(Direction::Fetch, Some(credentials(username, token)), None)?;
        let heads = connection.list()?;
        heads.iter().find(|head| head.name() == target).map(git2::RemoteHead::oid)
    };
    let Some(tip) = tip else {
        log::debug!("{target} does not exist on the remote yet");
        return Ok(());
    };

    let mut options = FetchOptions::new();
    options.remote_callbacks(credentials(username, token));
    remote.fetch(&[target.as_str()], Some(&mut options), None)?;

    match head_commit(repo)? {
        None => {
            log::info!("Checking out {target} at {tip}");
            repo.reference(&target, tip, true, "nbkit: checkout remote branch")?;
            repo.set_head(&target)?;
        },
        Some(local) if local.id() == tip || repo.graph_descendant_of(local.id(), tip)? => {
            return Ok(());
        },
        Some(local) if repo.graph_descendant_of(tip, local.id())? => {
            log::info!("Fast-forwarding to {tip}");
            repo.head()?.set_target(tip, "nbkit: fast-forward")?;
        },
        Some(local) => {
            log::warn!("Local {} and remote {tip} have diverged", local.id());
            return Ok(());
        },
    }

    repo.checkout_head(Some(CheckoutBuilder::new().force()))?;
    Ok(())
}

/// Stage `file_name` (relative to the work tree) and commit it
///
/// Returns `None` without committing when the staged tree equals HEAD's
/// tree, i.e. there is nothing to commit. Any other failure is an error.
pub fn commit_file(
    repo: &Repository,
    file_name: &str,
    message: &str,
    signature: &Signature<'_>,
) -> Result<Option<Oid>> {
    let mut index = repo.index()?;
    index.add_path(Path::new(file_name))?;
    index.write()?;
    let tree_id = index.write_tree()?;

    let parent = head_commit(repo)?;
    if parent.as_ref().is_some_and(|commit| commit.tree_id() == tree_id) {
        log::info!("Nothing to commit for {file_name}");
        return Ok(None);
    }

    let tree = repo.find_tree(tree_id)?;
    let parents: Vec<&Commit<'_>> = parent.iter().collect();
    let oid = repo.commit(Some("HEAD"), signature, signature, message, &tree, &parents)?;
    log::debug!("Created commit {oid}");
    Ok(Some(oid))
}

/// Push `refspec` to `url`, authenticating with `token`
///
/// A reference refused by the remote is an error.
pub fn push(repo: &Repository, url: &str, refspec: &str, username: &str, token: &str) -> Result<()> {
    let mut remote = repo.remote_anonymous(url)?;
    let mut rejection: Option<(String, String)> = None;

    {
        let mut callbacks = credentials(username, token);
        callbacks.push_update_reference(|refname, status| {
            if let Some(reason) = status {
                rejection = Some((refname.to_string(), reason.to_string()));
            }
            Ok(())
        });

        let mut options = PushOptions::new();
        options.remote_callbacks(callbacks);

        log::debug!("Pushing {refspec}");
        remote.push(&[refspec], Some(&mut options))?;
    }

    if let Some((refname, reason)) = rejection {
        return Err(Error::PushRejected { refname, reason });
    }
    Ok(())
}

/// Callbacks offering the token once; a second request means the remote
/// rejected it
fn credentials<'a>(username: &'a str, token: &'a str) -> RemoteCallbacks<'a> {
    let mut attempts = 0_u32;
    let mut callbacks = RemoteCallbacks::new();
    callbacks.credentials(move |_url, username_from_url, _allowed| {
        attempts += 1;
        if attempts > 1 {
            return Err(git2::Error::from_str("authentication rejected"));
        }
        Cred::userpass_plaintext(username_from_url.unwrap_or(username), token)
    });
    callbacks
}
