// Clone-or-skip decision for every repository a host lists

use crate::constants::{GIT_DIR, GITHUB_HOST};
use crate::git::{self, GitLogger};
use crate::github::RepoHost;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Resolved, validated options for one fetch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub github_user: String,
    pub project_dir: PathBuf,
}

impl SyncOptions {
    /// Applies defaults and validates supplied values before any listing happens.
    ///
    /// Only a user given explicitly is checked against the host; the default
    /// account is trusted.
    pub fn resolve(
        github_user: Option<String>,
        project_dir: Option<PathBuf>,
        default_user: &str,
        default_project_dir: impl FnOnce() -> PathBuf,
        host: &dyn RepoHost,
    ) -> anyhow::Result<Self> {
        let project_dir = match project_dir {
            Some(dir) => {
                if !dir.is_dir() {
                    anyhow::bail!("Project directory {} does not exist", dir.display());
                }
                dir
            }
            None => default_project_dir(),
        };

        let github_user = match github_user {
            Some(user) => {
                let exists = host
                    .user_exists(&user)
                    .with_context(|| format!("Failed to look up GitHub user {}", user))?;
                if !exists {
                    anyhow::bail!("GitHub user {} does not exist", user);
                }
                user
            }
            None => default_user.to_string(),
        };

        Ok(Self {
            github_user,
            project_dir,
        })
    }
}

/// Counters reported at the end of a fetch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub checked: usize,
    pub cloned: usize,
}

impl FetchSummary {
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.checked - self.cloned
    }
}

/// SSH clone URL for `user/name` on GitHub.
pub fn clone_url(user: &str, name: &str) -> String {
    format!("git@{}:{}/{}.git", GITHUB_HOST, user, name)
}

/// A directory counts as cloned when it has a `.git` subdirectory.
///
/// The remote is not checked: a clone of some other repository under the
/// same name is still skipped.
pub fn is_cloned(path: &Path) -> bool {
    path.is_dir() && path.join(GIT_DIR).is_dir()
}

pub trait Cloner {
    fn clone_repo(&self, url: &str, dest: &Path) -> anyhow::Result<()>;
}

/// Clones through the git CLI.
pub struct GitCloner {
    logger: GitLogger,
}

impl GitCloner {
    pub fn new(logger: GitLogger) -> Self {
        Self { logger }
    }
}

impl Cloner for GitCloner {
    fn clone_repo(&self, url: &str, dest: &Path) -> anyhow::Result<()> {
        git::clone(url, dest, self.logger)
    }
}

/// Progress notifications emitted while fetching.
pub trait FetchCallbacks {
    fn on_listed(&self, _count: usize) {}
    fn on_skip(&self, _name: &str, _path: &Path) {}
    fn on_clone_start(&self, _name: &str, _path: &Path) {}
    fn on_cloned(&self, _name: &str, _path: &Path) {}
}

/// Callbacks that ignore every notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpFetchCallbacks;

impl FetchCallbacks for NoOpFetchCallbacks {}

/// Lists the user's repositories and clones each one missing under `project_dir`.
///
/// Repositories are handled in the order the host returns them. The first
/// failed clone aborts the run; the summary is returned only when every
/// repository was handled.
pub fn fetch_all<C: FetchCallbacks + ?Sized>(
    host: &dyn RepoHost,
    cloner: &dyn Cloner,
    options: &SyncOptions,
    callbacks: &C,
) -> anyhow::Result<FetchSummary> {
    let repos = host
        .list_repos(&options.github_user)
        .with_context(|| format!("Failed to list repositories for {}", options.github_user))?;
    callbacks.on_listed(repos.len());

    let mut summary = FetchSummary::default();
    for repo in repos {
        summary.checked += 1;
        let target = options.project_dir.join(&repo.name);

        if is_cloned(&target) {
            callbacks.on_skip(&repo.name, &target);
            continue;
        }

        callbacks.on_clone_start(&repo.name, &target);
        cloner.clone_repo(&clone_url(&options.github_user, &repo.name), &target)?;
        summary.cloned += 1;
        callbacks.on_cloned(&repo.name, &target);
    }

    Ok(summary)
}
