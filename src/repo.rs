// Repository detection, pull logic, result types

use crate::constants::GIT_DIR;
use crate::git::{self, GitLogger};
use crate::git_config;
use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullResult {
    pub path: PathBuf,
    /// Output of the pull, unmodified.
    pub output: String,
}

/// `dir/.git` is a directory; a plain file named `.git` does not count.
pub fn is_git_repo(path: &Path) -> bool {
    path.join(GIT_DIR).is_dir()
}

pub fn is_pull_target(path: &Path) -> bool {
    is_git_repo(path) && git_config::has_remote_origin(path)
}

/// Immediate child directories of `path` that have an `origin` remote, sorted by path.
pub fn find_pull_targets(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read directory {}", path.display()))?;

    let mut targets: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir() && is_pull_target(p))
        .collect();
    targets.sort();
    Ok(targets)
}

pub trait Puller {
    fn pull_repo(&self, path: &Path) -> anyhow::Result<String>;
}

/// Pulls through the git CLI.
pub struct GitPuller {
    logger: GitLogger,
}

impl GitPuller {
    pub fn new(logger: GitLogger) -> Self {
        Self { logger }
    }
}

impl Puller for GitPuller {
    fn pull_repo(&self, path: &Path) -> anyhow::Result<String> {
        git::pull(path, self.logger)
    }
}

pub trait PullCallbacks {
    fn on_scan_start(&self, _start: &Path) {}
    fn on_pull_start(&self, _path: &Path) {}
    fn on_pulled(&self, _result: &PullResult) {}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpPullCallbacks;

impl PullCallbacks for NoOpPullCallbacks {}

/// Pulls every pull target directly under `start`.
///
/// There is no per-repository guard: the first failing pull, merge
/// conflicts included, aborts the remaining scan.
pub fn pull_all<C: PullCallbacks + ?Sized>(
    start: &Path,
    puller: &dyn Puller,
    callbacks: &C,
) -> anyhow::Result<Vec<PullResult>> {
    callbacks.on_scan_start(start);

    let mut results = Vec::new();
    for path in find_pull_targets(start)? {
        callbacks.on_pull_start(&path);
        let output = puller.pull_repo(&path)?;
        let result = PullResult { path, output };
        callbacks.on_pulled(&result);
        results.push(result);
    }
    Ok(results)
}
