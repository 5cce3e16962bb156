//! Test infrastructure for repo-sync integration tests.

#![allow(dead_code)]

use anyhow::Result;
use repo_sync::constants::{GIT_CONFIG_FILE, GIT_DIR};
use repo_sync::fetch::Cloner;
use repo_sync::git::{no_op_logger, run_git};
use repo_sync::github::{RepoHost, RepositoryDescriptor};
use repo_sync::repo::Puller;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    run_git(dir, args, no_op_logger)
}

/// Initializes a repository with one commit on master at `path`.
pub fn init_repo(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    git(path, &["init", "-b", "master"])?;
    git(path, &["config", "user.email", "test@example.com"])?;
    git(path, &["config", "user.name", "Test User"])?;

    std::fs::write(path.join("README.md"), "# Test Repo\n")?;
    git(path, &["add", "README.md"])?;
    git(path, &["commit", "-m", "Initial commit"])?;
    Ok(())
}

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped.
pub struct TestRepo {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl TestRepo {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();
        init_repo(&path)?;
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Creates a test repository tracking a bare `origin`.
    /// Returns the repo and the remote TempDir (must be kept alive).
    pub fn with_remote() -> Result<(Self, TempDir)> {
        let remote_dir = TempDir::new()?;
        git(remote_dir.path(), &["init", "--bare", "-b", "master"])?;

        let local = Self::new()?;
        git(
            &local.path,
            &["remote", "add", "origin", remote_dir.path().to_str().unwrap()],
        )?;
        git(&local.path, &["push", "-u", "origin", "master"])?;

        Ok((local, remote_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Pushes a new commit to `remote` from a throwaway clone.
pub fn push_commit_to(remote: &Path, file: &str) -> Result<()> {
    let scratch = TempDir::new()?;
    let clone = scratch.path().join("clone");
    git(
        scratch.path(),
        &["clone", remote.to_str().unwrap(), clone.to_str().unwrap()],
    )?;
    git(&clone, &["config", "user.email", "test@example.com"])?;
    git(&clone, &["config", "user.name", "Test User"])?;
    std::fs::write(clone.join(file), "upstream change\n")?;
    git(&clone, &["add", file])?;
    git(&clone, &["commit", "-m", "Upstream commit"])?;
    git(&clone, &["push", "origin", "master"])?;
    Ok(())
}

/// Writes a `.git/config` with the given contents, creating `.git` as needed.
pub fn write_git_config(dir: &Path, contents: &str) -> Result<()> {
    let git_dir = dir.join(GIT_DIR);
    std::fs::create_dir_all(&git_dir)?;
    std::fs::write(git_dir.join(GIT_CONFIG_FILE), contents)?;
    Ok(())
}

pub const ORIGIN_CONFIG: &str = "[core]\n\trepositoryformatversion = 0\n\
    [remote \"origin\"]\n\turl = git@github.com:acme/x.git\n\
    \tfetch = +refs/heads/*:refs/remotes/origin/*\n";

pub const CORE_ONLY_CONFIG: &str = "[core]\n\trepositoryformatversion = 0\n\tbare = false\n";

/// Serves a fixed repository list and set of known users.
pub struct FakeHost {
    pub users: Vec<String>,
    pub repos: Vec<RepositoryDescriptor>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new(users: &[&str], repos: &[&str]) -> Self {
        Self {
            users: users.iter().map(|u| u.to_string()).collect(),
            repos: repos.iter().map(|r| RepositoryDescriptor::new(*r)).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl RepoHost for FakeHost {
    fn user_exists(&self, user: &str) -> Result<bool> {
        self.calls.borrow_mut().push(format!("user_exists {}", user));
        Ok(self.users.iter().any(|u| u == user))
    }

    fn list_repos(&self, user: &str) -> Result<Vec<RepositoryDescriptor>> {
        self.calls.borrow_mut().push(format!("list_repos {}", user));
        Ok(self.repos.clone())
    }
}

/// Records clone requests and fakes a clone by creating `dest/.git`.
/// Fails on the repository named `fail_on`, if any.
#[derive(Default)]
pub struct RecordingCloner {
    pub fail_on: Option<String>,
    pub attempted: RefCell<Vec<String>>,
    pub cloned: RefCell<Vec<(String, PathBuf)>>,
}

impl RecordingCloner {
    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn attempted(&self) -> Vec<String> {
        self.attempted.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.cloned.borrow().iter().map(|(u, _)| u.clone()).collect()
    }
}

impl Cloner for RecordingCloner {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        self.attempted.borrow_mut().push(url.to_string());
        if let Some(name) = &self.fail_on {
            if dest.file_name().and_then(|n| n.to_str()) == Some(name.as_str()) {
                anyhow::bail!("git clone {} failed: permission denied", url);
            }
        }
        std::fs::create_dir_all(dest.join(GIT_DIR))?;
        self.cloned
            .borrow_mut()
            .push((url.to_string(), dest.to_path_buf()));
        Ok(())
    }
}

/// Records pull requests and answers with canned output.
#[derive(Default)]
pub struct RecordingPuller {
    pub fail_on: Option<String>,
    pub pulled: RefCell<Vec<PathBuf>>,
}

impl RecordingPuller {
    pub fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            pulled: RefCell::new(Vec::new()),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.pulled
            .borrow()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect()
    }
}

impl Puller for RecordingPuller {
    fn pull_repo(&self, path: &Path) -> Result<String> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if self.fail_on.as_deref() == Some(name) {
            anyhow::bail!("CONFLICT (content): Merge conflict in README.md");
        }
        self.pulled.borrow_mut().push(path.to_path_buf());
        Ok(format!("Updated {}", name))
    }
}
