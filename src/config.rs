//! Configuration types for CLI verbosity and directory resolution.

use crate::constants::PROJECTS_SUBDIR;
use crate::git::{self, GitLogger};
use std::path::{Path, PathBuf};

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Controls the verbosity level of CLI output.
    pub verbosity: Verbosity,
}

impl Config {
    #[must_use]
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        let verbosity = if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Self { verbosity }
    }

    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Returns the appropriate git logger based on verbosity settings.
    #[must_use]
    pub fn git_logger(&self) -> GitLogger {
        if self.is_verbose() {
            git::verbose_logger
        } else {
            git::no_op_logger
        }
    }
}

/// Verbosity level for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// `home/projects` when that directory exists, otherwise `cwd`.
pub fn default_project_dir(home: Option<&Path>, cwd: &Path) -> PathBuf {
    home.map(|h| h.join(PROJECTS_SUBDIR))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| cwd.to_path_buf())
}

/// Picks the directory `pull-all` scans: argument, then `PROJECTS_DIR`, then `cwd`.
pub fn resolve_start_dir(arg: Option<PathBuf>, env_value: Option<String>, cwd: &Path) -> PathBuf {
    arg.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| cwd.to_path_buf())
}
