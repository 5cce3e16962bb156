//! Command line arguments for both binaries.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Clone all of your GitHub repos into a project directory.
#[derive(Debug, Parser)]
#[command(name = "clone-github", version, about)]
pub struct CloneGithubArgs {
    /// GitHub account whose repositories are cloned
    #[arg(long, value_name = "USER", env = "GITHUB_USER")]
    pub github_user: Option<String>,

    /// Directory the clones go into (defaults to $HOME/projects, then the current directory)
    #[arg(long, value_name = "DIR", value_parser = parse_existing_dir)]
    pub project_dir: Option<PathBuf>,

    /// Only print the summary line
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Echo every git command
    #[arg(short, long)]
    pub verbose: bool,
}

impl CloneGithubArgs {
    #[must_use]
    pub fn config(&self) -> Config {
        Config::from_flags(self.quiet, self.verbose)
    }
}

/// Run `git pull` in every repository directly under a directory.
#[derive(Debug, Parser)]
#[command(name = "pull-all", version, about)]
pub struct PullAllArgs {
    /// Directory to scan (defaults to $PROJECTS_DIR, then the current directory)
    #[arg(value_name = "START_DIR")]
    pub start_dir: Option<PathBuf>,

    /// Suppress banners and pull output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Echo every git command
    #[arg(short, long)]
    pub verbose: bool,
}

impl PullAllArgs {
    #[must_use]
    pub fn config(&self) -> Config {
        Config::from_flags(self.quiet, self.verbose)
    }
}

/// Accepts only paths that already exist as directories.
pub fn parse_existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("project directory {} does not exist", value))
    }
}
