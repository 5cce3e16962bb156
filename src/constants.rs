//! Application-wide constants.
//!
//! Centralized configuration values to avoid magic strings throughout the codebase.

/// Git directory name used to detect repositories.
pub const GIT_DIR: &str = ".git";

/// Name of the config file inside the git directory.
pub const GIT_CONFIG_FILE: &str = "config";

/// Section identifier that marks a working copy as having an `origin` remote.
pub const ORIGIN_SECTION: &str = "remote \"origin\"";

/// Base URL of the GitHub REST API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Host used to build SSH clone URLs.
pub const GITHUB_HOST: &str = "github.com";

/// Media type pinning the v3 REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// GitHub rejects API requests without a user agent.
pub const USER_AGENT: &str = concat!("repo-sync/", env!("CARGO_PKG_VERSION"));

/// Account whose repositories are cloned when `--github-user` is not given.
pub const DEFAULT_GITHUB_USER: &str = "tammycravit";

/// Directory under `$HOME` holding local clones.
pub const PROJECTS_SUBDIR: &str = "projects";

/// Environment variable naming the directory `pull-all` scans.
pub const PROJECTS_DIR_ENV: &str = "PROJECTS_DIR";

/// Body `message` returned by the user lookup endpoint for unknown accounts.
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Spinner tick interval in milliseconds.
pub const PROGRESS_TICK_MS: u64 = 80;

/// Default name used when a repository name cannot be determined from its path.
pub const DEFAULT_REPO_NAME: &str = "repository";
