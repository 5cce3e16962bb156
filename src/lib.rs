//! Keeps local clones of GitHub repositories in step with their remotes.
//!
//! This crate backs two command line tools:
//! - `clone-github` lists a user's repositories through the GitHub API and
//!   clones every one missing from the project directory
//! - `pull-all` scans a directory's immediate children and runs `git pull`
//!   in each working copy that has an `origin` remote

pub mod cli;
pub mod config;
pub mod constants;
pub mod fetch;
pub mod git;
pub mod git_config;
pub mod github;
pub mod output;
pub mod repo;
