//! Git command wrappers.
//!
//! This module provides a thin wrapper around git CLI commands,
//! handling command execution and error formatting.

use anyhow::Context;
use colored::Colorize;
use std::path::Path;

/// Callback invoked before every git command runs.
pub type GitLogger = fn(&Path, &[&str]);

/// Echoes the git command line to stderr.
pub fn verbose_logger(dir: &Path, args: &[&str]) {
    eprintln!(
        "  {} {}",
        format!("[{}]", dir.display()).dimmed(),
        format!("git {}", args.join(" ")).dimmed()
    );
}

pub fn no_op_logger(_dir: &Path, _args: &[&str]) {}

fn spawn_git(
    dir: &Path,
    args: &[&str],
    logger: GitLogger,
) -> anyhow::Result<std::process::Output> {
    logger(dir, args);

    let output = std::process::Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .with_context(|| format!("Failed to spawn git command in {}", dir.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git {} failed: {}", args.join(" "), stderr.trim())
    }
    Ok(output)
}

pub fn run_git(dir: &Path, args: &[&str], logger: GitLogger) -> anyhow::Result<String> {
    let output = spawn_git(dir, args, logger)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Like [`run_git`], but keeps git's stderr progress lines ahead of stdout.
pub fn run_git_combined(dir: &Path, args: &[&str], logger: GitLogger) -> anyhow::Result<String> {
    let output = spawn_git(dir, args, logger)?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parts: Vec<&str> = [stderr.trim(), stdout.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    Ok(parts.join("\n"))
}

/// Clones `url` with full history into `dest`.
///
/// The command runs from `dest`'s parent, which must already exist.
pub fn clone(url: &str, dest: &Path, logger: GitLogger) -> anyhow::Result<()> {
    let parent = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let dir_name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Invalid clone destination: {}", dest.display()))?;

    run_git(parent, &["clone", url, dir_name], logger)
        .with_context(|| format!("Failed to clone {}", url))?;
    Ok(())
}

/// Pulls the configured upstream and returns git's own output text,
/// fetch progress included.
pub fn pull(repo: &Path, logger: GitLogger) -> anyhow::Result<String> {
    run_git_combined(repo, &["pull"], logger)
        .with_context(|| format!("Failed to pull {}", repo.display()))
}
