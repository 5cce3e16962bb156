use clap::Parser;
use repo_sync::cli::CloneGithubArgs;
use repo_sync::config::default_project_dir;
use repo_sync::constants::DEFAULT_GITHUB_USER;
use repo_sync::fetch::{self, GitCloner, SyncOptions};
use repo_sync::github::GitHubClient;
use repo_sync::output::{self, ConsoleFetchCallbacks};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = CloneGithubArgs::parse();
    let config = args.config();
    let host = GitHubClient::new()?;

    let cwd = std::env::current_dir()?;
    let options = match SyncOptions::resolve(
        args.github_user,
        args.project_dir,
        DEFAULT_GITHUB_USER,
        || default_project_dir(dirs::home_dir().as_deref(), &cwd),
        &host,
    ) {
        Ok(options) => options,
        Err(e) => {
            output::print_error(&e);
            return Ok(ExitCode::FAILURE);
        }
    };
    output::print_fetch_banner(&options, &config);

    let cloner = GitCloner::new(config.git_logger());
    let callbacks = ConsoleFetchCallbacks::new(config);
    let summary = fetch::fetch_all(&host, &cloner, &options, &callbacks)?;
    drop(callbacks);

    output::print_fetch_summary(&summary);
    Ok(ExitCode::SUCCESS)
}
