use clap::Parser;
use repo_sync::cli::PullAllArgs;
use repo_sync::config::resolve_start_dir;
use repo_sync::constants::PROJECTS_DIR_ENV;
use repo_sync::output::ConsolePullCallbacks;
use repo_sync::repo::{self, GitPuller};

fn main() -> anyhow::Result<()> {
    let args = PullAllArgs::parse();
    let config = args.config();

    let cwd = std::env::current_dir()?;
    let start = resolve_start_dir(
        args.start_dir,
        std::env::var(PROJECTS_DIR_ENV).ok(),
        &cwd,
    );

    let puller = GitPuller::new(config.git_logger());
    let callbacks = ConsolePullCallbacks::new(config);
    repo::pull_all(&start, &puller, &callbacks)?;

    Ok(())
}
