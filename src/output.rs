//! Banners, spinners, colored progress lines and summary formatting.
//!
//! Both binaries stream one line per repository as they go. Spinners are
//! shown while a clone or pull runs and are hidden in quiet and verbose
//! modes, where they would interleave with other output.

use crate::config::Config;
use crate::constants::{DEFAULT_REPO_NAME, PROGRESS_TICK_MS};
use crate::fetch::{FetchCallbacks, FetchSummary, SyncOptions};
use crate::repo::{PullCallbacks, PullResult};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::path::Path;
use std::time::Duration;

const BANNER_WIDTH: usize = 76;

fn repo_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_REPO_NAME)
}

/// Frames `title` in a box of asterisks.
pub fn format_banner(title: &str) -> String {
    let border = "*".repeat(BANNER_WIDTH + 4);
    format!("{}\n* {:<width$} *\n{}", border, title, border, width = BANNER_WIDTH)
}

pub fn format_summary(summary: &FetchSummary) -> String {
    format!("Cloned {} of {} repos.", summary.cloned, summary.checked)
}

pub fn print_fetch_banner(options: &SyncOptions, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{}",
        format_banner("Clone all of your github repos into a project directory").cyan()
    );
    println!();
    println!("- Github User: {}", options.github_user.white().bold());
    println!(
        "- Project Dir: {}",
        options.project_dir.display().to_string().white().bold()
    );
    println!();
    println!(
        "{}",
        format!("* Iterating Repos for {}...", options.github_user).dimmed()
    );
}

/// The summary line is printed in every verbosity mode.
pub fn print_fetch_summary(summary: &FetchSummary) {
    println!("{}", format_summary(summary).white().bold());
}

pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), error);
}

fn create_spinner(config: &Config, message: String) -> Option<ProgressBar> {
    if config.is_quiet() || config.is_verbose() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    Some(spinner)
}

/// Console reporting for `clone-github`.
pub struct ConsoleFetchCallbacks {
    config: Config,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleFetchCallbacks {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            spinner: RefCell::new(None),
        }
    }
}

impl FetchCallbacks for ConsoleFetchCallbacks {
    fn on_listed(&self, count: usize) {
        if self.config.is_quiet() {
            return;
        }
        println!(
            "{}",
            format!("* Checking/cloning {} repos:", count).dimmed()
        );
    }

    fn on_skip(&self, name: &str, _path: &Path) {
        if self.config.is_quiet() {
            return;
        }
        println!(
            "    - Found repo clone for {} - {}",
            name.white(),
            "skipping".yellow()
        );
    }

    fn on_clone_start(&self, name: &str, _path: &Path) {
        if self.config.is_quiet() {
            return;
        }
        println!("    - {} {}", "Cloning".green(), name.white().bold());
        *self.spinner.borrow_mut() = create_spinner(&self.config, format!("cloning {}...", name));
    }

    fn on_cloned(&self, _name: &str, _path: &Path) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for ConsoleFetchCallbacks {
    fn drop(&mut self) {
        // a failed clone leaves its spinner running
        if let Some(spinner) = self.spinner.get_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

/// Console reporting for `pull-all`.
pub struct ConsolePullCallbacks {
    config: Config,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsolePullCallbacks {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            spinner: RefCell::new(None),
        }
    }
}

impl PullCallbacks for ConsolePullCallbacks {
    fn on_scan_start(&self, start: &Path) {
        if self.config.is_quiet() {
            return;
        }
        println!("*** Looking for git repos in {}...", start.display());
    }

    fn on_pull_start(&self, path: &Path) {
        if self.config.is_verbose() {
            eprintln!("\n{}", format!("[{}]", repo_name(path)).white().bold());
        }
        *self.spinner.borrow_mut() =
            create_spinner(&self.config, format!("pulling {}...", repo_name(path)));
    }

    fn on_pulled(&self, result: &PullResult) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
        if self.config.is_quiet() {
            return;
        }
        println!("{}", result.output);
    }
}

impl Drop for ConsolePullCallbacks {
    fn drop(&mut self) {
        if let Some(spinner) = self.spinner.get_mut().take() {
            spinner.finish_and_clear();
        }
    }
}
