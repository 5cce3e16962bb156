//! Detection of a configured `origin` remote.
//!
//! Git config files share their `[section "subsection"]` layout with INI, so
//! they are read with `rust-ini`. Quote and escape handling is disabled: git
//! values may contain backslashes and quotes that INI escaping would reject.
//! Git also allows a bare key with no `=` (read as `true`); INI does not, so
//! those lines are dropped before parsing.

use crate::constants::{GIT_CONFIG_FILE, GIT_DIR, ORIGIN_SECTION};
use ini::{Ini, ParseOption};
use std::path::Path;

fn parse_options() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

/// Drops valueless keys, the one git config line shape INI rejects.
fn strip_valueless_keys(text: &str) -> String {
    text.lines()
        .filter(|line| {
            let line = line.trim();
            line.is_empty()
                || line.starts_with('[')
                || line.starts_with('#')
                || line.starts_with(';')
                || line.contains('=')
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns true if `text` has a section named exactly `remote "origin"`.
///
/// Text that does not parse is treated as having no remote.
pub fn config_has_remote_origin(text: &str) -> bool {
    match Ini::load_from_str_opt(&strip_valueless_keys(text), parse_options()) {
        Ok(ini) => ini.sections().flatten().any(|name| name == ORIGIN_SECTION),
        Err(_) => false,
    }
}

/// Returns true if `repo_dir/.git/config` exists and declares an `origin` remote.
pub fn has_remote_origin(repo_dir: &Path) -> bool {
    let config_path = repo_dir.join(GIT_DIR).join(GIT_CONFIG_FILE);
    if !config_path.is_file() {
        return false;
    }
    std::fs::read_to_string(&config_path)
        .map(|text| config_has_remote_origin(&text))
        .unwrap_or(false)
}
