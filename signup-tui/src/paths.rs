//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "signup";
const APPLICATION: &str = "signup-form";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/signup-form` or `~/.cache/signup-form`
/// - macOS: `~/Library/Caches/dev.signup.signup-form`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/signup-form` or `~/.config/signup-form`
/// - macOS: `~/Library/Application Support/dev.signup.signup-form`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rotate logs: rename latest.log to timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache);
}

pub(crate) fn rotate_logs_in(cache: &Path) {
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(cache, MAX_OLD_LOGS);
}

/// Remove old log files, keeping only the most recent `keep`.
fn cleanup_old_logs(cache_dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(cache_dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first; ties broken by name, which embeds the timestamp.
    logs.sort_by_key(|e| (e.metadata().and_then(|m| m.modified()).ok(), e.file_name()));

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}
