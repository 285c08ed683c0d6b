//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "selectfy";
const APPLICATION: &str = "selectfy";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/selectfy` or `~/.config/selectfy`
/// - macOS: `~/Library/Application Support/dev.selectfy.selectfy`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory, where logs live.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the path to the log file of the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

const LATEST_LOG: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "selectfy_";

/// Archive the previous run's log and prune archives beyond `keep`.
pub fn rotate_logs(keep: usize) {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache, keep);
    }
}

fn rotate_logs_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{ARCHIVE_PREFIX}{stamp}.log")));
    }
    prune_archives(dir, keep);
}

/// Archived logs in `dir`, newest first.
fn archived_logs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut archived: Vec<(Option<SystemTime>, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log")
        })
        .map(|e| (e.metadata().and_then(|m| m.modified()).ok(), e.path()))
        .collect();
    archived.sort_by(|a, b| b.0.cmp(&a.0));
    archived.into_iter().map(|(_, path)| path).collect()
}

fn prune_archives(dir: &Path, keep: usize) {
    for path in archived_logs(dir).into_iter().skip(keep) {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LATEST_LOG), "old run").unwrap();

        rotate_logs_in(dir.path(), 5);

        assert!(!dir.path().join(LATEST_LOG).exists());
        assert_eq!(archived_logs(dir.path()).len(), 1);
    }

    #[test]
    fn test_prune_keeps_limit_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..8 {
            fs::write(dir.path().join(format!("{ARCHIVE_PREFIX}2020_{i:02}.log")), "").unwrap();
        }
        fs::write(dir.path().join("other.log"), "").unwrap();

        prune_archives(dir.path(), 3);

        assert_eq!(archived_logs(dir.path()).len(), 3);
        assert!(dir.path().join("other.log").exists());
    }

    #[test]
    fn test_keep_zero_removes_every_archive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LATEST_LOG), "").unwrap();

        rotate_logs_in(dir.path(), 0);

        assert!(archived_logs(dir.path()).is_empty());
    }
}
