//! Path utilities for the data directory and user-supplied paths.
//!
//! The data directory holds the trace file. User-supplied paths (seed file,
//! theme file) may start with `~`, which is expanded to the home directory.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the platform data directory for docshelf.
///
/// Uses the platform convention (`~/.local/share/docshelf` on Linux). When no
/// home directory can be determined, falls back to `.docshelf` in the current
/// directory.
///
/// # Examples
///
/// ```
/// use docshelf::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.to_string_lossy().contains("docshelf"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    ProjectDirs::from("com", "docshelf", "docshelf")
        .map_or_else(|| PathBuf::from(".docshelf"), |dirs| dirs.data_dir().to_path_buf())
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and all paths when no home directory can be
/// determined, are returned unchanged.
///
/// # Examples
///
/// ```
/// use docshelf::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = || BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

    if path == "~" {
        return home().unwrap_or_else(|| PathBuf::from(path));
    }
    match path.strip_prefix("~/") {
        Some(rest) => home().map_or_else(|| PathBuf::from(path), |home| home.join(rest)),
        None => PathBuf::from(path),
    }
}
