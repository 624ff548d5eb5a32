//! Path utilities: expand ~ and prepare parent directories for output files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolve a user-supplied path, expanding a leading `~/`.
pub fn resolve_path(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Create the parent directory of `path` if it is missing.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}
