//! Path helpers for config and input file arguments

use std::path::{Path, PathBuf};

/// Expand `~` and make relative paths absolute against the working directory.
///
/// Paths are not canonicalised, so `..` components are kept and the target
/// does not have to exist.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();

    let expanded = match path {
        "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => match path.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map(|home| home.join(rest))
                .unwrap_or_else(|| PathBuf::from(path)),
            None => PathBuf::from(path),
        },
    };

    absolutize(&expanded)
}

/// Whether a command-line input argument refers to standard input
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
