//! Platform path utilities.
//!
//! This module centralizes filesystem locations the application touches: the
//! optional config file and the data directory used for trace output. Paths
//! follow the XDG-style layout under the user's home directory.

use std::path::PathBuf;

/// Returns the user's home directory.
///
/// Resolved from the `HOME` environment variable; falls back to the current
/// directory when it is unset, so the app still runs in stripped-down
/// environments.
#[must_use]
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Returns the data directory for ticklist.
///
/// Located at `~/.local/share/ticklist`. The OTLP trace file lives here.
#[must_use]
pub fn data_dir() -> PathBuf {
    home_dir().join(".local/share/ticklist")
}

/// Returns the path of the optional config file.
///
/// Located at `~/.config/ticklist/config.toml`. The file does not have to
/// exist; defaults apply when it is missing.
#[must_use]
pub fn config_file() -> PathBuf {
    home_dir().join(".config/ticklist/config.toml")
}

/// Expands a leading tilde to the user's home directory.
///
/// Used for the `theme_file` config value so themes can be referenced
/// portably.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}
