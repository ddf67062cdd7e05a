//! XDG Base Directory paths for lumen.
//!
//! The server keeps its config file and its data files (progress snapshot,
//! reference content) under XDG paths for cross-platform consistency.

use std::path::PathBuf;

/// Get the lumen config directory.
///
/// Returns `$XDG_CONFIG_HOME/lumen` if set, otherwise `~/.config/lumen`.
/// This is where `config.toml` lives.
///
/// # Examples
///
/// ```
/// use lumen_paths::config_dir;
///
/// let config = config_dir().join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("lumen")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/lumen")
    } else {
        PathBuf::from(".config/lumen")
    }
}

/// Get the lumen data directory.
///
/// Returns `$XDG_DATA_HOME/lumen` if set, otherwise `~/.local/share/lumen`.
/// This is where the progress snapshot lives; the reference content files
/// sit in [`content_dir`] beneath it.
///
/// # Examples
///
/// ```
/// use lumen_paths::data_dir;
///
/// let snapshot = data_dir().join("progress.json");
/// ```
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("lumen")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share/lumen")
    } else {
        PathBuf::from(".local/share/lumen")
    }
}

/// Get the lumen reference content directory.
///
/// The default home of `concepts.json` and `scientists.json`: `content/`
/// under [`data_dir`]. The serve command falls back here when neither a
/// `--content-dir` flag nor a `[content]` config section names a directory.
///
/// # Examples
///
/// ```
/// use lumen_paths::content_dir;
///
/// let concepts = content_dir().join("concepts.json");
/// ```
pub fn content_dir() -> PathBuf {
    data_dir().join("content")
}
