//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to load and serve a content pack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding `patch.toml`, token definitions and metadata tables.
    pub data_dir: PathBuf,
}

impl RuntimeConfig {
    pub const DATA_DIR_ENV: &'static str = "PATCH_DATA_DIR";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `PATCH_DATA_DIR`: data directory, defaulting to [`default_data_dir`]
    pub fn from_env() -> Self {
        let data_dir = env::var_os(Self::DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        Self { data_dir }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

/// Get the platform-specific data directory for content packs
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/content-patch`
/// - Linux: `~/.local/share/content-patch` (or `$XDG_DATA_HOME/content-patch`)
/// - Windows: `%APPDATA%\content-patch`
/// - Fallback: `./data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "content-patch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_data_dir() {
        let config = RuntimeConfig::new("/srv/packs/example");
        assert_eq!(config.data_dir, PathBuf::from("/srv/packs/example"));
    }
}
