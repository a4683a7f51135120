//! Content factory for loading a pack from its data directory.

use std::path::{Path, PathBuf};

use patch_core::{Metadata, TokenRegistry};

use crate::loaders::{LoadResult, MetadataLoader, PatchConfig, PatchConfigLoader, TokenLoader};

/// Content factory that loads all pack content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── patch.toml      (optional)
/// ├── tokens.toml     (optional)
/// └── metadata.ron    (optional)
/// ```
///
/// File names other than `patch.toml` can be changed in the config.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "patch.toml";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load pack configuration from `patch.toml`, or defaults if absent.
    pub fn load_config(&self) -> LoadResult<PatchConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(PatchConfig::default());
        }
        PatchConfigLoader::load(&path)
    }

    /// Load token definitions named by the config.
    ///
    /// A missing file yields an empty registry.
    pub fn load_tokens(&self, config: &PatchConfig) -> LoadResult<TokenRegistry> {
        let path = self.data_dir.join(&config.tokens_file);
        if !path.exists() {
            return Ok(TokenRegistry::new());
        }
        TokenLoader::load(&path)
    }

    /// Load metadata tables named by the config.
    ///
    /// A missing file yields `None`, which lookups treat as "no overrides".
    pub fn load_metadata(&self, config: &PatchConfig) -> LoadResult<Option<Metadata>> {
        let path = self.data_dir.join(&config.metadata_file);
        if !path.exists() {
            return Ok(None);
        }
        MetadataLoader::load(&path).map(Some)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
