//! Pack configuration loader.

use std::collections::BTreeMap;
use std::path::Path;

use patch_core::MapContext;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Pack-level settings read from `patch.toml`.
///
/// Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Metadata tables, relative to the data directory.
    pub metadata_file: String,
    /// Token definitions, relative to the data directory.
    pub tokens_file: String,
    /// Whether the sample context below counts as a loaded world.
    pub world_ready: bool,
    /// Sample game-state values used when previewing tokens offline.
    pub context: BTreeMap<String, String>,
}

impl PatchConfig {
    pub const DEFAULT_METADATA_FILE: &'static str = "metadata.ron";
    pub const DEFAULT_TOKENS_FILE: &'static str = "tokens.toml";

    /// Builds the preview context described by this config.
    pub fn preview_context(&self) -> MapContext {
        self.context
            .iter()
            .fold(MapContext::new(), |ctx, (key, value)| ctx.with(key, value.as_str()))
            .with_world_ready(self.world_ready)
    }
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            metadata_file: Self::DEFAULT_METADATA_FILE.to_owned(),
            tokens_file: Self::DEFAULT_TOKENS_FILE.to_owned(),
            world_ready: true,
            context: BTreeMap::new(),
        }
    }
}

/// Loader for pack configuration from TOML files.
pub struct PatchConfigLoader;

impl PatchConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<PatchConfig> {
        let content = read_file(path)?;
        let config: PatchConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse patch config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use patch_core::TokenContext;

    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: PatchConfig = toml::from_str("").unwrap();
        assert_eq!(config, PatchConfig::default());
        assert_eq!(config.metadata_file, "metadata.ron");
    }

    #[test]
    fn preview_context_from_table() {
        let config: PatchConfig = toml::from_str(
            r#"
            tokens_file = "custom.toml"
            world_ready = false

            [context]
            Season = "winter"
            "#,
        )
        .unwrap();

        assert_eq!(config.tokens_file, "custom.toml");
        let ctx = config.preview_context();
        assert!(!ctx.is_world_ready());
        assert_eq!(ctx.value("season"), Some("winter"));
    }
}
