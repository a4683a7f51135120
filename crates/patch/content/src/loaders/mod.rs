//! Content loaders for reading pack data from files.
//!
//! Each loader turns one RON/TOML file into patch-core types;
//! [`ContentFactory`] ties them to a data directory.

pub mod config;
pub mod factory;
pub mod metadata;
pub mod tokens;

pub use config::{PatchConfig, PatchConfigLoader};
pub use factory::ContentFactory;
pub use metadata::MetadataLoader;
pub use tokens::{DynamicTokenDefinition, TokenDefinition, TokenFile, TokenLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
