//! Data-driven content for the patch layer.
//!
//! This crate provides loaders for the RON/TOML data files of a content pack:
//! - Pack configuration (data-driven via TOML)
//! - Token definitions, immutable and context-backed (data-driven via TOML)
//! - Metadata override tables (data-driven via RON)
//!
//! All loaders deserialize straight into patch-core types with serde.

pub mod loaders;

pub use loaders::{
    ContentFactory, DynamicTokenDefinition, LoadResult, MetadataLoader, PatchConfig,
    PatchConfigLoader, TokenDefinition, TokenFile, TokenLoader,
};
