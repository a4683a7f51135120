//! Token definition loader.
//!
//! File format:
//! ```toml
//! [[tokens]]
//! name = "Language"
//! values = ["en"]
//! allowed_values = ["en", "fr", "de"]
//!
//! [[dynamic]]
//! name = "Season"
//! key = "season"
//! allowed_values = ["spring", "summer", "fall", "winter"]
//! multiple = false
//! ```

use std::path::Path;

use patch_core::{DynamicValueProvider, InvariantSet, Token, TokenRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Immutable token declared by a content pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDefinition {
    pub name: String,
    #[serde(default)]
    pub values: InvariantSet,
    #[serde(default)]
    pub allowed_values: Option<InvariantSet>,
    /// Omit to derive from the number of values.
    #[serde(default)]
    pub multiple: Option<bool>,
}

/// Token whose values are read from a game-state key at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicTokenDefinition {
    pub name: String,
    pub key: String,
    #[serde(default)]
    pub allowed_values: Option<InvariantSet>,
    #[serde(default = "default_multiple")]
    pub multiple: bool,
}

fn default_multiple() -> bool {
    true
}

/// Token file structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenFile {
    #[serde(default)]
    pub tokens: Vec<TokenDefinition>,
    #[serde(default)]
    pub dynamic: Vec<DynamicTokenDefinition>,
}

impl TokenFile {
    /// Builds a registry, rejecting the first invalid definition.
    pub fn into_registry(self) -> LoadResult<TokenRegistry> {
        let mut registry = TokenRegistry::new();

        for def in self.tokens {
            let name = def.name.clone();
            registry
                .add_immutable(def.name, def.values, def.allowed_values, def.multiple)
                .map_err(|e| anyhow::anyhow!("Invalid token '{}': {}", name, e))?;
        }

        for def in self.dynamic {
            let name = def.name.clone();
            let mut provider = DynamicValueProvider::from_context_key(def.name, def.key)
                .map_err(|e| anyhow::anyhow!("Invalid token '{}': {}", name, e))?
                .with_multiple_values(def.multiple);
            if let Some(allowed) = def.allowed_values {
                provider = provider.with_allowed_values(allowed);
            }
            registry
                .register(Token::new(provider))
                .map_err(|e| anyhow::anyhow!("Invalid token '{}': {}", name, e))?;
        }

        Ok(registry)
    }
}

/// Loader for token definitions from TOML files.
pub struct TokenLoader;

impl TokenLoader {
    /// Load token definitions and build a registry from them.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, and on any definition the
    /// registry rejects (values outside `allowed_values`, duplicate names).
    pub fn load(path: &Path) -> LoadResult<TokenRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<TokenRegistry> {
        let file: TokenFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse token TOML: {}", e))?;
        file.into_registry()
    }
}

#[cfg(test)]
mod tests {
    use patch_core::{EmptyContext, MapContext};

    use super::*;

    const TOKENS: &str = r#"
        [[tokens]]
        name = "Language"
        values = ["en"]
        allowed_values = ["en", "fr"]

        [[tokens]]
        name = "Festivals"
        values = ["Egg Festival", "Luau"]

        [[dynamic]]
        name = "Season"
        key = "season"
        allowed_values = ["spring", "summer", "fall", "winter"]
        multiple = false
    "#;

    #[test]
    fn builds_registry() {
        let registry = TokenLoader::parse(TOKENS).unwrap();
        assert_eq!(registry.len(), 3);

        let language = registry.get("language").unwrap();
        assert!(!language.is_mutable());
        assert!(!language.can_have_multiple_values());
        assert!(language.values(&EmptyContext).contains("EN"));

        let festivals = registry.get("Festivals").unwrap();
        assert!(festivals.can_have_multiple_values());

        let season = registry.get("Season").unwrap();
        assert!(season.is_mutable());
        assert!(!season.can_have_multiple_values());
        assert!(
            season
                .values(&MapContext::new().with("season", "fall"))
                .contains("fall")
        );
    }

    #[test]
    fn rejects_values_outside_allowed_set() {
        let err = TokenLoader::parse(
            r#"
            [[tokens]]
            name = "Language"
            values = ["xx"]
            allowed_values = ["en"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Language"));
    }

    #[test]
    fn rejects_duplicates_across_kinds() {
        let err = TokenLoader::parse(
            r#"
            [[tokens]]
            name = "Season"
            values = ["spring"]

            [[dynamic]]
            name = "season"
            key = "season"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn empty_file_is_empty_registry() {
        assert!(TokenLoader::parse("").unwrap().is_empty());
    }
}
