//! Evaluation context supplied by the host game.
use std::collections::BTreeMap;

/// Read-only view of game state that dynamic providers consult.
///
/// Immutable providers ignore the context entirely.
pub trait TokenContext {
    /// Whether a save is loaded and world state can be queried.
    fn is_world_ready(&self) -> bool;

    /// Raw game-state value by key (case-insensitive), if known.
    fn value(&self, key: &str) -> Option<&str>;
}

/// Context with no world loaded and no values.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyContext;

impl TokenContext for EmptyContext {
    fn is_world_ready(&self) -> bool {
        false
    }

    fn value(&self, _key: &str) -> Option<&str> {
        None
    }
}

/// In-memory context backed by a key/value map.
#[derive(Clone, Debug)]
pub struct MapContext {
    world_ready: bool,
    values: BTreeMap<String, String>,
}

impl MapContext {
    /// Creates a ready context with no values.
    pub fn new() -> Self {
        Self {
            world_ready: true,
            values: BTreeMap::new(),
        }
    }

    /// Adds a value (builder pattern).
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets world readiness (builder pattern).
    #[must_use]
    pub fn with_world_ready(mut self, ready: bool) -> Self {
        self.world_ready = ready;
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_lowercase(), value.into());
    }

    pub fn set_world_ready(&mut self, ready: bool) {
        self.world_ready = ready;
    }
}

impl Default for MapContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenContext for MapContext {
    fn is_world_ready(&self) -> bool {
        self.world_ready
    }

    fn value(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_context_keys_ignore_case() {
        let ctx = MapContext::new().with("Season", "spring");
        assert_eq!(ctx.value("season"), Some("spring"));
        assert_eq!(ctx.value("SEASON"), Some("spring"));
        assert_eq!(ctx.value("weather"), None);
        assert!(ctx.is_world_ready());
    }

    #[test]
    fn empty_context_is_not_ready() {
        assert!(!EmptyContext.is_world_ready());
        assert_eq!(EmptyContext.value("anything"), None);
    }
}
