//! Atomically published content snapshot.
//!
//! Readers load an `Arc<ContentSnapshot>` and resolve against it; a reload
//! builds a complete replacement and swaps it in with one store. A reader
//! that loaded before the swap keeps the old snapshot alive until it drops
//! it, so no query ever mixes tables from two loads.
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use patch_core::{
    AdventureGuildQuestData, CharacterData, CharacterSubject, ItemSubject, ObjectContext,
    ObjectData, TargetType,
};

use crate::snapshot::ContentSnapshot;

/// Shared, lock-free holder of the current snapshot.
#[derive(Debug, Default)]
pub struct ContentStore {
    current: ArcSwapOption<ContentSnapshot>,
}

impl ContentStore {
    /// Creates a store with nothing published.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, if any content has been loaded.
    pub fn snapshot(&self) -> Option<Arc<ContentSnapshot>> {
        self.current.load_full()
    }

    /// Replaces the current snapshot, returning the previous one.
    pub fn publish(&self, snapshot: Arc<ContentSnapshot>) -> Option<Arc<ContentSnapshot>> {
        self.current.swap(Some(snapshot))
    }

    /// Version of the current snapshot, `0` when empty.
    pub fn version(&self) -> u64 {
        self.current
            .load()
            .as_deref()
            .map_or(0, ContentSnapshot::version)
    }

    pub fn object<I>(&self, item: &I, context: ObjectContext) -> Option<ObjectData>
    where
        I: ItemSubject + ?Sized,
    {
        let guard = self.current.load();
        guard.as_deref()?.object(item, context).cloned()
    }

    pub fn character<C>(&self, character: &C, target: TargetType) -> Option<CharacterData>
    where
        C: CharacterSubject + ?Sized,
    {
        let guard = self.current.load();
        guard.as_deref()?.character(character, target).cloned()
    }

    pub fn adventure_guild_quest(&self, monster: &str) -> Option<AdventureGuildQuestData> {
        let guard = self.current.load();
        guard.as_deref()?.adventure_guild_quest(monster).cloned()
    }
}

#[cfg(test)]
mod tests {
    use patch_content::PatchConfig;
    use patch_core::{Metadata, ObjectRef, TokenRegistry};

    use super::*;

    fn snapshot(version: u64, name: &str) -> Arc<ContentSnapshot> {
        let metadata = Metadata::new(
            vec![ObjectData::new(Default::default(), [1], ObjectContext::ANY).with_name(name)],
            vec![CharacterData::new("Villager").with_name(name)],
            Vec::new(),
        );
        Arc::new(ContentSnapshot::new(
            version,
            PatchConfig::default(),
            TokenRegistry::new(),
            Some(metadata),
        ))
    }

    #[test]
    fn empty_store_misses() {
        let store = ContentStore::new();
        assert_eq!(store.version(), 0);
        assert!(store.snapshot().is_none());
        assert!(store.object(&ObjectRef::object(1), ObjectContext::ANY).is_none());
        assert!(store.character("Abigail", TargetType::Villager).is_none());
        assert!(store.adventure_guild_quest("Bat").is_none());
    }

    #[test]
    fn publish_replaces_whole_snapshot() {
        let store = ContentStore::new();
        assert!(store.publish(snapshot(1, "old")).is_none());

        let pinned = store.snapshot().unwrap();
        let previous = store.publish(snapshot(2, "new")).unwrap();
        assert_eq!(previous.version(), 1);
        assert_eq!(store.version(), 2);

        // The pinned reader still sees a consistent old pairing.
        let old_object = pinned.object(&ObjectRef::object(1), ObjectContext::ANY).unwrap();
        let old_character = pinned.character("Abigail", TargetType::Villager).unwrap();
        assert_eq!(old_object.name.as_deref(), Some("old"));
        assert_eq!(old_character.name.as_deref(), Some("old"));

        let new_object = store.object(&ObjectRef::object(1), ObjectContext::ANY).unwrap();
        let new_character = store.character("Abigail", TargetType::Villager).unwrap();
        assert_eq!(new_object.name.as_deref(), Some("new"));
        assert_eq!(new_character.name.as_deref(), Some("new"));
    }
}
