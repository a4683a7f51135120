//! Display overrides that aren't available from the game data directly.
//!
//! [`Metadata`] holds three flat tables loaded once per content reload. Each
//! lookup is a linear scan returning the first matching entry, so array order
//! is priority order. A miss is `None` and means "use the game's default".
mod data;
mod kinds;
mod subject;

pub use data::{AdventureGuildQuestData, CharacterData, ObjectData};
pub use kinds::{ObjectContext, ObjectSpriteSheet, TargetType};
pub use subject::{CharacterSubject, ItemSubject, ObjectRef};

/// Override tables for objects, characters and adventure guild quests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Overrides for objects (inventory items, placed objects, big craftables).
    #[cfg_attr(feature = "serde", serde(default))]
    pub objects: Vec<ObjectData>,

    /// Overrides for NPCs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<CharacterData>,

    /// Adventurer's Guild monster eradication goals.
    #[cfg_attr(feature = "serde", serde(default))]
    pub adventure_guild_quests: Vec<AdventureGuildQuestData>,
}

impl Metadata {
    pub fn new(
        objects: Vec<ObjectData>,
        characters: Vec<CharacterData>,
        adventure_guild_quests: Vec<AdventureGuildQuestData>,
    ) -> Self {
        Self {
            objects,
            characters,
            adventure_guild_quests,
        }
    }

    /// Returns true if no table has any entry.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
            && self.characters.is_empty()
            && self.adventure_guild_quests.is_empty()
    }

    /// Override for an item in the given context.
    pub fn object<I>(&self, item: &I, context: ObjectContext) -> Option<&ObjectData>
    where
        I: ItemSubject + ?Sized,
    {
        let sheet = if item.is_big_craftable() {
            ObjectSpriteSheet::BigCraftable
        } else {
            ObjectSpriteSheet::Object
        };
        let sprite_index = item.sprite_index();

        self.objects
            .iter()
            .find(|entry| entry.matches(sheet, sprite_index, context))
    }

    /// Override for a character, preferring a name-specific entry over a
    /// type-wide one.
    pub fn character<C>(&self, character: &C, target: TargetType) -> Option<&CharacterData>
    where
        C: CharacterSubject + ?Sized,
    {
        character_keys(character.name(), target)
            .iter()
            .find_map(|key| self.characters.iter().find(|entry| entry.id == *key))
    }

    /// Adventure guild goal that counts kills of this monster.
    pub fn adventure_guild_quest(&self, monster: &str) -> Option<&AdventureGuildQuestData> {
        self.adventure_guild_quests
            .iter()
            .find(|quest| quest.targets_monster(monster))
    }
}

/// Character override IDs to try, highest priority first.
pub fn character_keys(name: &str, target: TargetType) -> [String; 2] {
    [format!("{target}::{name}"), target.to_string()]
}

/// Lookups over a possibly absent index.
///
/// An absent index answers every query with `None`, the same as an index
/// with no matching entry.
pub trait MetadataLookup<'a> {
    fn object<I>(self, item: &I, context: ObjectContext) -> Option<&'a ObjectData>
    where
        I: ItemSubject + ?Sized;

    fn character<C>(self, character: &C, target: TargetType) -> Option<&'a CharacterData>
    where
        C: CharacterSubject + ?Sized;

    fn adventure_guild_quest(self, monster: &str) -> Option<&'a AdventureGuildQuestData>;
}

impl<'a> MetadataLookup<'a> for Option<&'a Metadata> {
    fn object<I>(self, item: &I, context: ObjectContext) -> Option<&'a ObjectData>
    where
        I: ItemSubject + ?Sized,
    {
        self?.object(item, context)
    }

    fn character<C>(self, character: &C, target: TargetType) -> Option<&'a CharacterData>
    where
        C: CharacterSubject + ?Sized,
    {
        self?.character(character, target)
    }

    fn adventure_guild_quest(self, monster: &str) -> Option<&'a AdventureGuildQuestData> {
        self?.adventure_guild_quest(monster)
    }
}
