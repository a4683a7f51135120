//! Override entries as loaded from the metadata tables.
use std::collections::BTreeSet;

use super::kinds::{ObjectContext, ObjectSpriteSheet};

/// Display overrides for a game object.
///
/// Matches items on the given sheet whose sprite index is listed, in any of
/// the declared contexts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub context: ObjectContext,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sprite_sheet: ObjectSpriteSheet,
    pub sprite_ids: BTreeSet<i32>,

    /// Display name override.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Display type override (e.g. "Resource", "Crafting").
    #[cfg_attr(feature = "serde", serde(default))]
    pub type_name: Option<String>,
    /// Whether inventory-only fields (price, crafting) are shown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub show_inventory_fields: Option<bool>,
}

impl ObjectData {
    pub fn new(
        sprite_sheet: ObjectSpriteSheet,
        sprite_ids: impl IntoIterator<Item = i32>,
        context: ObjectContext,
    ) -> Self {
        Self {
            context,
            sprite_sheet,
            sprite_ids: sprite_ids.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Sets the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this entry applies to the given sheet, sprite and context.
    pub fn matches(
        &self,
        sheet: ObjectSpriteSheet,
        sprite_index: i32,
        context: ObjectContext,
    ) -> bool {
        self.sprite_sheet == sheet
            && self.sprite_ids.contains(&sprite_index)
            && self.context.contains(context)
    }
}

/// Display overrides for an NPC.
///
/// `id` is either `"{type}::{name}"` for one character or `"{type}"` for
/// every character of that type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterData {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub type_name: Option<String>,
}

impl CharacterData {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Adventurer's Guild monster eradication goal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdventureGuildQuestData {
    /// Monster names that count toward the goal.
    pub targets: Vec<String>,
    /// Kills needed to complete the goal.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_kills: u32,
}

impl AdventureGuildQuestData {
    pub fn new<S: Into<String>>(targets: impl IntoIterator<Item = S>, required_kills: u32) -> Self {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            required_kills,
        }
    }

    /// Whether kills of this monster count toward the goal.
    pub fn targets_monster(&self, monster: &str) -> bool {
        self.targets.iter().any(|target| target == monster)
    }
}
