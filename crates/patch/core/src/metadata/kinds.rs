//! Enumerations used to key metadata overrides.
use bitflags::bitflags;

bitflags! {
    /// Situations in which an object override applies.
    ///
    /// An entry applies to a query when its flags contain the queried
    /// context, so one entry may cover several situations at once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ObjectContext: u8 {
        /// Object placed in the world.
        const WORLD     = 1 << 0;
        /// Object held in an inventory.
        const INVENTORY = 1 << 1;
        const ANY       = Self::WORLD.bits() | Self::INVENTORY.bits();
    }
}

impl Default for ObjectContext {
    fn default() -> Self {
        Self::ANY
    }
}

/// Sprite sheet an object's sprite index refers to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ObjectSpriteSheet {
    /// Regular objects (`Maps/springobjects`).
    #[default]
    Object,
    /// Big craftables (`TileSheets/Craftables`).
    BigCraftable,
}

/// Kind of lookup target.
///
/// `Display` yields the key prefix used by character override IDs
/// (`"Villager::Abigail"`, `"Monster"`).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum TargetType {
    #[default]
    Unknown,
    Object,
    InventoryItem,
    Crop,
    Tree,
    FruitTree,
    Bush,
    Tile,
    /// Generic NPC, for overrides that apply to any character kind.
    #[strum(serialize = "NPC")]
    Npc,
    Villager,
    Pet,
    Monster,
    FarmAnimal,
    Farmer,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn context_containment() {
        assert!(ObjectContext::ANY.contains(ObjectContext::WORLD));
        assert!(ObjectContext::ANY.contains(ObjectContext::INVENTORY));
        assert!(!ObjectContext::INVENTORY.contains(ObjectContext::WORLD));
        assert_eq!(ObjectContext::default(), ObjectContext::all());
    }

    #[test]
    fn target_type_keys() {
        assert_eq!(TargetType::Villager.to_string(), "Villager");
        assert_eq!(TargetType::Npc.to_string(), "NPC");
        assert_eq!(TargetType::from_str("farmanimal"), Ok(TargetType::FarmAnimal));
        assert_eq!(TargetType::from_str("npc"), Ok(TargetType::Npc));
    }

    #[test]
    fn sprite_sheet_parses() {
        assert_eq!(
            ObjectSpriteSheet::from_str("bigcraftable"),
            Ok(ObjectSpriteSheet::BigCraftable)
        );
    }
}
