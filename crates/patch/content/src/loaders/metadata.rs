//! Metadata override table loader.

use std::path::Path;

use patch_core::Metadata;

use crate::loaders::{LoadResult, read_file};

/// Loader for metadata override tables from RON files.
///
/// Example:
/// ```ron
/// (
///     objects: [
///         (context: "INVENTORY", sprite_sheet: Object, sprite_ids: [390], name: Some("Stone")),
///     ],
///     characters: [
///         (id: "Villager::Lewis", description: Some("Mayor of Pelican Town")),
///     ],
///     adventure_guild_quests: [
///         (targets: ["Serpent", "Royal Serpent"], required_kills: 250),
///     ],
/// )
/// ```
pub struct MetadataLoader;

impl MetadataLoader {
    /// Load and validate override tables from a RON file.
    pub fn load(path: &Path) -> LoadResult<Metadata> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid metadata at {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Metadata> {
        let metadata: Metadata = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse metadata RON: {}", e))?;
        Self::validate(&metadata)?;
        Ok(metadata)
    }

    /// Rejects entries that could never match a lookup.
    fn validate(metadata: &Metadata) -> LoadResult<()> {
        for (i, object) in metadata.objects.iter().enumerate() {
            if object.sprite_ids.is_empty() {
                anyhow::bail!("Object entry {} has no sprite IDs", i);
            }
            if object.context.is_empty() {
                anyhow::bail!("Object entry {} has no context flags", i);
            }
        }

        for (i, character) in metadata.characters.iter().enumerate() {
            if character.id.trim().is_empty() {
                anyhow::bail!("Character entry {} has an empty ID", i);
            }
        }

        for (i, quest) in metadata.adventure_guild_quests.iter().enumerate() {
            if quest.targets.is_empty() {
                anyhow::bail!("Adventure guild quest {} has no targets", i);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use patch_core::{ObjectContext, ObjectRef, ObjectSpriteSheet, TargetType};

    use super::*;

    const METADATA: &str = r#"
        (
            objects: [
                (
                    context: "INVENTORY",
                    sprite_sheet: Object,
                    sprite_ids: [10, 20],
                    name: Some("Inventory stone"),
                ),
                (
                    context: "WORLD | INVENTORY",
                    sprite_sheet: BigCraftable,
                    sprite_ids: [20],
                    show_inventory_fields: Some(false),
                ),
                (sprite_ids: [99]),
            ],
            characters: [
                (id: "Villager::Lewis", name: Some("Mayor Lewis")),
                (id: "Villager", description: Some("A villager")),
            ],
            adventure_guild_quests: [
                (targets: ["Serpent", "Bat"], required_kills: 250),
            ],
        )
    "#;

    #[test]
    fn parses_tables() {
        let metadata = MetadataLoader::parse(METADATA).unwrap();
        assert_eq!(metadata.objects.len(), 3);
        assert_eq!(metadata.characters.len(), 2);
        assert_eq!(metadata.adventure_guild_quests.len(), 1);

        let big = &metadata.objects[1];
        assert_eq!(big.sprite_sheet, ObjectSpriteSheet::BigCraftable);
        assert_eq!(big.context, ObjectContext::ANY);

        // Omitted fields fall back to defaults.
        let bare = &metadata.objects[2];
        assert_eq!(bare.sprite_sheet, ObjectSpriteSheet::Object);
        assert_eq!(bare.context, ObjectContext::ANY);
        assert_eq!(bare.name, None);
    }

    #[test]
    fn parsed_tables_answer_lookups() {
        let metadata = MetadataLoader::parse(METADATA).unwrap();

        let stone = metadata
            .object(&ObjectRef::object(20), ObjectContext::INVENTORY)
            .unwrap();
        assert_eq!(stone.name.as_deref(), Some("Inventory stone"));
        assert!(
            metadata
                .object(&ObjectRef::object(20), ObjectContext::WORLD)
                .is_none()
        );

        let lewis = metadata.character("Lewis", TargetType::Villager).unwrap();
        assert_eq!(lewis.name.as_deref(), Some("Mayor Lewis"));
        let robin = metadata.character("Robin", TargetType::Villager).unwrap();
        assert_eq!(robin.id, "Villager");

        assert_eq!(
            metadata.adventure_guild_quest("Bat").map(|q| q.required_kills),
            Some(250)
        );
    }

    #[test]
    fn empty_tables_are_allowed() {
        assert!(MetadataLoader::parse("()").unwrap().is_empty());
    }

    #[test]
    fn rejects_unmatchable_entries() {
        let err = MetadataLoader::parse("(objects: [(sprite_ids: [])])").unwrap_err();
        assert!(err.to_string().contains("no sprite IDs"));

        let err = MetadataLoader::parse(r#"(characters: [(id: " ")])"#).unwrap_err();
        assert!(err.to_string().contains("empty ID"));

        let err = MetadataLoader::parse("(adventure_guild_quests: [(targets: [])])").unwrap_err();
        assert!(err.to_string().contains("no targets"));
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(MetadataLoader::parse("(objects: [").is_err());
    }
}
