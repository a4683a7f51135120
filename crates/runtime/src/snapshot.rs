//! Immutable view of one loaded content pack.
use patch_content::PatchConfig;
use patch_core::{
    AdventureGuildQuestData, CharacterData, CharacterSubject, ItemSubject, Metadata,
    MetadataLookup, ObjectContext, ObjectData, TargetType, TokenContext, TokenError,
    TokenRegistry, TokenString,
};

/// Everything a reload produces, published as one unit.
///
/// A snapshot is never mutated after construction. Readers holding one see
/// a consistent pairing of tokens and metadata tables.
#[derive(Debug)]
pub struct ContentSnapshot {
    version: u64,
    config: PatchConfig,
    tokens: TokenRegistry,
    metadata: Option<Metadata>,
}

impl ContentSnapshot {
    pub fn new(
        version: u64,
        config: PatchConfig,
        tokens: TokenRegistry,
        metadata: Option<Metadata>,
    ) -> Self {
        Self {
            version,
            config,
            tokens,
            metadata,
        }
    }

    /// Monotonic reload counter, starting at 1 for the first load.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config(&self) -> &PatchConfig {
        &self.config
    }

    pub fn tokens(&self) -> &TokenRegistry {
        &self.tokens
    }

    /// Metadata tables, or `None` if the pack ships none.
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn object<I>(&self, item: &I, context: ObjectContext) -> Option<&ObjectData>
    where
        I: ItemSubject + ?Sized,
    {
        self.metadata().object(item, context)
    }

    pub fn character<C>(&self, character: &C, target: TargetType) -> Option<&CharacterData>
    where
        C: CharacterSubject + ?Sized,
    {
        self.metadata().character(character, target)
    }

    pub fn adventure_guild_quest(&self, monster: &str) -> Option<&AdventureGuildQuestData> {
        self.metadata().adventure_guild_quest(monster)
    }

    /// Parses and renders text against this snapshot's tokens.
    pub fn render(&self, raw: &str, context: &dyn TokenContext) -> Result<String, TokenError> {
        TokenString::parse(raw)?.render(&self.tokens, context)
    }
}
