//! Token resolution and metadata overrides for content patches.
//!
//! `patch-core` defines the two pure halves of the content-patch layer:
//!
//! - [`tokens`]: named, context-sensitive values. Every patch condition and
//!   every `{{Token}}` substitution evaluates through a [`Token`], which
//!   delegates to a [`ValueProvider`] without caring which kind it is.
//! - [`metadata`]: flat override tables for objects, characters and
//!   adventure guild quests, searched in declaration order.
//!
//! The crate performs no I/O. Loaders live in `patch-content` and the live
//! snapshot is owned by `patch-runtime`.
pub mod error;
pub mod metadata;
pub mod tokens;

pub use error::{ErrorSeverity, PatchError};
pub use metadata::{
    AdventureGuildQuestData, CharacterData, CharacterSubject, ItemSubject, Metadata,
    MetadataLookup, ObjectContext, ObjectData, ObjectRef, ObjectSpriteSheet, TargetType,
    character_keys,
};
pub use tokens::{
    Condition, ConditionSet, DynamicValueProvider, EmptyContext, ImmutableValueProvider,
    InvariantSet, MapContext, Token, TokenContext, TokenError, TokenRegistry, TokenString,
    ValueProvider,
};
