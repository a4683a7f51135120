//! Named, context-sensitive values used by patch conditions and substitutions.
//!
//! A [`Token`] is the uniform handle consumers hold. It owns exactly one
//! [`ValueProvider`] and forwards every query to it, so new provider kinds
//! (time of day, player state, computed values) plug in without changing the
//! token surface.
//!
//! ```text
//! TokenString / Condition
//!   → TokenRegistry (case-insensitive namespace)
//!   → Token (name + boxed provider)
//!   → ValueProvider::values(context)
//! ```
mod condition;
mod context;
mod dynamic;
mod error;
mod provider;
mod registry;
mod set;
mod string;
mod token;

pub use condition::{Condition, ConditionSet};
pub use context::{EmptyContext, MapContext, TokenContext};
pub use dynamic::DynamicValueProvider;
pub use error::TokenError;
pub use provider::{ImmutableValueProvider, ValueProvider};
pub use registry::TokenRegistry;
pub use set::InvariantSet;
pub use string::{Segment, TokenString};
pub use token::Token;
