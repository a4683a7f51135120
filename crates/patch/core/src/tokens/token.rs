//! Uniform handle over a value provider.
use std::borrow::Cow;
use std::fmt;

use super::context::TokenContext;
use super::error::TokenError;
use super::provider::{ImmutableValueProvider, ValueProvider};
use super::set::InvariantSet;

/// A named value that patch conditions and substitutions evaluate through.
///
/// The name and provider are fixed at construction. Every query is delegated
/// to the provider; the token never inspects which kind of provider it holds.
pub struct Token {
    name: String,
    provider: Box<dyn ValueProvider>,
}

impl Token {
    /// Wraps a provider, taking the token name from it.
    pub fn new(provider: impl ValueProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub fn from_boxed(provider: Box<dyn ValueProvider>) -> Self {
        Self {
            name: provider.name().to_owned(),
            provider,
        }
    }

    /// Creates a token whose values never change after construction.
    ///
    /// Equivalent to wrapping an [`ImmutableValueProvider`] built from the
    /// same arguments, and fails for the same reasons.
    pub fn immutable(
        name: impl Into<String>,
        values: InvariantSet,
        allowed_values: Option<InvariantSet>,
        can_have_multiple_values: Option<bool>,
    ) -> Result<Self, TokenError> {
        ImmutableValueProvider::new(name, values, allowed_values, can_have_multiple_values)
            .map(Self::new)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_mutable(&self) -> bool {
        self.provider.is_mutable()
    }

    #[inline]
    pub fn can_have_multiple_values(&self) -> bool {
        self.provider.can_have_multiple_values()
    }

    #[inline]
    pub fn allowed_values(&self) -> Option<&InvariantSet> {
        self.provider.allowed_values()
    }

    /// Whether the token can supply values in this context.
    #[inline]
    pub fn is_ready(&self, context: &dyn TokenContext) -> bool {
        self.provider.is_ready(context)
    }

    /// Current values in this context.
    #[inline]
    pub fn values(&self, context: &dyn TokenContext) -> Cow<'_, InvariantSet> {
        self.provider.values(context)
    }

    /// Checks that every literal value could ever be produced by this token.
    ///
    /// Unconstrained tokens accept anything.
    pub fn validate_input(&self, values: &InvariantSet) -> Result<(), TokenError> {
        let Some(allowed) = self.allowed_values() else {
            return Ok(());
        };

        match values.difference(allowed).next() {
            Some(value) => Err(TokenError::DisallowedValue {
                token: self.name.clone(),
                value: value.to_owned(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("name", &self.name)
            .field("is_mutable", &self.is_mutable())
            .field("can_have_multiple_values", &self.can_have_multiple_values())
            .finish_non_exhaustive()
    }
}
