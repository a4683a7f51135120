//! Value provider capability and its immutable implementation.
use std::borrow::Cow;

use super::context::TokenContext;
use super::error::TokenError;
use super::set::InvariantSet;

/// Supplies the raw values behind a token.
///
/// Implementations decide how values are produced; tokens only ever talk to
/// this trait. Providers must be shareable across threads so a loaded token
/// registry can be published as a single snapshot.
pub trait ValueProvider: Send + Sync {
    /// The token name this provider answers for.
    fn name(&self) -> &str;

    /// Whether values may change between queries.
    fn is_mutable(&self) -> bool;

    /// Whether the token may hold more than one value at a time.
    fn can_have_multiple_values(&self) -> bool;

    /// Values the token may ever have, or `None` if unconstrained.
    fn allowed_values(&self) -> Option<&InvariantSet>;

    /// Whether the provider can supply values in this context.
    fn is_ready(&self, _context: &dyn TokenContext) -> bool {
        true
    }

    /// Current values for the given context.
    fn values(&self, context: &dyn TokenContext) -> Cow<'_, InvariantSet>;
}

/// Provider whose values are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImmutableValueProvider {
    name: String,
    values: InvariantSet,
    allowed_values: Option<InvariantSet>,
    can_have_multiple_values: bool,
}

impl ImmutableValueProvider {
    /// Creates a provider with a fixed value set.
    ///
    /// When `can_have_multiple_values` is `None` it is derived from the
    /// initial values (`true` iff there is more than one).
    ///
    /// # Errors
    ///
    /// - [`TokenError::EmptyName`] if the name is blank
    /// - [`TokenError::InvalidConfiguration`] if a value is outside `allowed_values`
    /// - [`TokenError::MultipleValuesNotAllowed`] if declared single-valued
    ///   but given several values
    pub fn new(
        name: impl Into<String>,
        values: InvariantSet,
        allowed_values: Option<InvariantSet>,
        can_have_multiple_values: Option<bool>,
    ) -> Result<Self, TokenError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TokenError::EmptyName);
        }

        if let Some(allowed) = &allowed_values {
            let invalid: Vec<String> = values.difference(allowed).map(str::to_owned).collect();
            if !invalid.is_empty() {
                return Err(TokenError::InvalidConfiguration {
                    token: name,
                    values: invalid,
                });
            }
        }

        let can_have_multiple_values = match can_have_multiple_values {
            Some(false) if values.len() > 1 => {
                return Err(TokenError::MultipleValuesNotAllowed {
                    token: name,
                    count: values.len(),
                });
            }
            Some(explicit) => explicit,
            None => values.len() > 1,
        };

        Ok(Self {
            name,
            values,
            allowed_values,
            can_have_multiple_values,
        })
    }
}

impl ValueProvider for ImmutableValueProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_mutable(&self) -> bool {
        false
    }

    fn can_have_multiple_values(&self) -> bool {
        self.can_have_multiple_values
    }

    fn allowed_values(&self) -> Option<&InvariantSet> {
        self.allowed_values.as_ref()
    }

    fn values(&self, _context: &dyn TokenContext) -> Cow<'_, InvariantSet> {
        Cow::Borrowed(&self.values)
    }
}
