//! Provider whose values are recomputed from the context on every query.
use std::borrow::Cow;
use std::fmt;

use super::context::TokenContext;
use super::error::TokenError;
use super::provider::ValueProvider;
use super::set::InvariantSet;

type ValueFn = dyn Fn(&dyn TokenContext) -> InvariantSet + Send + Sync;
type ReadyFn = dyn Fn(&dyn TokenContext) -> bool + Send + Sync;

/// Mutable provider backed by a function of the context.
///
/// By default the provider is ready only once the world is ready, and is
/// declared multi-valued since its values are unknown at construction.
/// Computed values outside `allowed_values` are dropped.
pub struct DynamicValueProvider {
    name: String,
    allowed_values: Option<InvariantSet>,
    can_have_multiple_values: bool,
    compute: Box<ValueFn>,
    ready: Box<ReadyFn>,
}

impl DynamicValueProvider {
    /// Creates a provider computing its values with `compute`.
    pub fn new<F>(name: impl Into<String>, compute: F) -> Result<Self, TokenError>
    where
        F: Fn(&dyn TokenContext) -> InvariantSet + Send + Sync + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TokenError::EmptyName);
        }

        Ok(Self {
            name,
            allowed_values: None,
            can_have_multiple_values: true,
            compute: Box::new(compute),
            ready: Box::new(|context: &dyn TokenContext| context.is_world_ready()),
        })
    }

    /// Provider reading a comma-separated context value.
    ///
    /// `Weather = "rain, storm"` yields `{rain, storm}`; a missing key yields
    /// no values.
    pub fn from_context_key(
        name: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self, TokenError> {
        let key = key.into();
        Self::new(name, move |context| {
            context
                .value(&key)
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|value| !value.is_empty())
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    /// Restricts the values this provider may report.
    #[must_use]
    pub fn with_allowed_values(mut self, allowed: InvariantSet) -> Self {
        self.allowed_values = Some(allowed);
        self
    }

    #[must_use]
    pub fn with_multiple_values(mut self, can_have_multiple_values: bool) -> Self {
        self.can_have_multiple_values = can_have_multiple_values;
        self
    }

    /// Replaces the readiness check.
    #[must_use]
    pub fn with_readiness<F>(mut self, ready: F) -> Self
    where
        F: Fn(&dyn TokenContext) -> bool + Send + Sync + 'static,
    {
        self.ready = Box::new(ready);
        self
    }
}

impl ValueProvider for DynamicValueProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_mutable(&self) -> bool {
        true
    }

    fn can_have_multiple_values(&self) -> bool {
        self.can_have_multiple_values
    }

    fn allowed_values(&self) -> Option<&InvariantSet> {
        self.allowed_values.as_ref()
    }

    fn is_ready(&self, context: &dyn TokenContext) -> bool {
        (self.ready)(context)
    }

    fn values(&self, context: &dyn TokenContext) -> Cow<'_, InvariantSet> {
        if !self.is_ready(context) {
            return Cow::Owned(InvariantSet::new());
        }

        let mut values = (self.compute)(context);
        if let Some(allowed) = &self.allowed_values {
            values.retain(|value| allowed.contains(value));
        }
        Cow::Owned(values)
    }
}

impl fmt::Debug for DynamicValueProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicValueProvider")
            .field("name", &self.name)
            .field("allowed_values", &self.allowed_values)
            .field("can_have_multiple_values", &self.can_have_multiple_values)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::context::{EmptyContext, MapContext};

    #[test]
    fn reads_context_value() {
        let provider = DynamicValueProvider::from_context_key("Weather", "weather").unwrap();
        let ctx = MapContext::new().with("weather", "Rain, Storm");

        assert!(provider.is_mutable());
        assert_eq!(
            provider.values(&ctx).into_owned(),
            InvariantSet::from(["rain", "storm"])
        );
    }

    #[test]
    fn values_follow_context_changes() {
        let provider = DynamicValueProvider::from_context_key("Season", "season").unwrap();
        let mut ctx = MapContext::new().with("season", "spring");
        assert!(provider.values(&ctx).contains("spring"));

        ctx.set("season", "summer");
        let values = provider.values(&ctx);
        assert!(values.contains("summer"));
        assert!(!values.contains("spring"));
    }

    #[test]
    fn not_ready_without_world() {
        let provider = DynamicValueProvider::from_context_key("Season", "season").unwrap();
        assert!(!provider.is_ready(&EmptyContext));
        assert!(provider.values(&EmptyContext).is_empty());

        let unloaded = MapContext::new().with("season", "fall").with_world_ready(false);
        assert!(provider.values(&unloaded).is_empty());
    }

    #[test]
    fn custom_readiness() {
        let provider = DynamicValueProvider::new("Always", |_| ["on"].into())
            .unwrap()
            .with_readiness(|_| true);
        assert!(provider.is_ready(&EmptyContext));
        assert!(provider.values(&EmptyContext).contains("on"));
    }

    #[test]
    fn drops_disallowed_values() {
        let provider = DynamicValueProvider::from_context_key("Season", "season")
            .unwrap()
            .with_allowed_values(["spring", "summer", "fall", "winter"].into())
            .with_multiple_values(false);
        let ctx = MapContext::new().with("season", "monsoon, winter");

        assert_eq!(
            provider.values(&ctx).into_owned(),
            InvariantSet::from(["winter"])
        );
        assert!(!provider.can_have_multiple_values());
    }
}
