//! Patch conditions evaluated through tokens.
use super::context::TokenContext;
use super::error::TokenError;
use super::registry::TokenRegistry;
use super::set::InvariantSet;

/// Matches when a token currently has any of the expected values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    token: String,
    values: InvariantSet,
}

impl Condition {
    /// Builds a condition on a registered token.
    ///
    /// # Errors
    ///
    /// - [`TokenError::UnknownToken`] if the token isn't registered
    /// - [`TokenError::EmptyCondition`] if no values are given
    /// - [`TokenError::DisallowedValue`] if a value is outside the token's allowed set
    pub fn new(
        registry: &TokenRegistry,
        token: &str,
        values: InvariantSet,
    ) -> Result<Self, TokenError> {
        let resolved = registry
            .get(token)
            .ok_or_else(|| TokenError::UnknownToken(token.to_owned()))?;
        if values.is_empty() {
            return Err(TokenError::EmptyCondition(resolved.name().to_owned()));
        }
        resolved.validate_input(&values)?;

        Ok(Self {
            token: resolved.name().to_owned(),
            values,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn values(&self) -> &InvariantSet {
        &self.values
    }

    /// Whether the token's current values intersect the expected ones.
    ///
    /// A token that is missing or not ready never matches.
    pub fn is_match(&self, registry: &TokenRegistry, context: &dyn TokenContext) -> bool {
        registry.get(&self.token).is_some_and(|token| {
            token.is_ready(context) && token.values(context).intersects(&self.values)
        })
    }
}

/// Conditions that must all match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConditionSet {
    conditions: Vec<Condition>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    /// True if every condition matches. An empty set always matches.
    pub fn is_match(&self, registry: &TokenRegistry, context: &dyn TokenContext) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.is_match(registry, context))
    }
}

impl FromIterator<Condition> for ConditionSet {
    fn from_iter<T: IntoIterator<Item = Condition>>(iter: T) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::context::{EmptyContext, MapContext};
    use crate::tokens::dynamic::DynamicValueProvider;
    use crate::tokens::token::Token;

    fn registry() -> TokenRegistry {
        let mut registry = TokenRegistry::new();
        registry
            .add_immutable(
                "HasMod",
                ["Pathoschild.ContentPatcher", "spacechase0.JsonAssets"].into(),
                None,
                None,
            )
            .unwrap();
        registry
            .register(Token::new(
                DynamicValueProvider::from_context_key("Season", "season")
                    .unwrap()
                    .with_allowed_values(["spring", "summer", "fall", "winter"].into())
                    .with_multiple_values(false),
            ))
            .unwrap();
        registry
    }

    #[test]
    fn matches_on_intersection() {
        let registry = registry();
        let condition =
            Condition::new(&registry, "hasmod", ["pathoschild.contentpatcher", "Other"].into())
                .unwrap();

        assert_eq!(condition.token(), "HasMod");
        assert!(condition.is_match(&registry, &EmptyContext));

        let miss = Condition::new(&registry, "HasMod", ["Other"].into()).unwrap();
        assert!(!miss.is_match(&registry, &EmptyContext));
    }

    #[test]
    fn construction_is_validated() {
        let registry = registry();

        assert_eq!(
            Condition::new(&registry, "Weather", ["rain"].into()),
            Err(TokenError::UnknownToken("Weather".into()))
        );
        assert_eq!(
            Condition::new(&registry, "Season", InvariantSet::new()),
            Err(TokenError::EmptyCondition("Season".into()))
        );
        assert_eq!(
            Condition::new(&registry, "Season", ["Monsoon"].into()),
            Err(TokenError::DisallowedValue {
                token: "Season".into(),
                value: "Monsoon".into()
            })
        );
    }

    #[test]
    fn non_ready_token_never_matches() {
        let registry = registry();
        let condition = Condition::new(&registry, "Season", ["spring"].into()).unwrap();

        assert!(!condition.is_match(&registry, &EmptyContext));
        assert!(condition.is_match(&registry, &MapContext::new().with("season", "Spring")));
    }

    #[test]
    fn condition_set_requires_all() {
        let registry = registry();
        let conditions: ConditionSet = [
            Condition::new(&registry, "Season", ["summer", "fall"].into()).unwrap(),
            Condition::new(&registry, "HasMod", ["spacechase0.JsonAssets"].into()).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(conditions.len(), 2);
        assert!(conditions.is_match(&registry, &MapContext::new().with("season", "fall")));
        assert!(!conditions.is_match(&registry, &MapContext::new().with("season", "winter")));
        assert!(ConditionSet::new().is_match(&registry, &EmptyContext));
    }
}
