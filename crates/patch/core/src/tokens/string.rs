//! Text with `{{Token}}` placeholders.
use std::fmt;

use super::context::TokenContext;
use super::error::TokenError;
use super::registry::TokenRegistry;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Separator used when a multi-valued token is substituted into text.
pub const VALUE_SEPARATOR: &str = ", ";

/// One piece of a parsed [`TokenString`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Token(String),
}

/// Parsed text whose placeholders are resolved against a [`TokenRegistry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenString {
    raw: String,
    segments: Vec<Segment>,
}

impl TokenString {
    /// Parses placeholders out of `raw`.
    ///
    /// Whitespace inside the braces is ignored, so `{{ Season }}` names the
    /// `Season` token. A lone `}}` is kept as literal text.
    ///
    /// # Errors
    ///
    /// - [`TokenError::UnterminatedPlaceholder`] if `{{` is never closed
    /// - [`TokenError::EmptyName`] for `{{}}`
    pub fn parse(raw: impl Into<String>) -> Result<Self, TokenError> {
        let raw = raw.into();
        let mut segments = Vec::new();
        let mut rest = raw.as_str();
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_owned()));
            }

            let after_open = &rest[start + OPEN.len()..];
            let end = after_open
                .find(CLOSE)
                .ok_or(TokenError::UnterminatedPlaceholder {
                    position: offset + start,
                })?;

            let name = after_open[..end].trim();
            if name.is_empty() {
                return Err(TokenError::EmptyName);
            }
            segments.push(Segment::Token(name.to_owned()));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_owned()));
        }

        Ok(Self { raw, segments })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of referenced tokens, in order of appearance.
    pub fn token_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Token(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the text contains any placeholder.
    pub fn has_tokens(&self) -> bool {
        self.token_names().next().is_some()
    }

    /// Whether rendering may change between contexts.
    ///
    /// Unknown tokens count as mutable since they may be registered later.
    pub fn is_mutable(&self, registry: &TokenRegistry) -> bool {
        self.token_names()
            .any(|name| registry.get(name).is_none_or(|token| token.is_mutable()))
    }

    /// Checks that every referenced token exists.
    pub fn validate(&self, registry: &TokenRegistry) -> Result<(), TokenError> {
        match self.token_names().find(|name| !registry.contains(name)) {
            Some(name) => Err(TokenError::UnknownToken(name.to_owned())),
            None => Ok(()),
        }
    }

    /// Whether every referenced token exists and is ready.
    pub fn is_ready(&self, registry: &TokenRegistry, context: &dyn TokenContext) -> bool {
        self.token_names().all(|name| {
            registry
                .get(name)
                .is_some_and(|token| token.is_ready(context))
        })
    }

    /// Substitutes every placeholder with the token's current values.
    ///
    /// Multi-valued tokens are joined with [`VALUE_SEPARATOR`].
    pub fn render(
        &self,
        registry: &TokenRegistry,
        context: &dyn TokenContext,
    ) -> Result<String, TokenError> {
        let mut output = String::with_capacity(self.raw.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Token(name) => {
                    let token = registry
                        .get(name)
                        .ok_or_else(|| TokenError::UnknownToken(name.clone()))?;
                    if !token.is_ready(context) {
                        return Err(TokenError::NotReady(token.name().to_owned()));
                    }
                    output.push_str(&token.values(context).join(VALUE_SEPARATOR));
                }
            }
        }
        Ok(output)
    }
}

impl fmt::Display for TokenString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
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
            .add_immutable("Language", ["en"].into(), None, None)
            .unwrap();
        registry
            .add_immutable("Festivals", ["Egg", "Luau"].into(), None, None)
            .unwrap();
        registry
            .register(Token::new(
                DynamicValueProvider::from_context_key("Season", "season").unwrap(),
            ))
            .unwrap();
        registry
    }

    #[test]
    fn parses_literals_and_placeholders() {
        let text = TokenString::parse("Maps/{{ Season }}_town.{{Language}}").unwrap();
        assert_eq!(
            text.segments(),
            &[
                Segment::Literal("Maps/".into()),
                Segment::Token("Season".into()),
                Segment::Literal("_town.".into()),
                Segment::Token("Language".into()),
            ]
        );
        assert_eq!(text.token_names().collect::<Vec<_>>(), vec!["Season", "Language"]);
        assert_eq!(text.to_string(), "Maps/{{ Season }}_town.{{Language}}");
    }

    #[test]
    fn plain_text_renders_unchanged() {
        let text = TokenString::parse("Characters/Abigail }} done").unwrap();
        assert!(!text.has_tokens());
        assert_eq!(
            text.render(&registry(), &EmptyContext).unwrap(),
            "Characters/Abigail }} done"
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            TokenString::parse("abc {{Season").unwrap_err(),
            TokenError::UnterminatedPlaceholder { position: 4 }
        );
        assert_eq!(TokenString::parse("{{  }}").unwrap_err(), TokenError::EmptyName);
    }

    #[test]
    fn renders_values() {
        let registry = registry();
        let ctx = MapContext::new().with("season", "summer");

        let text = TokenString::parse("{{Season}}: {{Festivals}} ({{language}})").unwrap();
        assert_eq!(
            text.render(&registry, &ctx).unwrap(),
            "summer: Egg, Luau (en)"
        );
    }

    #[test]
    fn render_errors() {
        let registry = registry();

        let unknown = TokenString::parse("{{Weather}}").unwrap();
        assert_eq!(
            unknown.render(&registry, &MapContext::new()),
            Err(TokenError::UnknownToken("Weather".into()))
        );
        assert!(unknown.validate(&registry).is_err());

        let not_ready = TokenString::parse("{{season}}").unwrap();
        assert_eq!(
            not_ready.render(&registry, &EmptyContext),
            Err(TokenError::NotReady("Season".into()))
        );
        assert!(!not_ready.is_ready(&registry, &EmptyContext));
    }

    #[test]
    fn mutability_follows_referenced_tokens() {
        let registry = registry();
        assert!(!TokenString::parse("{{Language}}").unwrap().is_mutable(&registry));
        assert!(TokenString::parse("{{Language}}{{Season}}").unwrap().is_mutable(&registry));
        assert!(TokenString::parse("{{Unknown}}").unwrap().is_mutable(&registry));
        assert!(!TokenString::parse("static").unwrap().is_mutable(&registry));
    }
}
