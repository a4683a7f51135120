//! Namespace of tokens keyed by case-insensitive name.
use std::collections::HashMap;

use super::error::TokenError;
use super::set::InvariantSet;
use super::token::Token;

/// Registry of tokens available to a content pack.
///
/// Names are unique ignoring case. Iteration follows registration order.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
    index: HashMap<String, usize>,
}

impl TokenRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::DuplicateToken`] if the name is taken.
    pub fn register(&mut self, token: Token) -> Result<(), TokenError> {
        let key = token.name().to_lowercase();
        if self.index.contains_key(&key) {
            return Err(TokenError::DuplicateToken(token.name().to_owned()));
        }

        self.index.insert(key, self.tokens.len());
        self.tokens.push(token);
        Ok(())
    }

    /// Builds and registers an immutable token.
    pub fn add_immutable(
        &mut self,
        name: impl Into<String>,
        values: InvariantSet,
        allowed_values: Option<InvariantSet>,
        can_have_multiple_values: Option<bool>,
    ) -> Result<(), TokenError> {
        let token = Token::immutable(name, values, allowed_values, can_have_multiple_values)?;
        self.register(token)
    }

    pub fn get(&self, name: &str) -> Option<&Token> {
        self.index
            .get(&name.to_lowercase())
            .map(|&position| &self.tokens[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(Token::name)
    }
}
