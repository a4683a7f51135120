//! Token configuration and evaluation errors.
use crate::error::{ErrorSeverity, PatchError};

/// Errors raised while building or evaluating tokens.
///
/// Configuration variants are raised at construction time and never deferred
/// to query time. Lookup misses are not represented here.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Token names must contain a non-whitespace character.
    #[error("token name cannot be empty")]
    EmptyName,

    /// Values declared for a token fall outside its allowed set.
    #[error("token '{token}' has values outside its allowed set: {values:?}")]
    InvalidConfiguration { token: String, values: Vec<String> },

    /// Token was declared single-valued but given several values.
    #[error("token '{token}' can't have multiple values but was given {count}")]
    MultipleValuesNotAllowed { token: String, count: usize },

    /// A token with the same name (ignoring case) is already registered.
    #[error("token '{0}' is already registered")]
    DuplicateToken(String),

    /// No token with this name exists in the registry.
    #[error("unknown token '{0}'")]
    UnknownToken(String),

    /// Token can't provide values in the current context.
    #[error("token '{0}' is not ready in the current context")]
    NotReady(String),

    /// A condition or input compares a token against a value it can never have.
    #[error("token '{token}' can never have value '{value}'")]
    DisallowedValue { token: String, value: String },

    /// A condition lists no values to compare against.
    #[error("condition on token '{0}' has no values")]
    EmptyCondition(String),

    /// A `{{` placeholder has no closing `}}`.
    #[error("unterminated token placeholder starting at byte {position}")]
    UnterminatedPlaceholder { position: usize },
}

impl PatchError for TokenError {
    fn severity(&self) -> ErrorSeverity {
        use TokenError::*;
        match self {
            UnknownToken(_) | NotReady(_) => ErrorSeverity::Recoverable,

            EmptyName
            | InvalidConfiguration { .. }
            | MultipleValuesNotAllowed { .. }
            | DuplicateToken(_)
            | DisallowedValue { .. }
            | EmptyCondition(_)
            | UnterminatedPlaceholder { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use TokenError::*;
        match self {
            EmptyName => "TOKEN_EMPTY_NAME",
            InvalidConfiguration { .. } => "TOKEN_INVALID_CONFIGURATION",
            MultipleValuesNotAllowed { .. } => "TOKEN_MULTIPLE_VALUES_NOT_ALLOWED",
            DuplicateToken(_) => "TOKEN_DUPLICATE",
            UnknownToken(_) => "TOKEN_UNKNOWN",
            NotReady(_) => "TOKEN_NOT_READY",
            DisallowedValue { .. } => "TOKEN_DISALLOWED_VALUE",
            EmptyCondition(_) => "TOKEN_EMPTY_CONDITION",
            UnterminatedPlaceholder { .. } => "TOKEN_UNTERMINATED_PLACEHOLDER",
        }
    }
}
