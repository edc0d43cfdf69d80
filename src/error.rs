//! # Error Handling
//!
//! Provides the unified `AppError` enum returned by every annotation pass.

use derive_more::Display;

/// The Global Error Enum.
///
/// Every variant raised while handling a field carries the field name so the
/// caller can point at the offending declaration.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The comment does not follow the documentation rules (strict mode) or
    /// contains a broken annotation block.
    #[display("malformed comment on field {field}: {reason}")]
    MalformedComment {
        /// Field the comment belongs to.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A default or enum literal could not be parsed into a value.
    #[display("couldn't parse literal `{literal}` on field {field}: {reason}")]
    LiteralParse {
        /// Field the literal belongs to.
        field: String,
        /// The literal text as written in the comment.
        literal: String,
        /// Parser message.
        reason: String,
    },

    /// A type override or `oneOf` entry is not a valid type expression.
    #[display("couldn't parse type `{text}` on field {field}: {reason}")]
    TypeExpression {
        /// Field the type expression belongs to.
        field: String,
        /// The type expression as written in the comment.
        text: String,
        /// Parser message.
        reason: String,
    },

    /// The annotation grammar itself is inconsistent.
    /// Never caused by user input alone.
    #[display("internal consistency error: {_0}")]
    InternalConsistency(String),

    /// Generic errors raised by the standalone parsers.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Returns true for errors that point at a defect in the tooling rather
    /// than in the documented source.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::InternalConsistency(_))
    }

    /// The bare message, used when wrapping a parser error with field context.
    pub(crate) fn into_reason(self) -> String {
        match self {
            AppError::General(msg) => msg,
            other => other.to_string(),
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
