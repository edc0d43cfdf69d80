//! # Configuration
//!
//! Options controlling how comments are interpreted.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Prefix used for `$ref` targets when none is configured.
pub const DEFAULT_DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Comment handling options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentConfig {
    /// Enforce documentation completeness: comments start with the field
    /// name and end with a period.
    pub strict: bool,
    /// Prefix prepended to named types when building `$ref` targets.
    pub definitions_prefix: String,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            strict: false,
            definitions_prefix: DEFAULT_DEFINITIONS_PREFIX.to_string(),
        }
    }
}

impl CommentConfig {
    /// Enables or disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the `$ref` prefix (e.g. `#/components/schemas/`).
    pub fn with_definitions_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.definitions_prefix = prefix.into();
        self
    }

    /// Reads the options from a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::General(format!("Invalid comment configuration: {}", e)))
    }
}
