//! # Strict Mode Checks
//!
//! Documentation completeness rules enforced when strict mode is enabled.

use crate::error::{AppError, AppResult};

/// The raw comment must open with the field name followed by a space.
pub fn check_name_prefix(name: &str, comment: &str) -> AppResult<()> {
    if comment.starts_with(&format!("{} ", name)) {
        return Ok(());
    }
    tracing::warn!(field = name, "comment does not start with the field name");
    Err(malformed(
        name,
        format!("comment should start with field name `{}`", name),
    ))
}

/// The final description must be non-empty and end with a period.
pub fn check_description(name: &str, description: &str) -> AppResult<()> {
    if description.is_empty() {
        tracing::warn!(field = name, "missing description");
        return Err(malformed(name, "missing description".to_string()));
    }
    if !description.ends_with('.') {
        tracing::warn!(field = name, "missing trailing period");
        return Err(malformed(name, "missing trailing period".to_string()));
    }
    Ok(())
}

fn malformed(field: &str, reason: String) -> AppError {
    AppError::MalformedComment {
        field: field.to_string(),
        reason,
    }
}
