#![deny(missing_docs)]

//! # Enum Blocks
//!
//! Recognizes a "Possible values are:" block listing the literal values a
//! field accepts, records them on the definition and removes the block from
//! the comment.
//!
//! ```text
//! Mode selects the pipeline.
//! Possible values are:
//! - `"fast"`: Skips validation.
//! - `"safe"`
//! ```

use crate::error::{AppError, AppResult};
use crate::literal::parse_literal;
use crate::schema::Definition;
use regex::Regex;
use std::sync::OnceLock;

/// Result of a recognized enum block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumInformation {
    /// The comment with the block removed.
    pub remaining_comment: String,
    /// Prose summarizing the allowed values, appended to the description.
    pub synthesized_comment: String,
}

struct EnumEntry<'a> {
    literal: &'a str,
    description: Option<&'a str>,
}

/// Extracts an enum block from `comment`.
///
/// Returns `Ok(None)` when the comment has no block. On success
/// `def.enum_values` holds the parsed literals in declaration order.
pub fn extract_enum(
    field: &str,
    def: &mut Definition,
    comment: &str,
) -> AppResult<Option<EnumInformation>> {
    let lines: Vec<&str> = comment.lines().collect();
    let Some(header) = lines.iter().position(|line| is_header(line)) else {
        return Ok(None);
    };

    let mut entries = Vec::new();
    let mut end = header + 1;
    while let Some(line) = lines.get(end) {
        let trimmed = line.trim();
        if !(trimmed.starts_with("- ") || trimmed.starts_with("* ")) {
            break;
        }
        entries.push(parse_entry(field, trimmed)?);
        end += 1;
    }

    if entries.is_empty() {
        return Err(AppError::MalformedComment {
            field: field.to_string(),
            reason: "enum block lists no values".to_string(),
        });
    }

    let mut values = Vec::with_capacity(entries.len());
    for entry in &entries {
        let value = parse_literal(entry.literal).map_err(|e| AppError::LiteralParse {
            field: field.to_string(),
            literal: entry.literal.to_string(),
            reason: e.into_reason(),
        })?;
        values.push(value);
    }
    def.enum_values = values;

    let remaining_comment = lines[..header]
        .iter()
        .chain(lines[end..].iter())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    tracing::trace!(field, values = entries.len(), "enum block extracted");

    Ok(Some(EnumInformation {
        remaining_comment,
        synthesized_comment: synthesize(&entries),
    }))
}

fn is_header(line: &str) -> bool {
    matches!(line.trim(), "Possible values are:" | "Possible values:")
}

fn parse_entry<'a>(field: &str, line: &'a str) -> AppResult<EnumEntry<'a>> {
    static ENTRY_RE: OnceLock<Regex> = OnceLock::new();
    let entry_re = ENTRY_RE.get_or_init(|| {
        Regex::new(r"^[-*] `([^`]+)`(?::\s*(.*))?$").expect("Invalid regex")
    });

    let caps = entry_re
        .captures(line)
        .ok_or_else(|| AppError::MalformedComment {
            field: field.to_string(),
            reason: format!("malformed enum entry: {}", line),
        })?;

    Ok(EnumEntry {
        literal: caps.get(1).map_or("", |m| m.as_str()),
        description: caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|d| !d.is_empty()),
    })
}

fn synthesize(entries: &[EnumEntry<'_>]) -> String {
    let listed: Vec<String> = entries
        .iter()
        .map(|entry| match entry.description {
            Some(desc) => format!("`{}` ({})", entry.literal, desc.trim_end_matches('.')),
            None => format!("`{}`", entry.literal),
        })
        .collect();
    format!("Possible values: {}.", listed.join(", "))
}
