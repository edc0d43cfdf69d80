#![deny(missing_docs)]

//! # Annotation Clauses
//!
//! The individual text passes run over a field comment. Each extractor takes
//! the current description and, on a match, returns the text before the
//! clause together with the clause payload. Every pattern is greedy on its
//! prefix, so the last occurrence of a clause wins.

use crate::error::{AppError, AppResult};
use regex::{Captures, Regex};
use std::sync::OnceLock;

const ONE_OF_ENTRY: &str = r"`([^`]+)`,?[ \t]*";

/// A clause found at the end of a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clause<'a> {
    /// Trimmed text preceding the clause.
    pub prefix: &'a str,
    /// The back-quoted payload, verbatim.
    pub value: &'a str,
}

/// A `Schema type is one of` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneOfClause<'a> {
    /// Trimmed text preceding the clause.
    pub prefix: &'a str,
    /// The back-quoted type expressions, in order.
    pub entries: Vec<&'a str>,
}

/// True if the comment has a standalone `+required` or `Required` line.
///
/// Both markers are accepted; they mean the same thing.
pub fn is_required(comment: &str) -> bool {
    static PLUS_REQUIRED_RE: OnceLock<Regex> = OnceLock::new();
    let plus_required_re = PLUS_REQUIRED_RE
        .get_or_init(|| Regex::new(r"(?mR)^\+required$").expect("Invalid regex"));

    static REQUIRED_RE: OnceLock<Regex> = OnceLock::new();
    let required_re =
        REQUIRED_RE.get_or_init(|| Regex::new(r"(?mR)^Required$").expect("Invalid regex"));

    plus_required_re.is_match(comment) || required_re.is_match(comment)
}

/// Removes requiredness markers and folds the comment onto one line.
///
/// `+required` and `+optional` are dropped wherever they appear; a `Required`
/// marker is dropped only when it stands on its own line.
pub fn strip_markers(comment: &str) -> String {
    static REQUIRED_LINE_RE: OnceLock<Regex> = OnceLock::new();
    let required_line_re = REQUIRED_LINE_RE
        .get_or_init(|| Regex::new(r"(?m)^Required(?:\r?\n|\r?\z)").expect("Invalid regex"));

    required_line_re
        .replace_all(comment, "")
        .replace("+required", "")
        .replace("+optional", "")
        .replace("\r\n", " ")
        .replace('\n', " ")
        .trim()
        .to_string()
}

/// Matches ``... Defaults to `value` ``.
pub fn extract_default(description: &str) -> Option<Clause<'_>> {
    static DEFAULTS_RE: OnceLock<Regex> = OnceLock::new();
    let defaults_re = DEFAULTS_RE
        .get_or_init(|| Regex::new(r"(.*)Defaults to `(.*)`").expect("Invalid regex"));

    defaults_re.captures(description).map(|caps| clause(&caps))
}

/// Matches ``... Schema type is `Type` ``.
pub fn extract_type_override(description: &str) -> Option<Clause<'_>> {
    static TYPE_OVERRIDE_RE: OnceLock<Regex> = OnceLock::new();
    let type_override_re = TYPE_OVERRIDE_RE
        .get_or_init(|| Regex::new(r"(.*)Schema type is `(.*)`").expect("Invalid regex"));

    type_override_re.captures(description).map(|caps| clause(&caps))
}

/// Matches ``... Schema type is one of `A`, `B` ``.
///
/// The outer pattern also matches when no entry follows the phrase; that
/// case is reported as an internal consistency error.
pub fn extract_one_of(description: &str) -> AppResult<Option<OneOfClause<'_>>> {
    static ONE_OF_RE: OnceLock<Regex> = OnceLock::new();
    let one_of_re = ONE_OF_RE.get_or_init(|| {
        Regex::new(&format!(r"(.*)Schema type is one of ((?:{})*)", ONE_OF_ENTRY))
            .expect("Invalid regex")
    });

    static ONE_OF_ENTRY_RE: OnceLock<Regex> = OnceLock::new();
    let one_of_entry_re =
        ONE_OF_ENTRY_RE.get_or_init(|| Regex::new(ONE_OF_ENTRY).expect("Invalid regex"));

    let Some(caps) = one_of_re.captures(description) else {
        return Ok(None);
    };
    let prefix = caps.get(1).map_or("", |m| m.as_str()).trim();
    let list = caps.get(2).map_or("", |m| m.as_str());

    let entries: Vec<&str> = one_of_entry_re
        .captures_iter(list)
        .filter_map(|entry| entry.get(1).map(|m| m.as_str()))
        .collect();

    if entries.is_empty() {
        return Err(AppError::InternalConsistency(format!(
            "`oneOf` clause matched without entries in: {}",
            description
        )));
    }

    Ok(Some(OneOfClause { prefix, entries }))
}

/// Matches ``... For example: `text` ``.
pub fn extract_example(description: &str) -> Option<Clause<'_>> {
    static EXAMPLE_RE: OnceLock<Regex> = OnceLock::new();
    let example_re = EXAMPLE_RE
        .get_or_init(|| Regex::new(r"(.*)For example: `(.*)`").expect("Invalid regex"));

    example_re.captures(description).map(|caps| clause(&caps))
}

/// Strips a leading "`name` [*aside*] is the" paraphrase, keeping the aside.
pub fn remove_name_prefix(name: &str, description: &str) -> String {
    static NAME_PHRASE_RE: OnceLock<Regex> = OnceLock::new();
    let name_phrase_re = NAME_PHRASE_RE.get_or_init(|| {
        Regex::new(r"^(\*.*\* )?((is (the )?)|(are (the )?)|(lists ))?").expect("Invalid regex")
    });

    if name.is_empty() {
        return description.to_string();
    }
    match description
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix(' '))
    {
        Some(rest) => name_phrase_re.replacen(rest, 1, "${1}").into_owned(),
        None => description.to_string(),
    }
}

/// Joins the non-empty parts with `sep`.
pub fn join_non_empty(sep: &str, parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

fn clause<'a>(caps: &Captures<'a>) -> Clause<'a> {
    Clause {
        prefix: caps.get(1).map_or("", |m| m.as_str()).trim(),
        value: caps.get(2).map_or("", |m| m.as_str()),
    }
}
