//! # Literal Values
//!
//! Turns the text of a documented literal (defaults, enum values) into a
//! typed JSON value. JSON syntax is tried first, then the Rust literal forms
//! people naturally write in doc comments.

use crate::error::{AppError, AppResult};
use serde_json::{Number, Value};

const INT_SUFFIXES: [&str; 12] = [
    "i128", "u128", "isize", "usize", "i64", "u64", "i32", "u32", "i16", "u16", "i8", "u8",
];
const FLOAT_SUFFIXES: [&str; 2] = ["f32", "f64"];

/// Parses a literal into a JSON value.
pub fn parse_literal(text: &str) -> AppResult<Value> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(value);
    }
    if trimmed == "None" {
        return Ok(Value::Null);
    }
    if let Some(s) = parse_raw_string(trimmed) {
        return Ok(Value::String(s));
    }
    if let Some(c) = parse_char(trimmed) {
        return Ok(Value::String(c.to_string()));
    }
    if let Some(n) = parse_number(trimmed) {
        return Ok(Value::Number(n));
    }

    Err(AppError::General(format!("`{}` is not a valid literal", text)))
}

/// `r"..."` and `r#"..."#`.
fn parse_raw_string(text: &str) -> Option<String> {
    let rest = text.strip_prefix('r')?;
    let hashes = rest.len() - rest.trim_start_matches('#').len();
    let fence = "#".repeat(hashes);
    let body = rest[hashes..]
        .strip_prefix('"')?
        .strip_suffix(fence.as_str())?
        .strip_suffix('"')?;
    Some(body.to_string())
}

fn parse_char(text: &str) -> Option<char> {
    let inner = text.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = inner.chars();
    let first = chars.next()?;
    let second = chars.next();
    if chars.next().is_some() {
        return None;
    }

    match (first, second) {
        (c, None) if c != '\\' && c != '\'' => Some(c),
        ('\\', Some(escaped)) => match escaped {
            'n' => Some('\n'),
            't' => Some('\t'),
            'r' => Some('\r'),
            '0' => Some('\0'),
            '\\' | '\'' | '"' => Some(escaped),
            _ => None,
        },
        _ => None,
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if !digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(body) = cleaned.strip_prefix(prefix) {
            let body = strip_suffix_any(body, &INT_SUFFIXES).unwrap_or(body);
            // `from_str_radix` takes its own sign, which no Rust literal has.
            if body.starts_with(['+', '-']) {
                return None;
            }
            let magnitude = i128::from_str_radix(body, radix).ok()?;
            return int_number(apply_sign(negative, magnitude)?);
        }
    }

    if let Some(body) = strip_suffix_any(&cleaned, &FLOAT_SUFFIXES) {
        let value: f64 = body.parse().ok()?;
        return Number::from_f64(if negative { -value } else { value });
    }

    let body = strip_suffix_any(&cleaned, &INT_SUFFIXES).unwrap_or(cleaned.as_str());
    if let Ok(magnitude) = body.parse::<i128>() {
        return int_number(apply_sign(negative, magnitude)?);
    }
    let value: f64 = body.parse().ok()?;
    Number::from_f64(if negative { -value } else { value })
}

fn apply_sign(negative: bool, magnitude: i128) -> Option<i128> {
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

fn strip_suffix_any<'a>(text: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix).filter(|body| !body.is_empty()))
}

fn int_number(value: i128) -> Option<Number> {
    if let Ok(i) = i64::try_from(value) {
        Some(Number::from(i))
    } else {
        u64::try_from(value).ok().map(Number::from)
    }
}
