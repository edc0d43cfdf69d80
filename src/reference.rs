#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Splits a declaration name that may be written as a reference into its
//! context and its plain name.

/// Resolves a raw declaration name into `(context, name)`.
///
/// Handles JSON pointers (`#/definitions/User`), Rust paths
/// (`crate::models::User`), generic arguments (`Page<T>`) and raw
/// identifiers (`r#type`). Plain names have an empty context.
pub fn interpret_reference(raw_name: &str) -> (String, String) {
    let raw = raw_name.trim();

    if raw.starts_with('#') {
        let pointer = raw.trim_end_matches('/');
        return match pointer.rsplit_once('/') {
            Some((context, name)) => (context.to_string(), decode_pointer_segment(name)),
            None => (String::new(), String::new()),
        };
    }

    let path = strip_generic_args(raw);
    let (context, name) = match path.rsplit_once("::") {
        Some((context, name)) => (context.trim(), name.trim()),
        None => ("", path.trim()),
    };

    let name = name.strip_prefix("r#").unwrap_or(name);
    (context.to_string(), name.to_string())
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

fn strip_generic_args(path: &str) -> &str {
    match path.find('<') {
        Some(start) => &path[..start],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        assert_eq!(interpret_reference("Name"), ("".into(), "Name".into()));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(interpret_reference(""), ("".into(), "".into()));
    }

    #[test]
    fn test_rust_path() {
        assert_eq!(
            interpret_reference("crate::models::User"),
            ("crate::models".into(), "User".into())
        );
    }

    #[test]
    fn test_generic_args_dropped() {
        assert_eq!(
            interpret_reference("api::Page<T>"),
            ("api".into(), "Page".into())
        );
    }

    #[test]
    fn test_raw_identifier() {
        assert_eq!(interpret_reference("r#type"), ("".into(), "type".into()));
    }

    #[test]
    fn test_json_pointer() {
        assert_eq!(
            interpret_reference("#/components/schemas/User~1Profile"),
            ("#/components/schemas".into(), "User/Profile".into())
        );
    }
}
