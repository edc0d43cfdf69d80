//! # Markdown Rendering
//!
//! CommonMark to HTML with every optional extension disabled.

use pulldown_cmark::{html, Options, Parser};
use regex::Regex;
use std::sync::OnceLock;

/// Renders `text` as HTML.
pub fn render_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Removes paragraph tags and surrounding whitespace from rendered HTML.
pub fn strip_paragraphs(html: &str) -> String {
    static P_TAGS_RE: OnceLock<Regex> = OnceLock::new();
    let p_tags_re = P_TAGS_RE.get_or_init(|| Regex::new(r"(<p>)|(</p>)").expect("Invalid regex"));

    p_tags_re.replace_all(html, "").trim().to_string()
}

/// Renders a description to the inline HTML stored on definitions.
pub fn render_description(text: &str) -> String {
    strip_paragraphs(&render_html(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_markup() {
        assert_eq!(
            render_description("Use `code` and *emphasis*."),
            "Use <code>code</code> and <em>emphasis</em>."
        );
    }

    #[test]
    fn test_escapes_html() {
        assert_eq!(render_description("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_description(""), "");
    }

    #[test]
    fn test_no_extensions() {
        // Strikethrough is an extension in pulldown-cmark.
        assert_eq!(render_description("~~gone~~"), "~~gone~~");
    }

    #[test]
    fn test_strip_paragraphs_keeps_other_tags() {
        assert_eq!(
            strip_paragraphs("<p>one</p>\n<p><strong>two</strong></p>\n"),
            "one\n<strong>two</strong>"
        );
    }
}
