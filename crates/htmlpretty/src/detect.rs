//! Heuristic detection of HTML content.

use std::sync::LazyLock;

use regex::Regex;

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z]+)[^>]*>").expect("Invalid open tag regex"));

/// Returns `true` when `content` contains at least one balanced element: an
/// opening tag whose name (one or more ASCII letters) reappears later in a
/// matching closing tag.
///
/// The `regex` crate has no back-references, so the pair check is a two-pass
/// scan: capture each opening tag name, then search the remainder for its
/// closing tag. This is a single-pair heuristic, not a parser — it does not
/// verify nesting beyond the first matching pair and can be fooled by
/// unbalanced input. Never panics.
pub fn is_html(content: &str) -> bool {
    OPEN_TAG.captures_iter(content).any(|caps| {
        match (caps.get(0), caps.get(1)) {
            (Some(open), Some(name)) => {
                let closing = format!("</{}>", name.as_str());
                content[open.end()..].contains(&closing)
            }
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_element_is_html() {
        assert!(is_html("<p>hi</p>"));
    }

    #[test]
    fn test_plain_text_is_not_html() {
        assert!(!is_html("plain text"));
        assert!(!is_html(""));
    }

    #[test]
    fn test_unclosed_element_is_not_html() {
        assert!(!is_html("<p>unclosed"));
    }

    #[test]
    fn test_attributes_and_multiline_content() {
        assert!(is_html("<div class=\"a\">\n  line one\n  line two\n</div>"));
    }

    #[test]
    fn test_lone_closing_tag_is_not_html() {
        assert!(!is_html("</p> trailing"));
    }

    #[test]
    fn test_mismatched_pair_is_not_html() {
        assert!(!is_html("<p>text</div>"));
    }

    #[test]
    fn test_pair_found_after_unclosed_tag() {
        assert!(is_html("<br><span>x</span>"));
    }
}
