//! Protect and restore the inner content of ignored elements.
//!
//! A reformatting pass keys on `<`, `>` and whitespace. Before it runs, the
//! content of each configured element is "protected": those characters are
//! swapped for sentinel markers built from the configured token, so the
//! formatter sees one opaque word. After formatting, the mirror pass swaps
//! the markers back.

use htmlpretty_core::Config;
use regex::{Captures, Regex};

/// Direction of an [`ignore_element`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardMode {
    /// Replace reserved characters with sentinel markers.
    Protect,
    /// Replace sentinel markers with their original characters.
    Unprotect,
}

/// Shield or restore the content of each element named in `ignore_list`.
///
/// Names are processed in list order, each as a full pass over the string,
/// never as one combined pattern. When ignored elements nest, an earlier
/// entry's pass protects content that a later entry would otherwise match,
/// so list order is part of the contract. Matching is case-sensitive on the
/// exact tag name, ignores attributes, and takes the first same-named
/// closing tag (nested same-name elements terminate at the inner close, an
/// inherited quirk).
///
/// Names absent from the input produce no substitutions; the function never
/// fails.
pub fn ignore_element<S: AsRef<str>>(
    html: &str,
    ignore_list: &[S],
    mode: GuardMode,
    sentinel_prefix: &str,
) -> String {
    let mut output = html.to_string();
    for name in ignore_list {
        let Some(pattern) = element_pattern(name.as_ref()) else {
            continue;
        };
        output = pattern
            .replace_all(&output, |caps: &Captures<'_>| {
                let inner = match mode {
                    GuardMode::Protect => protect_content(&caps[2], sentinel_prefix),
                    GuardMode::Unprotect => unprotect_content(&caps[2], sentinel_prefix),
                };
                format!("{}{}{}", &caps[1], inner, &caps[3])
            })
            .into_owned();
    }
    output
}

/// Protect the elements named by `config.ignore` using `config.ignore_with`.
pub fn protect(html: &str, config: &Config) -> String {
    ignore_element(html, &config.ignore, GuardMode::Protect, &config.ignore_with)
}

/// Restore content previously shielded by [`protect`] with the same config.
pub fn unprotect(html: &str, config: &Config) -> String {
    ignore_element(html, &config.ignore, GuardMode::Unprotect, &config.ignore_with)
}

/// `(open tag)(lazy inner content)(closing tag)` for one element name.
/// Exact-name match: `<pre>` and `<pre class="x">` but not `<prefix>`.
fn element_pattern(name: &str) -> Option<Regex> {
    let name = regex::escape(name);
    Regex::new(&format!(r"(?s)(<{name}(?:\s[^>]*)?>)(.*?)(</{name}>)")).ok()
}

fn marker(prefix: &str, kind: &str) -> String {
    format!("-{prefix}{kind}-")
}

fn protect_content(content: &str, prefix: &str) -> String {
    let mut protected = String::with_capacity(content.len());
    for ch in content.chars() {
        match ch {
            '<' => protected.push_str(&marker(prefix, "lt")),
            '>' => protected.push_str(&marker(prefix, "gt")),
            '\n' => protected.push_str(&marker(prefix, "nl")),
            '\r' => protected.push_str(&marker(prefix, "cr")),
            ch if ch.is_whitespace() => protected.push_str(&marker(prefix, "ws")),
            ch => protected.push(ch),
        }
    }
    protected
}

/// Inverse of [`protect_content`]. The `ws` marker does not record which
/// whitespace character it replaced and restores a space; whitespace other
/// than space, `\n` and `\r` is collapsed by a round trip.
fn unprotect_content(content: &str, prefix: &str) -> String {
    content
        .replace(&marker(prefix, "lt"), "<")
        .replace(&marker(prefix, "gt"), ">")
        .replace(&marker(prefix, "nl"), "\n")
        .replace(&marker(prefix, "cr"), "\r")
        .replace(&marker(prefix, "ws"), " ")
}
