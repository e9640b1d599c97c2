//! # htmlpretty
//!
//! Content protection and configuration core for an HTML reformatter.
//!
//! A reformatting pass that rewrites whitespace and line breaks must not
//! touch the inside of elements like `<pre>` or `<script>`. This crate
//! provides the primitives such a pass is built around:
//!
//! - [`validate_config`] checks a partial user configuration and merges it
//!   onto the defaults, yielding one authoritative [`Config`]
//! - [`ignore_element`] shields the inner content of configured elements
//!   behind reversible sentinel markers, and restores it afterwards
//! - [`trimify`] strips whitespace immediately inside configured elements
//! - [`is_html`] is a quick structural check for "contains at least one
//!   balanced element", letting callers skip non-HTML input
//!
//! The reformatting algorithm itself lives with the caller; a typical run
//! is protect → reformat → unprotect.
//!
//! # Example
//!
//! ```rust
//! use htmlpretty::{protect, unprotect, validate_config};
//! use serde_json::json;
//!
//! let config = validate_config(&mut json!({ "ignore": ["pre"] })).unwrap();
//!
//! let html = "<p>\n  hi\n</p><pre>a < b\n  c</pre>";
//! let shielded = protect(html, &config);
//!
//! // The <pre> body carries no raw '<', '>' or whitespace any more, so a
//! // formatting pass can rewrite the string freely.
//! assert!(!shielded.contains("a < b"));
//!
//! // ...formatting happens here...
//!
//! assert_eq!(unprotect(&shielded, &config), html);
//! ```

pub mod detect;
pub mod guard;
pub mod trim;

pub use detect::is_html;
pub use guard::{ignore_element, protect, unprotect, GuardMode};
pub use htmlpretty_core::{
    default_config, merge, validate_config, validate_config_with, Config, ConfigError, Result,
};
pub use trim::trimify;
