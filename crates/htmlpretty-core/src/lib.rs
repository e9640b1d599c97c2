//! htmlpretty-core - configuration model, deep merge and validation
//!
//! This crate holds the configuration side of the `htmlpretty` reformatter:
//! the typed [`Config`] record, the shared default template, a generic deep
//! merge over JSON-like values, and the validation pass that turns a partial
//! user configuration into a complete one.
//!
//! # Architecture
//!
//! ```text
//! user Value ──validate──▶ ┌────────────┐
//!                          │ deep merge │ ──deserialize──▶ Config
//! default template ───────▶│            │
//!                          └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use htmlpretty_core::validate_config;
//! use serde_json::json;
//!
//! let mut user = json!({ "tab_size": 2, "ignore": ["pre"] });
//! let config = validate_config(&mut user).unwrap();
//!
//! assert_eq!(config.tab_size, 2);
//! assert_eq!(config.ignore, vec!["pre".to_string()]);
//! // Fields the user left out come from the default template.
//! assert!(!config.strict);
//! ```

mod config;
mod merge;
mod validate;

pub use config::{default_config, Config};
pub use merge::merge;
pub use validate::{validate_config, validate_config_with};

/// Error type for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A merge operand was null or missing.
    #[error("merge requires both a base and an update value")]
    InvalidArgument,

    /// The top-level configuration was not an object.
    #[error("configuration must be an object, got {found}")]
    InvalidConfigType {
        /// JSON type of the value that was supplied instead.
        found: &'static str,
    },

    /// A field held a value of the wrong type.
    #[error("`{field}` must be a {expected}, got {found}")]
    InvalidFieldType {
        /// Name of the offending field.
        field: &'static str,
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type actually observed.
        found: &'static str,
    },

    /// A list field was not an array of strings.
    #[error("`{field}` must be an array of strings")]
    InvalidFieldShape {
        /// Name of the offending field.
        field: &'static str,
    },

    /// `tab_size` was numeric but not a safe integer.
    #[error("`tab_size` must be a safe integer, got {value}")]
    TabSizeUnsafe {
        /// The unsafe number as supplied.
        value: f64,
    },

    /// `tab_size` fell outside the accepted range after flooring.
    #[error("`tab_size` must be between 1 and 16, got {value}")]
    TabSizeOutOfRange {
        /// The floored value that was rejected.
        value: i64,
    },

    /// The merged configuration failed to deserialize into [`Config`].
    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
