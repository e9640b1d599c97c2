//! The configuration record and its process-wide default template.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A complete, validated reformatter configuration.
///
/// Built by [`validate_config`](crate::validate_config) from the default
/// template plus user overrides. Immutable for the duration of a formatting
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Indentation width in spaces, 1 through 16.
    pub tab_size: usize,

    /// Apply stricter markup handling in the formatting pass.
    pub strict: bool,

    /// Element names whose inner content is shielded from reformatting.
    ///
    /// Order matters: names are protected in sequential passes, so when
    /// ignored elements can nest, earlier entries win.
    pub ignore: Vec<String>,

    /// Element names whose immediate inner leading/trailing whitespace is
    /// stripped.
    pub trim: Vec<String>,

    /// Token used to build the sentinel markers that stand in for escaped
    /// characters inside protected regions.
    pub ignore_with: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_size: 4,
            strict: false,
            ignore: Vec::new(),
            trim: Vec::new(),
            ignore_with: "pretty".to_string(),
        }
    }
}

/// The shared default template. Only ever exposed as a copy; handing out a
/// reference would let a later merge result alias into it.
static DEFAULT_CONFIG: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "tab_size": 4,
        "strict": false,
        "ignore": [],
        "trim": [],
        "ignore_with": "pretty"
    })
});

/// Returns a deep copy of the default configuration template.
///
/// Every call yields an independent value, so callers may mutate or merge
/// into the result without corrupting the defaults seen by subsequent calls.
pub fn default_config() -> Value {
    DEFAULT_CONFIG.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_matches_typed_default() {
        let typed = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(typed, default_config());
    }

    #[test]
    fn test_default_config_copies_are_independent() {
        let mut first = default_config();
        first["tab_size"] = json!(9);
        first["ignore"].as_array_mut().unwrap().push(json!("pre"));

        let second = default_config();
        assert_eq!(second["tab_size"], json!(4));
        assert_eq!(second["ignore"], json!([]));
    }

    #[test]
    fn test_default_round_trips_through_json() {
        let config = Config::default();
        let value = serde_json::to_value(&config).unwrap();
        let back: Config = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }
}
