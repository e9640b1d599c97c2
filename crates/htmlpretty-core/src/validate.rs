//! Validation of user-supplied configuration values.

use serde_json::Value;

use crate::config::{default_config, Config};
use crate::merge::merge;
use crate::{ConfigError, Result};

/// The fields a user configuration may override.
const CONFIG_FIELDS: &[&str] = &["tab_size", "strict", "ignore", "trim", "ignore_with"];

/// Largest integer magnitude representable without precision loss in an
/// IEEE 754 double (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Validate `user` against the default template and return the merged
/// [`Config`].
///
/// A valid but fractionless-float `tab_size` (such as `4.0`) is normalized
/// to an integer and written back into `user` in place before merging; this
/// is the only mutation any entry point performs on its input.
///
/// # Errors
///
/// Returns a [`ConfigError`] naming the offending field when any constraint
/// is violated. No partial configuration is produced on error.
pub fn validate_config(user: &mut Value) -> Result<Config> {
    validate_config_with(&default_config(), user)
}

/// Validate `user` against an explicit `defaults` template.
///
/// `defaults` is deep-copied before merging; the caller's value is never
/// mutated and never aliased by the result.
pub fn validate_config_with(defaults: &Value, user: &mut Value) -> Result<Config> {
    let fields = match user {
        Value::Object(fields) => fields,
        other => {
            return Err(ConfigError::InvalidConfigType {
                found: json_type(other),
            })
        }
    };

    // Nothing overridden: hand back the defaults without merging.
    if CONFIG_FIELDS.iter().all(|field| !fields.contains_key(*field)) {
        return Ok(serde_json::from_value(defaults.clone())?);
    }

    if let Some(value) = fields.get("tab_size") {
        let number = value.as_f64().ok_or(ConfigError::InvalidFieldType {
            field: "tab_size",
            expected: "number",
            found: json_type(value),
        })?;
        if !number.is_finite() || number.fract() != 0.0 || number.abs() > MAX_SAFE_INTEGER {
            return Err(ConfigError::TabSizeUnsafe { value: number });
        }
        let floored = number.floor() as i64;
        if !(1..=16).contains(&floored) {
            return Err(ConfigError::TabSizeOutOfRange { value: floored });
        }
        // Normalize in place so the merge sees a plain integer.
        fields.insert("tab_size".to_string(), Value::from(floored));
    }

    if let Some(value) = fields.get("strict") {
        if !value.is_boolean() {
            return Err(ConfigError::InvalidFieldType {
                field: "strict",
                expected: "boolean",
                found: json_type(value),
            });
        }
    }

    check_string_array(fields.get("ignore"), "ignore")?;

    if let Some(value) = fields.get("ignore_with") {
        if !value.is_string() {
            return Err(ConfigError::InvalidFieldType {
                field: "ignore_with",
                expected: "string",
                found: json_type(value),
            });
        }
    }

    check_string_array(fields.get("trim"), "trim")?;

    let merged = merge(defaults, user)?;
    Ok(serde_json::from_value(merged)?)
}

fn check_string_array(value: Option<&Value>, field: &'static str) -> Result<()> {
    match value {
        None => Ok(()),
        Some(Value::Array(items)) if items.iter().all(Value::is_string) => Ok(()),
        Some(_) => Err(ConfigError::InvalidFieldShape { field }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
