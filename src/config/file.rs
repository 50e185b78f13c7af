//! Configuration file data structures

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::swap::family::null_as_default;
use crate::swap::SubstitutionEntry;

use super::error::ConfigError;

/// Preferred configuration file name
pub const CONFIG_FILE_NAME: &str = ".usemin.toml";

/// JSON configuration file name, read when no TOML file exists
pub const JSON_CONFIG_FILE_NAME: &str = ".usemin.json";

/// Options recognized by the swap plugin
///
/// Every field is optional in the file; missing or `null` fields take their
/// defaults. Unknown keys are ignored.
///
/// # Examples
///
/// ```
/// use usemin::config::SwapOptions;
///
/// let options: SwapOptions = toml_edit::de::from_str(
///     r#"
/// entries = [{ path = "node_modules/p5/lib", fileName = "p5" }]
/// no-logs = true
/// "#,
/// )?;
/// assert_eq!(options.entries.len(), 1);
/// assert!(!options.disabled);
/// assert!(options.no_logs);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapOptions {
    /// File families to substitute, in order
    #[serde(deserialize_with = "null_as_default")]
    pub entries: Vec<SubstitutionEntry>,

    /// Turn the whole component off without removing its configuration
    #[serde(deserialize_with = "null_as_default")]
    pub disabled: bool,

    /// Silence informational and warning logs (rename errors still print)
    #[serde(
        rename = "no-logs",
        alias = "noLogs",
        alias = "no_logs",
        deserialize_with = "null_as_default"
    )]
    pub no_logs: bool,
}

impl SwapOptions {
    /// Build options from an untyped JSON value
    ///
    /// Only a JSON object is accepted. `null`, arrays and scalars are rejected
    /// with [`ConfigError::NotPlainObject`] before any field is looked at.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if !value.is_object() {
            return Err(ConfigError::NotPlainObject {
                found: json_kind(&value),
            });
        }
        serde_json::from_value(value).map_err(|e| ConfigError::Parse {
            origin: "<options>".to_string(),
            message: e.to_string(),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
