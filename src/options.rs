use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Caller-supplied overrides. Lists extend the defaults, they never replace
/// them; `allow_credentials` replaces the default when present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct CorsOptions {
    pub allow_credentials: Option<bool>,
    pub allow_headers: Vec<String>,
    pub allow_methods: Vec<String>,
    pub allow_origins: Vec<String>,
    pub expose_headers: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CORS options are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CorsOptions {
    /// Parses options from JSON text. Only malformed JSON is an error;
    /// wrong-typed values inside a valid document are ignored.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(input)?;
        Ok(Self::from_value(&value))
    }

    /// Reads recognized keys from a loosely typed value. Anything that is not
    /// an object yields the defaults.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            tracing::debug!("CORS options are not an object, using defaults");
            return Self::default();
        };

        Self {
            allow_credentials: read_bool(object, "allowCredentials", "allow_credentials"),
            allow_headers: read_list(object, "allowHeaders", "allow_headers"),
            allow_methods: read_list(object, "allowMethods", "allow_methods"),
            allow_origins: read_list(object, "allowOrigins", "allow_origins"),
            expose_headers: read_list(object, "exposeHeaders", "expose_headers"),
        }
    }
}

impl From<Value> for CorsOptions {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

fn lookup<'a>(object: &'a Map<String, Value>, key: &str, alias: &str) -> Option<&'a Value> {
    object.get(key).or_else(|| object.get(alias))
}

fn read_bool(object: &Map<String, Value>, key: &str, alias: &str) -> Option<bool> {
    match lookup(object, key, alias)? {
        Value::Bool(value) => Some(*value),
        _ => {
            tracing::debug!(option = key, "ignoring CORS option with non-boolean value");
            None
        }
    }
}

fn read_list(object: &Map<String, Value>, key: &str, alias: &str) -> Vec<String> {
    match lookup(object, key, alias) {
        None => Vec::new(),
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| entry.as_str().map(str::to_owned))
            .collect(),
        Some(_) => {
            tracing::debug!(option = key, "ignoring CORS option with non-list value");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
