//! Persisted configuration model

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// File name of the configuration, resolved against the working directory
pub const CONFIG_FILE_NAME: &str = "my-npx-config.json";

/// Name written by `init`
pub const DEFAULT_NAME: &str = "npx";

/// Configuration stored in `my-npx-config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name used in the greeting
    pub name: String,
}

impl Config {
    /// Create a configuration with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Resolved path of the configuration file inside `dir`
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Serialize with two-space indentation and no trailing newline
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse configuration content. The top level must be a JSON object whose
    /// `name` is a string; extra keys are ignored.
    pub fn from_json_str(content: &str) -> Result<Self> {
        // Derived struct deserialization also accepts sequences like `["npx"]`
        let map: Map<String, Value> = serde_json::from_str(content)?;
        Ok(Config::deserialize(Value::Object(map))?)
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NpxError;

    #[test]
    fn test_config_default() {
        assert_eq!(Config::default().name, "npx");
    }

    #[test]
    fn test_default_serializes_two_space_indent() {
        let json = Config::default().to_json_pretty().unwrap();
        assert_eq!(json, "{\n  \"name\": \"npx\"\n}");
    }

    #[test]
    fn test_path_in_joins_file_name() {
        let path = Config::path_in(Path::new("/work"));
        assert_eq!(path, PathBuf::from("/work/my-npx-config.json"));
    }

    #[test]
    fn test_parse_ignores_extra_keys() {
        let config = Config::from_json_str(r#"{"name": "Alice", "extra": [1, 2]}"#).unwrap();
        assert_eq!(config, Config::new("Alice"));
        assert_eq!(config.greeting(), "Hello, Alice!");
    }

    #[test]
    fn test_parse_rejects_missing_name() {
        let err = Config::from_json_str(r#"{"other": "x"}"#).unwrap_err();
        assert!(matches!(err, NpxError::Json(_)));
        assert!(err.to_string().contains("missing field `name`"));
    }

    #[test]
    fn test_parse_rejects_non_string_name() {
        let err = Config::from_json_str(r#"{"name": 42}"#).unwrap_err();
        assert!(matches!(err, NpxError::Json(_)));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(Config::from_json_str("{\"name\": ").is_err());
        assert!(Config::from_json_str("\"npx\"").is_err());
    }

    #[test]
    fn test_parse_rejects_top_level_sequence() {
        let err = Config::from_json_str(r#"["Mallory"]"#).unwrap_err();
        assert!(matches!(err, NpxError::Json(_)));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
