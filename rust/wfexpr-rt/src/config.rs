//! Function library configuration.
//!
//! Read from TOML; every section is optional and defaults are used for
//! anything left out:
//!
//! ```toml
//! [fromjson]
//! null = "reject"   # default: "null"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    #[serde(default)]
    pub fromjson: FromJsonConfig,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct FromJsonConfig {
    /// What a top-level JSON `null` decodes to.
    #[serde(default)]
    pub null: NullPolicy,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NullPolicy {
    /// Produce a Null value, as `fromJSON('null')` does on GitHub.
    #[default]
    Null,
    /// Fail with an unsupported type error.
    Reject,
}

impl FunctionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = FunctionConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, FunctionConfig::default());
        assert_eq!(cfg.fromjson.null, NullPolicy::Null);
    }

    #[test]
    fn test_reject_null_policy() {
        let cfg = FunctionConfig::from_toml_str("[fromjson]\nnull = \"reject\"\n").unwrap();
        assert_eq!(cfg.fromjson.null, NullPolicy::Reject);
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        assert!(FunctionConfig::from_toml_str("[fromjson]\nnull = \"zero\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("wfexpr-config-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("functions.toml");
        std::fs::write(&path, "[fromjson]\nnull = \"reject\"\n").unwrap();

        let cfg = FunctionConfig::load_from(&path).unwrap();
        assert_eq!(cfg.fromjson.null, NullPolicy::Reject);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("wfexpr-config-test-does-not-exist.toml");
        let err = FunctionConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read '"));
    }
}
