use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Knobs for resolution and hierarchy walks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Upper bound on superclass/interface recursion. Malformed input may
    /// declare cyclic hierarchies, so every walk stops here.
    pub max_hierarchy_depth: usize,
    /// Packages imported on demand into every source file.
    pub implicit_packages: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_hierarchy_depth: 64,
            implicit_packages: vec!["java.lang".to_string()],
        }
    }
}

impl ModelConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        if config.max_hierarchy_depth == 0 {
            return Err(ModelError::Config(
                "max_hierarchy_depth must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    /// File prefix for the rolling appender (`<component>.log.<date>`).
    pub component: String,
    /// Fallback filter when `RUST_LOG` is not set.
    pub filter: String,
    pub to_stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            directory: home.join(".srcmodel/logs"),
            component: "srcmodel".to_string(),
            filter: "info".to_string(),
            to_stderr: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ModelConfig::from_json_str(r#"{"max_hierarchy_depth": 8}"#).unwrap();
        assert_eq!(config.max_hierarchy_depth, 8);
        assert_eq!(config.implicit_packages, vec!["java.lang".to_string()]);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let err = ModelConfig::from_json_str(r#"{"max_hierarchy_depth": 0}"#).unwrap_err();
        assert!(matches!(err, ModelError::Config(_)));
    }

    #[test]
    fn test_logging_config_from_json() {
        let config =
            LoggingConfig::from_json_str(r#"{"directory": "/tmp/x", "to_stderr": true}"#).unwrap();
        assert_eq!(config.directory, PathBuf::from("/tmp/x"));
        assert!(config.to_stderr);
        assert_eq!(config.filter, "info");
    }
}
