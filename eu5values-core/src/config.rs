use crate::filter::SortMode;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Presentation settings for the view model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// How many "also affects" entries to list before collapsing into "+N more".
    pub other_effects_limit: usize,

    /// Sort used when the caller does not ask for one.
    pub default_sort: SortMode,

    /// Decimal places for numeric strengths.
    pub strength_precision: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            other_effects_limit: 3,
            default_sort: SortMode::ByCategory,
            strength_precision: 2,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.other_effects_limit, 3);
        assert_eq!(config.default_sort, SortMode::ByCategory);
        assert_eq!(config.strength_precision, 2);
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let config = ViewerConfig::from_json(r#"{ "default_sort": "strength-desc" }"#).unwrap();
        assert_eq!(config.default_sort, SortMode::StrengthDesc);
        assert_eq!(config.other_effects_limit, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.json");
        std::fs::write(&path, r#"{ "other_effects_limit": 5 }"#).unwrap();

        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.other_effects_limit, 5);

        let err = ViewerConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
