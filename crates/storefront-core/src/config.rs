//! Recommender configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use storefront_catalog::DuplicatePolicy;

/// Storefront configuration, read from `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Number of similar items returned when the caller does not ask for a count
    pub default_top_n: usize,

    /// Rows shown in the trending listing
    pub trending_limit: usize,

    /// Characters of an item name shown before eliding
    pub name_display_len: usize,

    /// Drop English stop words from tag text before weighting
    pub use_stop_words: bool,

    /// Treatment of repeated item names at load time
    pub duplicate_policy: DuplicatePolicy,

    /// Memoize term-weight vectors per catalog snapshot
    pub cache_vectors: bool,
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self {
            default_top_n: 10,
            trending_limit: 8,
            name_display_len: 30,
            use_stop_words: true,
            duplicate_policy: DuplicatePolicy::FirstWins,
            cache_vectors: false,
        }
    }

    /// Read config from a JSON file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StorefrontConfig::new();
        assert_eq!(config.default_top_n, 10);
        assert_eq!(config.trending_limit, 8);
        assert!(config.use_stop_words);
        assert!(!config.cache_vectors);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::FirstWins);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let config = StorefrontConfig::load(Path::new("/nonexistent/config.json")).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"default_top_n": 4, "duplicate_policy": "reject"}"#).unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.default_top_n, 4);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(config.trending_limit, 8);
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(StorefrontConfig::load(&path).is_err());
    }
}
