//! Recommender settings, loadable from a JSON file.
//!
//! ```json
//! { "default_k": 5, "tfidf": { "stop_words": true, "smooth_idf": false } }
//! ```
//!
//! Every field is optional and falls back to its default.

use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};
use similarity::TfidfConfig;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Number of similar titles returned when the caller gives no count
    pub default_k: usize,
    /// Vectorizer settings for the similarity engine
    pub tfidf: TfidfConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            default_k: 10,
            tfidf: TfidfConfig::default(),
        }
    }
}

impl RecommenderConfig {
    /// Read a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |reason: String| RecommendError::Config {
            path: path.display().to_string(),
            reason,
        };

        let text = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))
    }

    pub fn with_default_k(mut self, k: usize) -> Self {
        self.default_k = k;
        self
    }

    pub fn with_tfidf(mut self, tfidf: TfidfConfig) -> Self {
        self.tfidf = tfidf;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RecommenderConfig =
            serde_json::from_str(r#"{"tfidf": {"smooth_idf": false}}"#).unwrap();

        assert_eq!(config.default_k, 10);
        assert!(!config.tfidf.smooth_idf);
        assert!(config.tfidf.stop_words);
        assert_eq!(config.tfidf.min_token_chars, 2);
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "reel-recs-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"default_k": 3}"#).unwrap();

        let config = RecommenderConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, RecommenderConfig::default().with_default_k(3));
    }

    #[test]
    fn test_config_errors() {
        let missing = RecommenderConfig::from_json_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(RecommendError::Config { .. })));

        let path = std::env::temp_dir().join(format!(
            "reel-recs-bad-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let malformed = RecommenderConfig::from_json_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(malformed, Err(RecommendError::Config { .. })));
    }
}
