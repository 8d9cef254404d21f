//! Vectorizer settings.

use serde::{Deserialize, Serialize};

/// Knobs for tokenization and IDF weighting.
///
/// The defaults reproduce the classic English TF-IDF setup: stop words
/// removed, tokens of two or more characters, smoothed IDF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfidfConfig {
    /// Drop English stop words before weighting
    pub stop_words: bool,
    /// Shortest token kept, in characters
    pub min_token_chars: usize,
    /// Use `ln((1 + n) / (1 + df)) + 1` instead of `ln(n / df) + 1`
    pub smooth_idf: bool,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            stop_words: true,
            min_token_chars: 2,
            smooth_idf: true,
        }
    }
}

impl TfidfConfig {
    /// Configure stop-word removal (default: true)
    pub fn with_stop_words(mut self, enabled: bool) -> Self {
        self.stop_words = enabled;
        self
    }

    /// Configure the minimum token length (default: 2)
    pub fn with_min_token_chars(mut self, chars: usize) -> Self {
        self.min_token_chars = chars.max(1);
        self
    }

    /// Configure IDF smoothing (default: true)
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }
}
