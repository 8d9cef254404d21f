//! Content-similarity engine.
//!
//! Vectorizes every catalog movie once, precomputes the cosine matrix and
//! answers "movies like this one" queries from it.

use crate::config::TfidfConfig;
use crate::error::{Result, SimilarityError};
use crate::features::feature_texts;
use crate::matrix::SimilarityMatrix;
use crate::tfidf::{FeatureVector, TfidfVectorizer};
use data_loader::{Catalog, MovieIndex};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// A neighbour of the query movie with its cosine score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredMovie {
    pub index: MovieIndex,
    pub score: f32,
}

/// TF-IDF vectors plus the pairwise similarity matrix for one catalog
///
/// Row `i` of the matrix and `vectors[i]` describe catalog movie `i`; the
/// engine must be queried with the catalog it was built from.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    config: TfidfConfig,
    vectorizer: TfidfVectorizer,
    vectors: Vec<FeatureVector>,
    matrix: SimilarityMatrix,
}

impl SimilarityEngine {
    /// Build with the default English TF-IDF settings
    pub fn build(catalog: &Catalog) -> Self {
        Self::with_config(catalog, TfidfConfig::default())
    }

    #[instrument(skip(catalog, config), fields(movies = catalog.len()))]
    pub fn with_config(catalog: &Catalog, config: TfidfConfig) -> Self {
        let start = Instant::now();

        let documents = feature_texts(catalog);
        let mut vectorizer = TfidfVectorizer::new(&config);
        let vectors = vectorizer.fit_transform(&documents);
        debug!(
            "Vectorized {} movies into {} terms in {:?}",
            vectors.len(),
            vectorizer.vocabulary_size(),
            start.elapsed()
        );

        let matrix = SimilarityMatrix::from_vectors(&vectors);

        info!(
            "Built similarity matrix: {} movies, vocabulary {}, {:?}",
            matrix.len(),
            vectorizer.vocabulary_size(),
            start.elapsed()
        );

        Self {
            config,
            vectorizer,
            vectors,
            matrix,
        }
    }

    /// Up to `k` movies most similar to `title`
    ///
    /// The title resolves exactly, then case-insensitively. The query movie
    /// is never part of the result. Ties keep catalog order.
    #[instrument(skip(self, catalog))]
    pub fn recommend(&self, catalog: &Catalog, title: &str, k: usize) -> Result<Vec<ScoredMovie>> {
        if catalog.len() != self.matrix.len() {
            return Err(SimilarityError::CatalogMismatch {
                catalog: catalog.len(),
                engine: self.matrix.len(),
            });
        }

        let index = catalog
            .find_title(title)
            .ok_or_else(|| SimilarityError::NotFound {
                title: title.to_string(),
            })?;

        let neighbours = self.similar_to(index, k);
        debug!("Found {} neighbours for index {}", neighbours.len(), index);
        Ok(neighbours)
    }

    /// Up to `k` nearest neighbours of a catalog index
    ///
    /// Out-of-range indices have no neighbours.
    pub fn similar_to(&self, index: MovieIndex, k: usize) -> Vec<ScoredMovie> {
        let Some(row) = self.matrix.row(index) else {
            return Vec::new();
        };
        if k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<ScoredMovie> = row
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .map(|(other, &score)| ScoredMovie {
                index: other,
                score,
            })
            .collect();

        // Stable sort: equal scores stay in ascending index order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(k);
        scored
    }

    /// Cosine similarity between two catalog indices
    pub fn score(&self, a: MovieIndex, b: MovieIndex) -> Option<f32> {
        self.matrix.get(a, b)
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    pub fn config(&self) -> &TfidfConfig {
        &self.config
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    pub fn vector(&self, index: MovieIndex) -> Option<&FeatureVector> {
        self.vectors.get(index)
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }
}
