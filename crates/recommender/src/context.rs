//! # Recommender Context
//!
//! Owns everything built at startup and answers both query kinds:
//! 1. Content similarity: "more like this title" from the precomputed matrix
//! 2. Attribute ranking: filter the catalog by constraints, best-rated first
//!
//! The context is immutable once built. Catalog and engine sit behind `Arc`,
//! so clones are cheap and share the same matrix across threads.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::RecommenderConfig;
use crate::error::{RecommendError, Result};
use data_loader::{Catalog, MovieRecord};
use pipeline::FilterCriteria;
use similarity::{ScoredMovie, SimilarityEngine};

/// A similar movie returned to the user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecommendation {
    pub title: String,
    pub year: Option<u16>,
    pub genres: Vec<String>,
    pub director: String,
    pub stars: Vec<String>,
    pub rating: f32,
    /// Cosine similarity to the query title, in `[0, 1]`
    pub score: f32,
    pub overview: String,
    pub poster_link: String,
}

impl MovieRecommendation {
    fn from_record(movie: &MovieRecord, score: f32) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.known_year(),
            genres: movie.genres.clone(),
            director: movie.director.clone(),
            stars: movie.stars.clone(),
            rating: movie.rating,
            score,
            overview: movie.overview.clone(),
            poster_link: movie.poster_link.clone(),
        }
    }
}

/// Catalog plus similarity engine, built once
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    engine: Arc<SimilarityEngine>,
    config: RecommenderConfig,
}

impl Recommender {
    /// Load the dataset and build the similarity matrix
    pub fn load(path: impl AsRef<Path>, config: RecommenderConfig) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();

        let catalog = Catalog::load_from_file(path)?;
        info!(
            "Loaded {} movies from {} in {:.2?}",
            catalog.len(),
            path.display(),
            start.elapsed()
        );

        Ok(Self::from_catalog(catalog, config))
    }

    /// Build the similarity engine over an already loaded catalog
    pub fn from_catalog(catalog: Catalog, config: RecommenderConfig) -> Self {
        let engine = SimilarityEngine::with_config(&catalog, config.tfidf.clone());

        Self {
            catalog: Arc::new(catalog),
            engine: Arc::new(engine),
            config,
        }
    }

    /// Titles of the up to `k` movies most similar to `title`
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<String>> {
        Ok(self
            .similar(title, k)?
            .into_iter()
            .filter_map(|hit| self.catalog.get(hit.index))
            .map(|movie| movie.title.clone())
            .collect())
    }

    /// Like [`Recommender::recommend`], with scores and display fields
    #[instrument(skip(self))]
    pub fn recommend_movies(&self, title: &str, k: usize) -> Result<Vec<MovieRecommendation>> {
        let recommendations: Vec<MovieRecommendation> = self
            .similar(title, k)?
            .into_iter()
            .filter_map(|hit| {
                self.catalog
                    .get(hit.index)
                    .map(|movie| MovieRecommendation::from_record(movie, hit.score))
            })
            .collect();

        info!(
            "Selected {} recommendations for '{}'",
            recommendations.len(),
            title
        );
        Ok(recommendations)
    }

    /// `recommend` with the configured default count
    pub fn recommend_default(&self, title: &str) -> Result<Vec<String>> {
        self.recommend(title, self.config.default_k)
    }

    /// Catalog movies satisfying every constraint, best-rated first
    pub fn filter_and_rank(&self, criteria: &FilterCriteria) -> Vec<&MovieRecord> {
        let start = Instant::now();
        let ranked = pipeline::filter_and_rank(&self.catalog, criteria);
        debug!(
            "Ranked {} movies by attributes in {:.2?}",
            ranked.len(),
            start.elapsed()
        );
        ranked
    }

    /// The `n` best-rated movies, used when no query is given
    pub fn top_rated(&self, n: usize) -> Vec<&MovieRecord> {
        pipeline::top_rated(&self.catalog, n)
    }

    /// Resolve a title (exact, then case-insensitive) to its record
    pub fn movie(&self, title: &str) -> Result<&MovieRecord> {
        self.catalog
            .get_by_title(title)
            .ok_or_else(|| RecommendError::NotFound {
                title: title.to_string(),
            })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    fn similar(&self, title: &str, k: usize) -> Result<Vec<ScoredMovie>> {
        Ok(self.engine.recommend(&self.catalog, title, k)?)
    }
}
