//! Error types for the recommender context.

use data_loader::DataLoadError;
use similarity::SimilarityError;
use thiserror::Error;

/// Errors surfaced by [`crate::Recommender`]
#[derive(Error, Debug)]
pub enum RecommendError {
    /// The query title matches no movie in the catalog
    #[error("Movie not found: {title}")]
    NotFound { title: String },

    /// The catalog could not be loaded
    #[error("Failed to load catalog: {0}")]
    Load(#[from] DataLoadError),

    /// The configuration file is missing or malformed
    #[error("Invalid config {path}: {reason}")]
    Config { path: String, reason: String },

    /// The similarity engine rejected the query
    #[error("Similarity query failed: {0}")]
    Similarity(SimilarityError),
}

impl From<SimilarityError> for RecommendError {
    fn from(err: SimilarityError) -> Self {
        match err {
            SimilarityError::NotFound { title } => RecommendError::NotFound { title },
            other => RecommendError::Similarity(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
