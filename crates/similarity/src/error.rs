//! Error types for similarity queries.

use thiserror::Error;

/// Errors returned by [`crate::SimilarityEngine`] queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    /// The query title matches no movie in the catalog
    #[error("Movie not found: {title}")]
    NotFound { title: String },

    /// The engine was queried with a catalog it was not built from
    #[error("Catalog has {catalog} movies but the engine was built for {engine}")]
    CatalogMismatch { catalog: usize, engine: usize },
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
