//! Recommender crate for the ReelRecs movie recommender.
//!
//! This crate contains the [`Recommender`] context that ties the catalog,
//! the similarity engine and the attribute pipeline together.
//!
//! ```ignore
//! use recommender::{Recommender, RecommenderConfig};
//! use pipeline::FilterCriteria;
//!
//! let recommender = Recommender::load("data/imdb_top_1000.csv", RecommenderConfig::default())?;
//!
//! let similar = recommender.recommend("The Dark Knight", 10)?;
//! let sci_fi = recommender.filter_and_rank(&FilterCriteria::new().with_genre("Sci-Fi"));
//! ```

pub mod config;
pub mod context;
pub mod error;

pub use config::RecommenderConfig;
pub use context::{MovieRecommendation, Recommender};
pub use error::{RecommendError, Result};

// Types callers need to build queries and read results
pub use data_loader::{Catalog, MovieRecord};
pub use pipeline::FilterCriteria;
