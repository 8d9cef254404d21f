//! Attribute filtering and rating-based ranking of catalog movies.
//!
//! This crate provides:
//! - Filter trait and one implementation per attribute constraint
//! - FilterPipeline for composing filters
//! - FilterCriteria, the serializable set of user-selected constraints
//! - ranking helpers (`filter_and_rank`, `top_rated`)
//!
//! ## Architecture
//! A query runs in two stages:
//! 1. Filters drop movies violating any constraint (genre, star, year, rating)
//! 2. Survivors are sorted by IMDb rating, best first, and optionally truncated
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_and_rank, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_genre("Sci-Fi")
//!     .with_rating_min(8.0)
//!     .with_limit(10);
//!
//! for movie in filter_and_rank(&catalog, &criteria) {
//!     println!("{} ({})", movie.title, movie.rating);
//! }
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod ranker;
pub mod traits;

// Re-export main types
pub use criteria::FilterCriteria;
pub use filter_pipeline::FilterPipeline;
pub use ranker::{filter_and_rank, rank_by_rating, top_rated};
pub use traits::Filter;
