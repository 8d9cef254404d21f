//! # Data Loader Crate
//!
//! This crate loads the IMDb top-1000 movie dataset into a `Catalog`.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and the `Catalog` table with its lookups
//! - **parser**: CSV rows into typed records, with per-field defaults
//! - **index**: catalog construction, title uniqueness, secondary indices
//! - **error**: error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/imdb_top_1000.csv"))?;
//!
//! let index = catalog.find_title("the dark knight").unwrap();
//! let movie = catalog.get(index).unwrap();
//! println!("{} ({}) - {}", movie.title, movie.year, movie.rating);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{Catalog, MovieIndex, MovieRecord};
