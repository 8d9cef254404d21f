//! Filter implementations for the attribute pipeline.
//!
//! One filter per constraint a `FilterCriteria` can carry.

pub mod genre;
pub mod minimum_rating;
pub mod release_year;
pub mod star;
pub mod year_range;

// Re-export for convenience
pub use genre::GenreFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use release_year::ReleaseYearFilter;
pub use star::StarFilter;
pub use year_range::YearRangeFilter;
