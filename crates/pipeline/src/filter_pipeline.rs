//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{
    GenreFilter, MinimumRatingFilter, ReleaseYearFilter, StarFilter, YearRangeFilter,
};
use crate::traits::Filter;
use data_loader::MovieRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(["Sci-Fi"]))
///     .add_filter(MinimumRatingFilter::new(8.0));
///
/// let kept = pipeline.apply(catalog.movies().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// One filter per constraint present in `criteria`.
    ///
    /// Cheap, selective filters run first.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();

        if let Some(rating) = criteria.rating_min {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(rating));
        }
        if criteria.year_min.is_some() || criteria.year_max.is_some() {
            pipeline =
                pipeline.add_filter(YearRangeFilter::new(criteria.year_min, criteria.year_max));
        }
        if criteria.years.iter().any(|&y| y != 0) {
            pipeline = pipeline.add_filter(ReleaseYearFilter::new(criteria.years.iter().copied()));
        }
        if criteria.genres.iter().any(|g| !g.trim().is_empty()) {
            pipeline = pipeline.add_filter(GenreFilter::new(&criteria.genres));
        }
        if criteria.stars.iter().any(|s| !s.trim().is_empty()) {
            pipeline = pipeline.add_filter(StarFilter::new(&criteria.stars));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence, keeping the incoming order.
    pub fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("The Matrix")
                .with_genres(["Action", "Sci-Fi"])
                .with_year(1999)
                .with_rating(8.7),
            MovieRecord::new("Heat")
                .with_genres(["Action", "Crime", "Drama"])
                .with_year(1995)
                .with_rating(8.3),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let movies = movies();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let movies = movies();
        let pipeline = FilterPipeline::new().add_filter(MinimumRatingFilter::new(8.5));

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "The Matrix");
    }

    #[test]
    fn test_from_criteria_skips_absent_options() {
        assert!(FilterPipeline::from_criteria(&FilterCriteria::default()).is_empty());

        let criteria = FilterCriteria::new()
            .with_genre("Drama")
            .with_year_range(Some(1990), Some(1999))
            .with_rating_min(8.0);
        let pipeline = FilterPipeline::from_criteria(&criteria);
        assert_eq!(
            pipeline.filter_names(),
            vec!["MinimumRatingFilter", "YearRangeFilter", "GenreFilter"]
        );

        let movies = movies();
        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Heat");
    }
}
