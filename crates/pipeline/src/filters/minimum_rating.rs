//! Filter to ensure a minimum IMDb rating.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Removes movies rated below the threshold (inclusive lower bound).
pub struct MinimumRatingFilter {
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Lowest IMDb rating kept, on the 0-10 scale
    pub fn new(min_rating: f32) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        movie.rating >= self.min_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_rating_filter() {
        let shawshank = MovieRecord::new("The Shawshank Redemption").with_rating(9.3);
        let matrix = MovieRecord::new("The Matrix").with_rating(8.7);
        let apollo = MovieRecord::new("Apollo 13").with_rating(7.6);

        let filter = MinimumRatingFilter::new(8.7);
        let filtered = filter.apply(vec![&shawshank, &matrix, &apollo]);

        let titles: Vec<&str> = filtered.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["The Shawshank Redemption", "The Matrix"]);
    }
}
