//! Filter to a window of release years.
//!
//! Both bounds are inclusive and optional. An inverted window
//! (`min > max`) matches nothing.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies released within `[min, max]`.
///
/// With at least one bound set, movies with an unknown year are dropped.
pub struct YearRangeFilter {
    min: Option<u16>,
    max: Option<u16>,
}

impl YearRangeFilter {
    pub fn new(min: Option<u16>, max: Option<u16>) -> Self {
        Self { min, max }
    }

    /// Movies released in `year` or later
    pub fn since(year: u16) -> Self {
        Self::new(Some(year), None)
    }

    /// Movies released in `year` or earlier
    pub fn until(year: u16) -> Self {
        Self::new(None, Some(year))
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        if self.min.is_none() && self.max.is_none() {
            return true;
        }

        let Some(year) = movie.known_year() else {
            return false;
        };

        self.min.is_none_or(|min| year >= min) && self.max.is_none_or(|max| year <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_bounds() {
        let seven = MovieRecord::new("Se7en").with_year(1995);
        let matrix = MovieRecord::new("The Matrix").with_year(1999);
        let inception = MovieRecord::new("Inception").with_year(2010);

        let filter = YearRangeFilter::new(Some(1995), Some(1999));
        let filtered = filter.apply(vec![&seven, &matrix, &inception]);
        assert_eq!(filtered.len(), 2);

        assert!(YearRangeFilter::since(2010).matches(&inception));
        assert!(!YearRangeFilter::until(1994).matches(&seven));
    }

    #[test]
    fn test_unknown_year_and_inverted_range() {
        let unknown = MovieRecord::new("Apollo 13");
        let matrix = MovieRecord::new("The Matrix").with_year(1999);

        assert!(YearRangeFilter::new(None, None).matches(&unknown));
        assert!(!YearRangeFilter::until(2000).matches(&unknown));
        assert!(!YearRangeFilter::new(Some(2000), Some(1990)).matches(&matrix));
    }
}
