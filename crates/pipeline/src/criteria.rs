//! User-selected attribute constraints.

use serde::{Deserialize, Serialize};

/// Constraints for attribute ranking.
///
/// Every option is independent and they combine with AND. Absent or empty
/// options impose nothing, so `FilterCriteria::default()` keeps the whole
/// catalog. List options (`genres`, `stars`, `years`) are any-of.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Genre names, matched case-insensitively against whole genres
    pub genres: Vec<String>,
    /// Star names or fragments of them, matched case-insensitively
    pub stars: Vec<String>,
    /// Explicit release years
    pub years: Vec<u16>,
    /// Earliest release year, inclusive
    pub year_min: Option<u16>,
    /// Latest release year, inclusive
    pub year_max: Option<u16>,
    /// Lowest IMDb rating, inclusive
    pub rating_min: Option<f32>,
    /// Truncate the ranked result to this many movies
    pub limit: Option<usize>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(genres.into_iter().map(Into::into));
        self
    }

    pub fn with_star(mut self, star: impl Into<String>) -> Self {
        self.stars.push(star.into());
        self
    }

    pub fn with_stars<I, S>(mut self, stars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stars.extend(stars.into_iter().map(Into::into));
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.years.push(year);
        self
    }

    pub fn with_years(mut self, years: impl IntoIterator<Item = u16>) -> Self {
        self.years.extend(years);
        self
    }

    /// Inclusive release-year window; either side may be open
    pub fn with_year_range(mut self, min: Option<u16>, max: Option<u16>) -> Self {
        self.year_min = min;
        self.year_max = max;
        self
    }

    pub fn with_rating_min(mut self, rating: f32) -> Self {
        self.rating_min = Some(rating);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True when no option restricts the result set (`limit` aside)
    pub fn is_unconstrained(&self) -> bool {
        self.genres.iter().all(|g| g.trim().is_empty())
            && self.stars.iter().all(|s| s.trim().is_empty())
            && self.years.iter().all(|&y| y == 0)
            && self.year_min.is_none()
            && self.year_max.is_none()
            && self.rating_min.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let criteria = FilterCriteria::new()
            .with_genre("Sci-Fi")
            .with_stars(["Keanu Reeves", "Tom Hanks"])
            .with_year_range(Some(1990), None)
            .with_rating_min(8.0)
            .with_limit(5);

        assert_eq!(criteria.genres, vec!["Sci-Fi"]);
        assert_eq!(criteria.stars.len(), 2);
        assert_eq!(criteria.year_min, Some(1990));
        assert_eq!(criteria.limit, Some(5));
        assert!(!criteria.is_unconstrained());
    }

    #[test]
    fn test_default_is_unconstrained() {
        assert!(FilterCriteria::default().is_unconstrained());
        assert!(FilterCriteria::new().with_limit(3).is_unconstrained());
        assert!(FilterCriteria::new().with_genre(" ").is_unconstrained());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"genres": ["Drama"], "rating_min": 8.5}"#).unwrap();

        assert_eq!(criteria.genres, vec!["Drama"]);
        assert_eq!(criteria.rating_min, Some(8.5));
        assert!(criteria.stars.is_empty());
        assert_eq!(criteria.limit, None);
    }
}
