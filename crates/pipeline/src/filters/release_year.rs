//! Filter for an explicit set of release years.

use crate::traits::Filter;
use data_loader::MovieRecord;
use std::collections::BTreeSet;

/// Keeps movies released in one of the selected years.
///
/// Movies with an unknown year (0) never match a non-empty selection.
pub struct ReleaseYearFilter {
    years: BTreeSet<u16>,
}

impl ReleaseYearFilter {
    pub fn new(years: impl IntoIterator<Item = u16>) -> Self {
        Self {
            years: years.into_iter().filter(|&y| y != 0).collect(),
        }
    }
}

impl Filter for ReleaseYearFilter {
    fn name(&self) -> &str {
        "ReleaseYearFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        self.years.is_empty()
            || movie
                .known_year()
                .is_some_and(|year| self.years.contains(&year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year_filter() {
        let seven = MovieRecord::new("Se7en").with_year(1995);
        let matrix = MovieRecord::new("The Matrix").with_year(1999);
        let unknown = MovieRecord::new("Apollo 13");

        let filter = ReleaseYearFilter::new([1995, 1994]);
        assert!(filter.matches(&seven));
        assert!(!filter.matches(&matrix));
        assert!(!filter.matches(&unknown));

        // Selecting "year 0" is not a way to ask for unknown years
        assert!(ReleaseYearFilter::new([0]).matches(&matrix));
    }
}
