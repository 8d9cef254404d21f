//! Filter to keep only movies featuring any of the selected stars.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies where some star name contains one of the queries.
///
/// Matching is a case-insensitive substring test against each star, so
/// "hanks" finds "Tom Hanks". Blank queries are ignored.
pub struct StarFilter {
    queries: Vec<String>,
}

impl StarFilter {
    pub fn new<I, S>(stars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            queries: stars
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

impl Filter for StarFilter {
    fn name(&self) -> &str {
        "StarFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        if self.queries.is_empty() {
            return true;
        }

        movie.stars.iter().any(|star| {
            let star = star.to_lowercase();
            self.queries.iter().any(|query| star.contains(query.as_str()))
        })
    }
}
