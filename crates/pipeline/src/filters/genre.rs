//! Filter to keep only movies in any of the selected genres.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps movies having at least one of the given genres.
///
/// Genre names compare case-insensitively against the movie's parsed genre
/// list, so "sci-fi" matches "Sci-Fi" but "Fi" matches nothing. An empty
/// selection keeps everything.
pub struct GenreFilter {
    genres: Vec<String>,
}

impl GenreFilter {
    pub fn new<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            genres: genres
                .into_iter()
                .map(|g| g.as_ref().trim().to_string())
                .filter(|g| !g.is_empty())
                .collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn matches(&self, movie: &MovieRecord) -> bool {
        self.genres.is_empty() || self.genres.iter().any(|genre| movie.has_genre(genre))
    }
}
