//! Core domain types for the IMDb movie catalog.
//!
//! `MovieRecord` is one validated row of the dataset. `Catalog` owns the
//! ordered records plus the lookup tables built over them. Records are never
//! mutated or reordered once a catalog exists, so a `MovieIndex` handed out
//! by one component stays valid for every other component.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a movie in the catalog.
///
/// Feature vectors and similarity-matrix rows are laid out in the same order,
/// so this index addresses all three.
pub type MovieIndex = usize;

// =============================================================================
// Movie Record
// =============================================================================

/// One movie from the dataset, with typed fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    /// Unique within a catalog
    pub title: String,
    pub overview: String,
    /// Genres in dataset order, e.g. `["Action", "Crime", "Drama"]`
    pub genres: Vec<String>,
    pub director: String,
    /// Billed stars (Star1..Star4), blanks removed
    pub stars: Vec<String>,
    /// Release year, 0 when the dataset had none
    pub year: u16,
    /// IMDb rating on a 0-10 scale, 0.0 when the dataset had none
    pub rating: f32,
    pub poster_link: String,
    pub certificate: String,
    pub runtime_minutes: u16,
    pub votes: u32,
}

impl MovieRecord {
    /// Create a record with only a title; every other field takes its
    /// "missing" default.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            overview: String::new(),
            genres: Vec::new(),
            director: String::new(),
            stars: Vec::new(),
            year: 0,
            rating: 0.0,
            poster_link: String::new(),
            certificate: String::new(),
            runtime_minutes: 0,
            votes: 0,
        }
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    pub fn with_stars<I, S>(mut self, stars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stars = stars.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Genres as the dataset spells them: `"Action, Crime, Drama"`
    pub fn genre_label(&self) -> String {
        self.genres.join(", ")
    }

    /// Stars joined for display and for the text feature
    pub fn stars_label(&self) -> String {
        self.stars.join(", ")
    }

    /// Release year, or `None` when the dataset had no usable value
    pub fn known_year(&self) -> Option<u16> {
        (self.year != 0).then_some(self.year)
    }

    /// Case-insensitive genre membership
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre.trim()))
    }
}

// =============================================================================
// Catalog - The In-Memory Table
// =============================================================================

/// The full, ordered set of movies plus lookup tables.
///
/// Built once by the loader (see `index.rs`) and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Records in load order
    pub(crate) movies: Vec<MovieRecord>,

    /// Exact title -> index
    pub(crate) title_index: HashMap<String, MovieIndex>,
    /// Lowercased title -> first index with that spelling
    pub(crate) folded_title_index: HashMap<String, MovieIndex>,

    // Secondary indices
    /// Movies grouped by genre (one movie appears under each of its genres)
    pub(crate) genre_index: BTreeMap<String, Vec<MovieIndex>>,
    /// Movies grouped by known release year
    pub(crate) year_index: BTreeMap<u16, Vec<MovieIndex>>,
}

impl Catalog {
    /// Number of movies
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All records in catalog order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Get a movie by catalog index
    pub fn get(&self, index: MovieIndex) -> Option<&MovieRecord> {
        self.movies.get(index)
    }

    /// Resolve a title to its catalog index.
    ///
    /// An exact match wins; otherwise the first case-insensitive match in
    /// catalog order is returned.
    pub fn find_title(&self, title: &str) -> Option<MovieIndex> {
        let title = title.trim();
        self.title_index
            .get(title)
            .or_else(|| self.folded_title_index.get(&title.to_lowercase()))
            .copied()
    }

    /// Get a movie by title (see [`Catalog::find_title`])
    pub fn get_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.find_title(title).and_then(|index| self.get(index))
    }

    /// All movies listed under a genre, in catalog order
    pub fn get_movies_by_genre(&self, genre: &str) -> &[MovieIndex] {
        self.genre_index
            .get(genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All movies released in a specific year
    pub fn get_movies_by_year(&self, year: u16) -> &[MovieIndex] {
        self.year_index
            .get(&year)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Sorted titles
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.movies.iter().map(|m| m.title.as_str()).collect();
        titles.sort_unstable();
        titles
    }

    /// Sorted distinct genres
    pub fn genres(&self) -> Vec<&str> {
        self.genre_index.keys().map(String::as_str).collect()
    }

    /// Sorted distinct known release years
    pub fn years(&self) -> Vec<u16> {
        self.year_index.keys().copied().collect()
    }

    /// Sorted distinct star names
    pub fn stars(&self) -> Vec<&str> {
        self.movies
            .iter()
            .flat_map(|m| m.stars.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Case-insensitive substring search over titles.
    ///
    /// Exact (case-insensitive) matches come first, then the rest by rating
    /// descending; remaining ties keep catalog order. A blank query matches
    /// nothing.
    pub fn search_titles(&self, query: &str) -> Vec<MovieIndex> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<(bool, MovieIndex)> = self
            .movies
            .iter()
            .enumerate()
            .filter_map(|(index, movie)| {
                let title = movie.title.to_lowercase();
                if title == needle {
                    Some((true, index))
                } else if title.contains(&needle) {
                    Some((false, index))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then_with(|| self.movies[b.1].rating.total_cmp(&self.movies[a.1].rating))
        });
        matches.into_iter().map(|(_, index)| index).collect()
    }
}
