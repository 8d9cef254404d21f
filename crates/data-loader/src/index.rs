//! Catalog building and indexing logic.
//!
//! Turns parsed records into a `Catalog`:
//! - enforce title uniqueness (first occurrence wins)
//! - build the title lookups
//! - build secondary indices (genre_index, year_index)

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

impl Catalog {
    /// Load the catalog from an IMDb CSV file.
    ///
    /// This is the main entry point for loading data.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie catalog from {:?}", path);

        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        Self::from_named_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Load the catalog from any CSV stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_named_reader(reader, "<reader>")
    }

    fn from_named_reader<R: Read>(reader: R, source_name: &str) -> Result<Self> {
        let movies = parser::parse_movies(reader, source_name)?;
        let catalog = Self::build(movies, source_name)?;
        info!("Loaded {} movies from {}", catalog.len(), source_name);
        Ok(catalog)
    }

    /// Build a catalog from already-typed records.
    ///
    /// Records with a blank title are dropped, duplicate titles keep their
    /// first occurrence. Fails when nothing is left.
    pub fn from_records(movies: Vec<MovieRecord>) -> Result<Self> {
        Self::build(movies, "<records>")
    }

    fn build(movies: Vec<MovieRecord>, source_name: &str) -> Result<Self> {
        let mut catalog = Catalog {
            movies: Vec::with_capacity(movies.len()),
            title_index: HashMap::with_capacity(movies.len()),
            folded_title_index: HashMap::with_capacity(movies.len()),
            genre_index: BTreeMap::new(),
            year_index: BTreeMap::new(),
        };

        for movie in movies {
            catalog.insert_movie(movie);
        }

        if catalog.is_empty() {
            return Err(DataLoadError::EmptyCatalog {
                source_name: source_name.to_string(),
            });
        }

        catalog.build_secondary_indices();
        Ok(catalog)
    }

    /// Append a movie, keeping titles unique
    fn insert_movie(&mut self, mut movie: MovieRecord) {
        movie.title = movie.title.trim().to_string();
        if movie.title.is_empty() {
            warn!("Dropping movie with blank title");
            return;
        }
        if self.title_index.contains_key(&movie.title) {
            warn!("Dropping duplicate title {:?}", movie.title);
            return;
        }

        let index = self.movies.len();
        self.title_index.insert(movie.title.clone(), index);
        self.folded_title_index
            .entry(movie.title.to_lowercase())
            .or_insert(index);
        self.movies.push(movie);
    }

    /// Build secondary indices after the records are in place
    fn build_secondary_indices(&mut self) {
        self.genre_index.clear();
        self.year_index.clear();

        for (index, movie) in self.movies.iter().enumerate() {
            // Index by genres
            for genre in &movie.genres {
                self.genre_index
                    .entry(genre.clone())
                    .or_default()
                    .push(index);
            }

            // Index by release year (only if year is known)
            if let Some(year) = movie.known_year() {
                self.year_index.entry(year).or_default().push(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<MovieRecord> {
        vec![
            MovieRecord::new("Heat")
                .with_genres(["Action", "Crime"])
                .with_year(1995)
                .with_rating(8.3),
            MovieRecord::new("Se7en")
                .with_genres(["Crime", "Drama"])
                .with_year(1995)
                .with_rating(8.6),
            MovieRecord::new("heat")
                .with_genres(["Comedy"])
                .with_year(2001),
            MovieRecord::new("Heat").with_rating(1.0),
            MovieRecord::new("   "),
        ]
    }

    #[test]
    fn test_duplicates_and_blanks_dropped() {
        let catalog = Catalog::from_records(sample_records()).unwrap();

        // "Heat" duplicate and the blank title are gone, "heat" is distinct
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).unwrap().rating, 8.3);
    }

    #[test]
    fn test_find_title_prefers_exact_match() {
        let catalog = Catalog::from_records(sample_records()).unwrap();

        assert_eq!(catalog.find_title("Heat"), Some(0));
        assert_eq!(catalog.find_title("heat"), Some(2));
        assert_eq!(catalog.find_title("HEAT"), Some(0));
        assert_eq!(catalog.find_title("  Se7en "), Some(1));
        assert_eq!(catalog.find_title("se7en"), Some(1));
        assert_eq!(catalog.find_title("Ronin"), None);
    }

    #[test]
    fn test_secondary_indices() {
        let catalog = Catalog::from_records(sample_records()).unwrap();

        assert_eq!(catalog.get_movies_by_genre("Crime"), &[0, 1]);
        assert_eq!(catalog.get_movies_by_year(1995), &[0, 1]);
        assert!(catalog.get_movies_by_genre("Western").is_empty());
        assert_eq!(catalog.genres(), vec!["Action", "Comedy", "Crime", "Drama"]);
        assert_eq!(catalog.years(), vec![1995, 2001]);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let result = Catalog::from_records(vec![MovieRecord::new("")]);
        assert!(matches!(result, Err(DataLoadError::EmptyCatalog { .. })));
    }

    #[test]
    fn test_csv_without_usable_rows_is_an_error() {
        let header_only = Catalog::from_reader("Series_Title,Overview\n".as_bytes());
        assert!(matches!(
            header_only,
            Err(DataLoadError::EmptyCatalog { ref source_name }) if source_name == "<reader>"
        ));

        let blank_titles = Catalog::from_reader("Series_Title,Overview\n,orphan overview\n".as_bytes());
        assert!(matches!(blank_titles, Err(DataLoadError::EmptyCatalog { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = Catalog::load_from_file(Path::new("no/such/catalog.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
