//! # Similarity Crate
//!
//! Content-based "more like this" recommendations over a movie catalog.
//!
//! ## Components
//!
//! - **features**: one text document per movie (overview, genres, director, stars)
//! - **tokenizer**: lowercase word tokens with English stop words removed
//! - **tfidf**: vocabulary, IDF weights and sparse normalized vectors
//! - **matrix**: precomputed pairwise cosine similarities (built with rayon)
//! - **engine**: `SimilarityEngine`, the query entry point
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use similarity::SimilarityEngine;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/imdb_top_1000.csv"))?;
//! let engine = SimilarityEngine::build(&catalog);
//!
//! for hit in engine.recommend(&catalog, "The Dark Knight", 10)? {
//!     println!("{:.3}  {}", hit.score, catalog.get(hit.index).unwrap().title);
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod matrix;
pub mod tfidf;
pub mod tokenizer;

pub use config::TfidfConfig;
pub use engine::{ScoredMovie, SimilarityEngine};
pub use error::{Result, SimilarityError};
pub use matrix::SimilarityMatrix;
pub use tfidf::{FeatureVector, TfidfVectorizer};

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Catalog;

    const SAMPLE: &str = include_str!("../../../data/imdb_sample.csv");

    fn sample() -> (Catalog, SimilarityEngine) {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        let engine = SimilarityEngine::build(&catalog);
        (catalog, engine)
    }

    fn titles(catalog: &Catalog, hits: &[ScoredMovie]) -> Vec<String> {
        hits.iter()
            .map(|h| catalog.get(h.index).unwrap().title.clone())
            .collect()
    }

    #[test]
    fn test_sequel_is_nearest() {
        let (catalog, engine) = sample();

        let hits = engine.recommend(&catalog, "The Dark Knight", 3).unwrap();
        assert_eq!(titles(&catalog, &hits)[0], "The Dark Knight Rises");
    }

    #[test]
    fn test_shared_director_and_star() {
        let (catalog, engine) = sample();

        let hits = engine.recommend(&catalog, "Se7en", 1).unwrap();
        assert_eq!(titles(&catalog, &hits), vec!["Fight Club"]);

        let hits = engine.recommend(&catalog, "forrest gump", 1).unwrap();
        assert_eq!(titles(&catalog, &hits), vec!["Apollo 13"]);
    }

    #[test]
    fn test_never_recommends_itself() {
        let (catalog, engine) = sample();

        for movie in catalog.movies() {
            let hits = engine.recommend(&catalog, &movie.title, 10).unwrap();
            assert!(hits.len() <= 10);
            assert!(hits.len() <= catalog.len() - 1);
            assert!(!titles(&catalog, &hits).contains(&movie.title));
            assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_matrix_invariants() {
        let (catalog, engine) = sample();
        let matrix = engine.matrix();

        assert_eq!(matrix.len(), catalog.len());
        for i in 0..catalog.len() {
            assert_eq!(matrix.get(i, i), Some(1.0));
            for j in 0..catalog.len() {
                let a = matrix.get(i, j).unwrap();
                assert_eq!(a.to_bits(), matrix.get(j, i).unwrap().to_bits());
                assert!((0.0..=1.0).contains(&a));
            }
        }
    }

    #[test]
    fn test_missing_title() {
        let (catalog, engine) = sample();

        assert!(matches!(
            engine.recommend(&catalog, "Nonexistent Title", 10),
            Err(SimilarityError::NotFound { .. })
        ));
    }

    #[test]
    fn test_stop_words_change_vocabulary() {
        let catalog = Catalog::from_reader(SAMPLE.as_bytes()).unwrap();
        let english = SimilarityEngine::build(&catalog);
        let raw = SimilarityEngine::with_config(
            &catalog,
            TfidfConfig::default().with_stop_words(false),
        );

        assert!(raw.vocabulary_size() > english.vocabulary_size());
        assert!(english.vectorizer().term_index("the").is_none());
        assert!(raw.vectorizer().term_index("the").is_some());
    }
}
