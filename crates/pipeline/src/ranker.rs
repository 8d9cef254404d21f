//! Rating-based ranking of filtered movies.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use data_loader::{Catalog, MovieRecord};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Rating descending, then title ascending
pub fn rating_order(a: &MovieRecord, b: &MovieRecord) -> Ordering {
    b.rating
        .total_cmp(&a.rating)
        .then_with(|| a.title.cmp(&b.title))
}

/// Sort movies best-rated first
pub fn rank_by_rating(mut movies: Vec<&MovieRecord>) -> Vec<&MovieRecord> {
    movies.sort_by(|a, b| rating_order(a, b));
    movies
}

/// Keep the catalog movies satisfying every constraint, best-rated first.
///
/// Over-constrained criteria simply give an empty list.
#[instrument(skip(catalog, criteria), fields(movies = catalog.len()))]
pub fn filter_and_rank<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a MovieRecord> {
    let pipeline = FilterPipeline::from_criteria(criteria);
    let mut ranked = rank_by_rating(pipeline.apply(catalog.movies().iter().collect()));

    if let Some(limit) = criteria.limit {
        ranked.truncate(limit);
    }

    debug!(
        "Attribute ranking kept {} movies through {} filters",
        ranked.len(),
        pipeline.len()
    );
    ranked
}

/// The `n` best-rated movies of the whole catalog
pub fn top_rated(catalog: &Catalog, n: usize) -> Vec<&MovieRecord> {
    let mut ranked = rank_by_rating(catalog.movies().iter().collect());
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            MovieRecord::new("The Matrix")
                .with_genres(["Action", "Sci-Fi"])
                .with_year(1999)
                .with_rating(8.7),
            MovieRecord::new("Inception")
                .with_genres(["Action", "Adventure", "Sci-Fi"])
                .with_year(2010)
                .with_rating(8.8),
            MovieRecord::new("Fight Club")
                .with_genres(["Drama"])
                .with_year(1999)
                .with_rating(8.8),
            MovieRecord::new("Toy Story")
                .with_genres(["Animation", "Comedy"])
                .with_year(1995)
                .with_rating(8.3),
        ])
        .unwrap()
    }

    fn titles<'a>(movies: &[&'a MovieRecord]) -> Vec<&'a str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_genre_ranking() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_genre("Sci-Fi");

        let ranked = filter_and_rank(&catalog, &criteria);
        assert_eq!(titles(&ranked), vec!["Inception", "The Matrix"]);
    }

    #[test]
    fn test_no_constraints_ranks_everything() {
        let catalog = catalog();

        let ranked = filter_and_rank(&catalog, &FilterCriteria::default());
        // Fight Club and Inception tie on rating, title decides
        assert_eq!(
            titles(&ranked),
            vec!["Fight Club", "Inception", "The Matrix", "Toy Story"]
        );
    }

    #[test]
    fn test_rating_min_is_inclusive() {
        let catalog = catalog();
        let criteria = FilterCriteria::new().with_rating_min(8.7);

        let ranked = filter_and_rank(&catalog, &criteria);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|m| m.rating >= 8.7));
    }

    #[test]
    fn test_limit_and_empty_results() {
        let catalog = catalog();

        let ranked = filter_and_rank(&catalog, &FilterCriteria::new().with_limit(2));
        assert_eq!(titles(&ranked), vec!["Fight Club", "Inception"]);

        let inverted = FilterCriteria::new().with_year_range(Some(2000), Some(1990));
        assert!(filter_and_rank(&catalog, &inverted).is_empty());

        let nothing = FilterCriteria::new().with_genre("Western");
        assert!(filter_and_rank(&catalog, &nothing).is_empty());
    }

    #[test]
    fn test_top_rated() {
        let catalog = catalog();

        assert_eq!(titles(&top_rated(&catalog, 1)), vec!["Fight Club"]);
        assert_eq!(top_rated(&catalog, 10).len(), 4);
        assert!(top_rated(&catalog, 0).is_empty());
    }
}
