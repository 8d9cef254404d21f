//! End-to-end tests over the sample IMDb dataset.

use recommender::{FilterCriteria, RecommendError, Recommender, RecommenderConfig};
use similarity::TfidfConfig;
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/imdb_sample.csv")
}

fn load() -> Recommender {
    Recommender::load(sample_path(), RecommenderConfig::default()).expect("sample dataset loads")
}

#[test]
fn test_load_builds_matching_engine() {
    let recommender = load();

    assert_eq!(recommender.catalog().len(), 12);
    assert_eq!(recommender.engine().len(), 12);
    assert!(recommender.engine().vocabulary_size() > 100);
}

#[test]
fn test_content_recommendations() {
    let recommender = load();

    let titles = recommender.recommend("The Dark Knight", 10).unwrap();
    assert_eq!(titles[0], "The Dark Knight Rises");
    assert_eq!(titles.len(), 10);

    let titles = recommender.recommend("SE7EN", 1).unwrap();
    assert_eq!(titles, vec!["Fight Club"]);
}

#[test]
fn test_recommendations_exclude_query_for_every_title() {
    let recommender = load();
    let n = recommender.catalog().len();

    for movie in recommender.catalog().movies() {
        let recs = recommender.recommend_movies(&movie.title, 20).unwrap();
        assert_eq!(recs.len(), n - 1);
        assert!(recs.iter().all(|r| r.title != movie.title));
        assert!(recs.iter().all(|r| (0.0..=1.0).contains(&r.score)));
    }
}

#[test]
fn test_unknown_title() {
    let recommender = load();

    let err = recommender.recommend("Nonexistent Title", 10).unwrap_err();
    assert!(matches!(err, RecommendError::NotFound { ref title } if title == "Nonexistent Title"));
}

#[test]
fn test_missing_dataset() {
    let result = Recommender::load("no/such/file.csv", RecommenderConfig::default());
    assert!(matches!(result, Err(RecommendError::Load(_))));
}

#[test]
fn test_attribute_ranking() {
    let recommender = load();

    let ranked = recommender.filter_and_rank(&FilterCriteria::new().with_genre("Sci-Fi"));
    let titles: Vec<&str> = ranked.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Inception", "The Matrix", "Interstellar"]);

    let ranked = recommender.filter_and_rank(&FilterCriteria::new().with_rating_min(8.8));
    assert!(ranked.iter().all(|m| m.rating >= 8.8));
    assert_eq!(ranked.len(), 5);
}

#[test]
fn test_custom_tfidf_config() {
    let config = RecommenderConfig::default()
        .with_tfidf(TfidfConfig::default().with_smooth_idf(false).with_stop_words(false));
    let recommender = Recommender::load(sample_path(), config).unwrap();

    assert!(recommender.engine().vectorizer().term_index("the").is_some());
    let titles = recommender.recommend("The Dark Knight", 1).unwrap();
    assert_eq!(titles, vec!["The Dark Knight Rises"]);
}
