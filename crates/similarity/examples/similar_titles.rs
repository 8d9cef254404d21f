//! Example: content recommendations for a few well-known titles
//!
//! Run with: cargo run --package similarity --example similar_titles [path/to/imdb.csv]

use data_loader::Catalog;
use similarity::SimilarityEngine;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== ReelRecs Similarity Example ===\n");

    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/imdb_top_1000.csv"));

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&data_path)?;
    println!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());

    let start = Instant::now();
    let engine = SimilarityEngine::build(&catalog);
    println!(
        "Built {}x{} matrix over {} terms in {:?}\n",
        engine.len(),
        engine.len(),
        engine.vocabulary_size(),
        start.elapsed()
    );

    for title in ["The Dark Knight", "Inception", "Forrest Gump", "Se7en"] {
        let start = Instant::now();
        let hits = match engine.recommend(&catalog, title, 5) {
            Ok(hits) => hits,
            Err(e) => {
                println!("{}: {}\n", title, e);
                continue;
            }
        };

        println!("Because you liked {} ({:?}):", title, start.elapsed());
        for (rank, hit) in hits.iter().enumerate() {
            if let Some(movie) = catalog.get(hit.index) {
                println!(
                    "  {}. {} ({}) - similarity {:.3}",
                    rank + 1,
                    movie.title,
                    movie.year,
                    hit.score
                );
            }
        }
        println!();
    }

    Ok(())
}
