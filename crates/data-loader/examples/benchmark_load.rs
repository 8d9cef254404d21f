use data_loader::Catalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let data_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/imdb_top_1000.csv"));

    println!("Loading IMDb catalog from {}...\n", data_path.display());

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&data_path).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!("Genres: {}", catalog.genres().len());
    println!("Stars: {}", catalog.stars().len());
    println!("Years: {}", catalog.years().len());
    println!(
        "\nPerformance: {:.0} rows/second",
        catalog.len() as f64 / elapsed.as_secs_f64()
    );
}
