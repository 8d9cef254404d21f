use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::MovieRecord;
use pipeline::FilterCriteria;
use rand::Rng;
use rayon::prelude::*;
use recommender::{MovieRecommendation, Recommender, RecommenderConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// ReelRecs - Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "reel-recs")]
#[command(about = "Movie recommendations from the IMDb top 1000 by content similarity or attributes", long_about = None)]
struct Cli {
    /// Path to the IMDb top-1000 CSV file
    #[arg(short, long, default_value = "data/imdb_top_1000.csv")]
    data: PathBuf,

    /// Optional JSON config (default_k, tfidf settings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Movies similar to a title, by overview, genre, director and cast
    Similar {
        /// Title to find similar movies for (exact, then case-insensitive)
        #[arg(long)]
        title: String,

        /// Number of recommendations (defaults to the configured default_k)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Movies matching every given attribute, best-rated first
    Filter {
        /// Genre to accept (repeatable, any-of)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Star name or part of one (repeatable, any-of)
        #[arg(long = "star")]
        stars: Vec<String>,

        /// Release year to accept (repeatable, any-of)
        #[arg(long = "year")]
        years: Vec<u16>,

        /// Earliest release year, inclusive
        #[arg(long)]
        year_min: Option<u16>,

        /// Latest release year, inclusive
        #[arg(long)]
        year_max: Option<u16>,

        /// Minimum IMDb rating, inclusive (0 to 10)
        #[arg(long, value_parser = parse_rating)]
        rating_min: Option<f32>,

        /// Number of results to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Best-rated movies of the whole catalog
    Top {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Show every field of one movie
    Info {
        #[arg(long)]
        title: String,
    },

    /// List the genres, years and stars available for filtering
    Facets,

    /// Run benchmark to test query performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "4")]
        concurrent: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RecommenderConfig::from_json_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => RecommenderConfig::default(),
    };

    // Loading builds the similarity matrix once for the whole session
    let start = Instant::now();
    let recommender = Recommender::load(&cli.data, config)
        .with_context(|| format!("Failed to load IMDb dataset from {}", cli.data.display()))?;
    if !cli.json {
        println!(
            "{} Loaded {} movies in {:?}",
            "✓".green(),
            recommender.catalog().len(),
            start.elapsed()
        );
    }

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Similar { title, limit } => handle_similar(&recommender, &title, limit, cli.json)?,
        Commands::Filter {
            genres,
            stars,
            years,
            year_min,
            year_max,
            rating_min,
            limit,
        } => {
            let mut criteria = FilterCriteria::new()
                .with_genres(genres)
                .with_stars(stars)
                .with_years(years)
                .with_year_range(year_min, year_max)
                .with_limit(limit);
            criteria.rating_min = rating_min;
            handle_filter(&recommender, &criteria, cli.json)?
        }
        Commands::Top { limit } => {
            let movies = recommender.top_rated(limit);
            print_movies("Top Rated Movies:", &movies, cli.json)?
        }
        Commands::Search { title } => handle_search(&recommender, &title, cli.json)?,
        Commands::Info { title } => handle_info(&recommender, &title, cli.json)?,
        Commands::Facets => handle_facets(&recommender, cli.json)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(&recommender, requests, concurrent)?,
    }

    Ok(())
}

/// Handle the 'similar' command
fn handle_similar(
    recommender: &Recommender,
    title: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let k = limit.unwrap_or(recommender.config().default_k);
    let recommendations = recommender.recommend_movies(title, k)?;

    if json {
        return print_json(&recommendations);
    }

    // Show the resolved title, which may differ in case from the query
    let seed = recommender.movie(title)?;
    print_recommendations(&seed.title, &recommendations);
    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(recommender: &Recommender, criteria: &FilterCriteria, json: bool) -> Result<()> {
    let movies = recommender.filter_and_rank(criteria);

    // With nothing selected, fall back to the top-rated list
    if criteria.is_unconstrained() && !json {
        println!("{}", "No attributes selected, showing top rated movies".yellow());
    }
    if movies.is_empty() && !json {
        println!("{}", "No movies match all of the selected attributes".yellow());
        return Ok(());
    }

    print_movies("Filtered Movies:", &movies, json)
}

/// Handle the 'search' command
fn handle_search(recommender: &Recommender, title: &str, json: bool) -> Result<()> {
    let catalog = recommender.catalog();
    let matches: Vec<&MovieRecord> = catalog
        .search_titles(title)
        .into_iter()
        .filter_map(|index| catalog.get(index))
        .take(20)
        .collect();

    print_movies(&format!("Search results for '{}':", title), &matches, json)
}

/// Handle the 'info' command
fn handle_info(recommender: &Recommender, title: &str, json: bool) -> Result<()> {
    let movie = recommender.movie(title)?;

    if json {
        return print_json(movie);
    }

    println!("{}", format!("{} ({})", movie.title, year_label(movie)).bold().blue());
    println!("{}IMDb rating: {:.1} ({} votes)", "• ".green(), movie.rating, movie.votes);
    println!("{}Genre: {}", "• ".green(), movie.genre_label());
    println!("{}Director: {}", "• ".green(), movie.director);
    println!("{}Stars: {}", "• ".green(), movie.stars_label());
    if !movie.certificate.is_empty() {
        println!("{}Certificate: {}", "• ".cyan(), movie.certificate);
    }
    if movie.runtime_minutes > 0 {
        println!("{}Runtime: {} min", "• ".cyan(), movie.runtime_minutes);
    }
    if !movie.poster_link.is_empty() {
        println!("{}Poster: {}", "• ".cyan(), movie.poster_link);
    }
    println!("\n{}", movie.overview);
    Ok(())
}

#[derive(Serialize)]
struct Facets<'a> {
    genres: Vec<&'a str>,
    years: Vec<u16>,
    stars: Vec<&'a str>,
}

/// Handle the 'facets' command
fn handle_facets(recommender: &Recommender, json: bool) -> Result<()> {
    let catalog = recommender.catalog();
    let facets = Facets {
        genres: catalog.genres(),
        years: catalog.years(),
        stars: catalog.stars(),
    };

    if json {
        return print_json(&facets);
    }

    println!("{}", "Genres:".bold().blue());
    for genre in &facets.genres {
        println!(
            "  - {} ({} movies)",
            genre,
            catalog.get_movies_by_genre(genre).len()
        );
    }

    match (facets.years.first(), facets.years.last()) {
        (Some(first), Some(last)) => println!(
            "{} {} distinct years, {} to {}",
            "Years:".bold().blue(),
            facets.years.len(),
            first,
            last
        ),
        _ => println!("{} none known", "Years:".bold().blue()),
    }
    println!("{} {} distinct names", "Stars:".bold().blue(), facets.stars.len());
    Ok(())
}

/// Handle the 'benchmark' command
fn handle_benchmark(recommender: &Recommender, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("Benchmark needs at least one request"));
    }

    // Random seed titles from the catalog
    let catalog = recommender.catalog();
    let mut rng = rand::rng();
    let titles: Vec<&str> = (0..requests)
        .filter_map(|_| catalog.get(rng.random_range(0..catalog.len())))
        .map(|movie| movie.title.as_str())
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(concurrent.max(1))
        .build()
        .context("Failed to build benchmark thread pool")?;

    let wall = Instant::now();
    let mut timings: Vec<Duration> = pool.install(|| {
        titles
            .par_iter()
            .map(|title| -> Result<Duration> {
                let start = Instant::now();
                recommender.recommend(title, recommender.config().default_k)?;
                Ok(start.elapsed())
            })
            .collect::<Result<Vec<Duration>>>()
    })?;
    let wall_time = wall.elapsed();

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} threads)", timings.len(), concurrent.max(1));
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Rating on the IMDb scale: finite and within 0 to 10
fn parse_rating(s: &str) -> std::result::Result<f32, String> {
    let rating: f32 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if rating.is_finite() && (0.0..=10.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(format!("`{s}` is outside the rating scale 0 to 10"))
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn year_label(movie: &MovieRecord) -> String {
    movie
        .known_year()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Print ranked movies with rating, genre, director and stars
fn print_movies(header: &str, movies: &[&MovieRecord], json: bool) -> Result<()> {
    if json {
        return print_json(movies);
    }

    println!("{}", header.bold().blue());
    for (rank, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} ({}) - {} {:.1}",
            (rank + 1).to_string().green(),
            movie.title.bold(),
            year_label(movie),
            "IMDb".yellow(),
            movie.rating
        );
        println!("   {} | {}", movie.genre_label(), movie.director);
        if !movie.stars.is_empty() {
            println!("   Stars: {}", movie.stars_label());
        }
    }
    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(seed: &str, recommendations: &[MovieRecommendation]) {
    println!(
        "{}",
        format!("Because you liked {}:", seed).bold().blue()
    );
    for (rank, movie) in recommendations.iter().enumerate() {
        let year = movie
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{}. {} ({}) [{}] - Similarity: {:.3} - IMDb {:.1}",
            (rank + 1).to_string().green(),
            movie.title,
            year,
            movie.genres.join(", "),
            movie.score,
            movie.rating
        );
    }
}
