//! Parser for the IMDb top-1000 CSV export.
//!
//! Header columns used (others are ignored):
//! `Poster_Link, Series_Title, Released_Year, Certificate, Runtime, Genre,
//! IMDB_Rating, Overview, Director, Star1, Star2, Star3, Star4, No_of_Votes`
//!
//! Every column is read as optional text and converted by hand, so a bad
//! cell degrades to its default instead of rejecting the row.

use crate::error::Result;
use crate::types::MovieRecord;
use serde::Deserialize;
use std::io::Read;
use tracing::{debug, warn};

/// One CSV row before cleaning
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMovieRow {
    #[serde(rename = "Series_Title")]
    title: Option<String>,
    #[serde(rename = "Overview")]
    overview: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Star1")]
    star1: Option<String>,
    #[serde(rename = "Star2")]
    star2: Option<String>,
    #[serde(rename = "Star3")]
    star3: Option<String>,
    #[serde(rename = "Star4")]
    star4: Option<String>,
    #[serde(rename = "Released_Year")]
    released_year: Option<String>,
    #[serde(rename = "IMDB_Rating")]
    rating: Option<String>,
    #[serde(rename = "Poster_Link")]
    poster_link: Option<String>,
    #[serde(rename = "Certificate")]
    certificate: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "No_of_Votes")]
    votes: Option<String>,
}

impl RawMovieRow {
    /// Convert into a typed record, or `None` when the title is missing
    fn into_record(self) -> Option<MovieRecord> {
        let title = clean_text(self.title);
        if title.is_empty() {
            return None;
        }

        let stars = [self.star1, self.star2, self.star3, self.star4]
            .into_iter()
            .map(clean_text)
            .filter(|s| !s.is_empty())
            .collect();

        Some(MovieRecord {
            title,
            overview: clean_text(self.overview),
            genres: split_genres(&clean_text(self.genre)),
            director: clean_text(self.director),
            stars,
            year: parse_year(self.released_year.as_deref()),
            rating: parse_rating(self.rating.as_deref()),
            poster_link: clean_text(self.poster_link),
            certificate: clean_text(self.certificate),
            runtime_minutes: parse_runtime(self.runtime.as_deref()),
            votes: parse_votes(self.votes.as_deref()),
        })
    }
}

/// Parse every usable row from a CSV stream.
///
/// Rows without a title and rows the CSV reader cannot decode are skipped
/// and logged. Only failures of the underlying stream are returned as errors.
pub fn parse_movies<R: Read>(reader: R, source_name: &str) -> Result<Vec<MovieRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut movies = Vec::new();
    let mut skipped = 0usize;

    for (idx, row) in csv_reader.deserialize::<RawMovieRow>().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let line_no = idx + 2;
        let row = match row {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("{}: skipping undecodable row {}: {}", source_name, line_no, e);
                skipped += 1;
                continue;
            }
        };

        match row.into_record() {
            Some(movie) => movies.push(movie),
            None => {
                warn!("{}: dropping row {} with no title", source_name, line_no);
                skipped += 1;
            }
        }
    }

    debug!(
        "{}: parsed {} rows, skipped {}",
        source_name,
        movies.len(),
        skipped
    );
    Ok(movies)
}

fn clean_text(value: Option<String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Split `"Action, Crime, Drama"` into its parts
fn split_genres(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Year as an integer; `"1995.0"` is accepted, `"PG"` becomes 0
fn parse_year(s: Option<&str>) -> u16 {
    let Some(s) = s.map(str::trim) else {
        return 0;
    };
    if let Ok(year) = s.parse::<u16>() {
        return year;
    }
    match s.parse::<f64>() {
        Ok(year) if year.is_finite() && year >= 0.0 && year <= u16::MAX as f64 => year as u16,
        _ => 0,
    }
}

fn parse_rating(s: Option<&str>) -> f32 {
    s.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|r| r.is_finite())
        .unwrap_or(0.0)
}

/// `"142 min"` -> 142
fn parse_runtime(s: Option<&str>) -> u16 {
    let digits: String = s
        .unwrap_or_default()
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// `"2,343,110"` -> 2343110
fn parse_votes(s: Option<&str>) -> u32 {
    let digits: String = s
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    digits.parse().unwrap_or(0)
}
