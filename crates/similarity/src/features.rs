//! Per-movie feature text.
//!
//! One document per catalog row: the overview, the genre label, the director
//! and every star, joined with single spaces. Empty fields contribute
//! nothing, so a movie with no overview still matches on cast and crew.

use data_loader::{Catalog, MovieRecord};

/// Build the text document describing one movie
pub fn feature_text(movie: &MovieRecord) -> String {
    let genre_label = movie.genre_label();

    std::iter::once(movie.overview.as_str())
        .chain(std::iter::once(genre_label.as_str()))
        .chain(std::iter::once(movie.director.as_str()))
        .chain(movie.stars.iter().map(String::as_str))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feature documents for the whole catalog, in catalog order
pub fn feature_texts(catalog: &Catalog) -> Vec<String> {
    catalog.movies().iter().map(feature_text).collect()
}
