//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible attribute constraints to be applied to catalog rows.

use data_loader::MovieRecord;

/// One attribute constraint over movie records.
///
/// Implementors only decide whether a single movie passes; `apply` keeps
/// the passing movies in their incoming order.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared across threads
/// - Filters take ownership of the Vec and return it trimmed, no cloning
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether a movie satisfies this constraint
    fn matches(&self, movie: &MovieRecord) -> bool;

    /// Keep the movies satisfying this constraint.
    fn apply<'a>(&self, mut movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies.retain(|movie| self.matches(movie));
        movies
    }
}
