use std::collections::BTreeSet;

use super::models::MovieRecord;

/// Sorted list of every distinct genre label found in the metadata
pub fn available_genres(movies: &[MovieRecord]) -> Vec<String> {
    movies
        .iter()
        .flat_map(|m| m.genres.iter().cloned())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}
