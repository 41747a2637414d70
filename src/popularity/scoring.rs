use std::collections::HashMap;
use log::debug;

use super::types::{MovieStat, NormalizedStat, PopularityEntry, StatMap};
use crate::domain::{MovieId, MovieRecord};

// Volume outweighs quality so a handful of high ratings cannot dominate
pub const RATING_WEIGHT: f64 = 0.4;
pub const COUNT_WEIGHT: f64 = 0.6;

pub fn popularity_score(normalized: &NormalizedStat) -> f64 {
    RATING_WEIGHT * normalized.average_rating_norm + COUNT_WEIGHT * normalized.rating_count_norm
}

/// Score every movie present in both the statistics and the metadata.
///
/// Output keeps the order of `normalized`. Ids missing from either side are dropped.
pub fn score_movies(
    stats: &StatMap,
    normalized: &[NormalizedStat],
    movies: &[MovieRecord],
) -> Vec<PopularityEntry> {
    let movie_index = index_movies(movies);

    let entries: Vec<PopularityEntry> = normalized
        .iter()
        .filter_map(|n| {
            let stat = stats.get(&n.movie_id)?;
            let movie = movie_index.get(&n.movie_id)?;
            Some(build_entry(stat, n, movie))
        })
        .collect();

    debug!(
        "Scored {} movies ({} without metadata)",
        entries.len(),
        normalized.len() - entries.len()
    );
    entries
}

fn index_movies(movies: &[MovieRecord]) -> HashMap<MovieId, &MovieRecord> {
    movies.iter().map(|m| (m.movie_id, m)).collect()
}

fn build_entry(stat: &MovieStat, normalized: &NormalizedStat, movie: &MovieRecord) -> PopularityEntry {
    PopularityEntry {
        movie_id: stat.movie_id,
        title: movie.title.clone(),
        genres: movie.genres.clone(),
        average_rating: stat.average_rating,
        rating_count: stat.rating_count,
        popularity_score: popularity_score(normalized),
    }
}
