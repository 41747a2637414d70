pub mod aggregation;
pub mod normalization;
pub mod ranking;
pub mod scoring;
pub mod types;

use log::debug;

pub use aggregation::aggregate_ratings;
pub use normalization::{normalize_stats, DEGENERATE_SCALE_VALUE};
pub use ranking::{filter_by_genre, rank, recommend};
pub use scoring::{popularity_score, score_movies, COUNT_WEIGHT, RATING_WEIGHT};
pub use types::{MovieStat, NormalizedStat, PopularityEntry, Selection, StatMap};

use crate::domain::{MovieRecord, RatingEvent};

/// Runs aggregation, normalization and scoring, returning the full table ranked by score
pub fn calculate_popularity(events: &[RatingEvent], movies: &[MovieRecord]) -> Vec<PopularityEntry> {
    debug!("Calculating popularity for {} ratings and {} movies", events.len(), movies.len());

    let stats = aggregate_ratings(events);
    let normalized = normalize_stats(&stats);
    let entries = score_movies(&stats, &normalized, movies);
    rank(&entries, entries.len())
}
