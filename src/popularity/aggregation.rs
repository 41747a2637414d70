use std::collections::BTreeMap;

use super::types::{MovieStat, StatMap};
use crate::domain::{MovieId, RatingEvent};

/// Reduce rating events to one statistic per movie, keyed by ascending movie id
pub fn aggregate_ratings(events: &[RatingEvent]) -> StatMap {
    sum_ratings(events)
        .into_iter()
        .map(|(movie_id, (sum, count))| (movie_id, build_stat(movie_id, sum, count)))
        .collect()
}

fn sum_ratings(events: &[RatingEvent]) -> BTreeMap<MovieId, (f64, usize)> {
    let mut totals = BTreeMap::new();
    for event in events {
        let (sum, count) = totals.entry(event.movie_id).or_insert((0.0, 0));
        *sum += event.rating;
        *count += 1;
    }
    totals
}

fn build_stat(movie_id: MovieId, sum: f64, count: usize) -> MovieStat {
    MovieStat {
        movie_id,
        average_rating: sum / count as f64,
        rating_count: count,
    }
}
