use super::types::{MovieStat, NormalizedStat, StatMap};

/// Value every entry takes when a dimension has zero range (all movies tied)
pub const DEGENERATE_SCALE_VALUE: f64 = 0.0;

/// Observed bounds of one dimension
#[derive(Debug, Clone, Copy, PartialEq)]
struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        values.fold(None, |range, value| match range {
            None => Some(Self { min: value, max: value }),
            Some(r) => Some(Self {
                min: r.min.min(value),
                max: r.max.max(value),
            }),
        })
    }

    fn scale(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            ((value - self.min) / span).clamp(0.0, 1.0)
        } else {
            DEGENERATE_SCALE_VALUE
        }
    }
}

/// Min-max scale average rating and rating count independently over all movies
pub fn normalize_stats(stats: &StatMap) -> Vec<NormalizedStat> {
    let (Some(rating_range), Some(count_range)) = (rating_range(stats), count_range(stats)) else {
        return Vec::new();
    };

    stats
        .values()
        .map(|stat| normalize_stat(stat, &rating_range, &count_range))
        .collect()
}

fn rating_range(stats: &StatMap) -> Option<ValueRange> {
    ValueRange::of(stats.values().map(|s| s.average_rating))
}

fn count_range(stats: &StatMap) -> Option<ValueRange> {
    ValueRange::of(stats.values().map(|s| s.rating_count as f64))
}

fn normalize_stat(
    stat: &MovieStat,
    rating_range: &ValueRange,
    count_range: &ValueRange,
) -> NormalizedStat {
    NormalizedStat {
        movie_id: stat.movie_id,
        average_rating_norm: rating_range.scale(stat.average_rating),
        rating_count_norm: count_range.scale(stat.rating_count as f64),
    }
}
