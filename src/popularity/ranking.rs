use super::types::{PopularityEntry, Selection};
use crate::domain::join_genres;

/// Sort by score descending and keep the first `n`.
///
/// The sort is stable, so entries with equal scores keep their input order.
pub fn rank(entries: &[PopularityEntry], n: usize) -> Vec<PopularityEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.popularity_score.total_cmp(&a.popularity_score));
    ranked.truncate(n);
    ranked
}

/// Keep entries whose joined genre list contains `genre`, ignoring case
pub fn filter_by_genre(entries: &[PopularityEntry], genre: &str) -> Selection {
    let needle = genre.to_lowercase();
    let matches: Vec<PopularityEntry> = entries
        .iter()
        .filter(|e| matches_genre(e, &needle))
        .cloned()
        .collect();

    if matches.is_empty() {
        Selection::NoMatch {
            genre: genre.to_string(),
        }
    } else {
        Selection::Entries(matches)
    }
}

fn matches_genre(entry: &PopularityEntry, lowercase_needle: &str) -> bool {
    join_genres(&entry.genres)
        .to_lowercase()
        .contains(lowercase_needle)
}

/// Filter by genre (when given), then rank and truncate to `n`
pub fn recommend(entries: &[PopularityEntry], n: usize, genre: Option<&str>) -> Selection {
    match genre {
        None => Selection::Entries(rank(entries, n)),
        Some(genre) => match filter_by_genre(entries, genre) {
            Selection::Entries(filtered) => Selection::Entries(rank(&filtered, n)),
            no_match => no_match,
        },
    }
}
