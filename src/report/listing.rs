use std::fmt::Write as _;

use crate::popularity::{PopularityEntry, Selection};

pub fn heading(count: usize, genre: Option<&str>) -> String {
    match genre {
        Some(genre) => format!("Top {count} Popular {genre} Movies:"),
        None => format!("Top {count} Popular Movies:"),
    }
}

/// Numbered lines for a selection, in the order given
pub fn format_selection(selection: &Selection) -> String {
    match selection {
        Selection::NoMatch { genre } => format!("No movies found for genre: {genre}\n"),
        Selection::Entries(entries) if entries.is_empty() => "No movies to show.\n".to_string(),
        Selection::Entries(entries) => format_entries(entries),
    }
}

pub fn format_entries(entries: &[PopularityEntry]) -> String {
    let mut listing = String::new();
    for (idx, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            listing,
            "{}. {} - Popularity Score: {:.2}",
            idx + 1,
            entry.title,
            entry.popularity_score
        );
    }
    listing
}
