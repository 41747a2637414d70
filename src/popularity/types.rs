use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::domain::MovieId;

pub type StatMap = BTreeMap<MovieId, MovieStat>;

#[derive(Debug, Clone, PartialEq)]
pub struct MovieStat {
    pub movie_id: MovieId,
    pub average_rating: f64,
    pub rating_count: usize, // always >= 1
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStat {
    pub movie_id: MovieId,
    pub average_rating_norm: f64,
    pub rating_count_norm: f64,
}

/// A scored movie, the unit handed to every renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityEntry {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
    pub average_rating: f64,
    pub rating_count: usize,
    pub popularity_score: f64,
}

/// Outcome of a genre filter or a recommendation
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Entries(Vec<PopularityEntry>),
    NoMatch { genre: String },
}

impl Selection {
    pub fn entries(&self) -> Option<&[PopularityEntry]> {
        match self {
            Selection::Entries(entries) => Some(entries),
            Selection::NoMatch { .. } => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Selection::NoMatch { .. })
    }
}
