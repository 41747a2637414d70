pub type MovieId = u32;
pub type UserId = u32;

const GENRE_SEPARATOR: char = '|';

/// A single observed rating
#[derive(Debug, Clone, PartialEq)]
pub struct RatingEvent {
    pub movie_id: MovieId,
    pub user_id: UserId,
    pub rating: f64,
    pub timestamp: i64, // Unix seconds, not used for scoring
}

impl RatingEvent {
    pub fn new(movie_id: MovieId, user_id: UserId, rating: f64) -> Self {
        Self {
            movie_id,
            user_id,
            rating,
            timestamp: 0,
        }
    }
}

/// Movie metadata
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    pub movie_id: MovieId,
    pub title: String,
    pub genres: Vec<String>,
}

impl MovieRecord {
    /// Build a record from the pipe-delimited genre string used by the data files
    pub fn new(movie_id: MovieId, title: impl Into<String>, genres: &str) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genres: split_genres(genres),
        }
    }
}

pub fn split_genres(genres: &str) -> Vec<String> {
    genres
        .split(GENRE_SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_genres(genres: &[String]) -> String {
    genres.join(&GENRE_SEPARATOR.to_string())
}
