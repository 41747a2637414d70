mod csv_files;

pub use csv_files::{load_movies, load_ratings};

use crate::config::DataSettings;
use crate::domain::{MovieRecord, RatingEvent};
use crate::errors::DataError;

/// Both inputs of the popularity pipeline
pub struct Dataset {
    pub movies: Vec<MovieRecord>,
    pub ratings: Vec<RatingEvent>,
}

/// Load movies and ratings; fails if either file is missing or unreadable
pub fn load_dataset(settings: &DataSettings) -> Result<Dataset, DataError> {
    let movies = load_movies(&settings.movies_path)?;
    let ratings = load_ratings(&settings.ratings_path)?;
    Ok(Dataset { movies, ratings })
}
