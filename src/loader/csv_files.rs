use log::info;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::domain::{MovieId, MovieRecord, RatingEvent, UserId};
use crate::errors::{DataError, DataSource};

/// Row of `movies.csv`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MovieRow {
    movie_id: MovieId,
    title: String,
    #[serde(default)]
    genres: String,
}

/// Row of `ratings.csv`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatingRow {
    user_id: UserId,
    movie_id: MovieId,
    rating: f64,
    #[serde(default)]
    timestamp: i64,
}

impl From<MovieRow> for MovieRecord {
    fn from(row: MovieRow) -> Self {
        MovieRecord::new(row.movie_id, row.title, &row.genres)
    }
}

impl From<RatingRow> for RatingEvent {
    fn from(row: RatingRow) -> Self {
        RatingEvent {
            movie_id: row.movie_id,
            user_id: row.user_id,
            rating: row.rating,
            timestamp: row.timestamp,
        }
    }
}

pub fn load_movies(path: &Path) -> Result<Vec<MovieRecord>, DataError> {
    let rows: Vec<MovieRow> = read_rows(DataSource::Movies, path)?;
    Ok(rows.into_iter().map(MovieRecord::from).collect())
}

pub fn load_ratings(path: &Path) -> Result<Vec<RatingEvent>, DataError> {
    let rows: Vec<RatingRow> = read_rows(DataSource::Ratings, path)?;
    Ok(rows.into_iter().map(RatingEvent::from).collect())
}

fn read_rows<T: DeserializeOwned>(kind: DataSource, path: &Path) -> Result<Vec<T>, DataError> {
    if !path.exists() {
        return Err(DataError::Missing {
            kind,
            path: path.to_path_buf(),
        });
    }

    let unreadable = |source| DataError::Unreadable {
        kind,
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(unreadable)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(unreadable)?;

    info!("  → Read {} {} rows from {}", rows.len(), kind, path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_movies_handles_quoted_titles() {
        let file = csv_file(
            "movieId,title,genres\n\
             1,Toy Story (1995),Adventure|Animation|Children\n\
             11,\"American President, The (1995)\",Comedy|Drama|Romance\n",
        );

        let movies = load_movies(file.path()).unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].movie_id, 11);
        assert_eq!(movies[1].title, "American President, The (1995)");
        assert_eq!(movies[1].genres, vec!["Comedy", "Drama", "Romance"]);
    }

    #[test]
    fn test_load_ratings() {
        let file = csv_file(
            "userId,movieId,rating,timestamp\n\
             1,1,4.0,964982703\n\
             1,3,4.5,964981247\n",
        );

        let ratings = load_ratings(file.path()).unwrap();

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings[1].movie_id, 3);
        assert_eq!(ratings[1].rating, 4.5);
        assert_eq!(ratings[0].timestamp, 964982703);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_ratings(Path::new("/nonexistent/ratings.csv")).unwrap_err();

        assert!(matches!(err, DataError::Missing { kind: DataSource::Ratings, .. }));
    }

    #[test]
    fn test_malformed_row_is_unreadable() {
        let file = csv_file("userId,movieId,rating,timestamp\n1,1,great,964982703\n");

        let err = load_ratings(file.path()).unwrap_err();

        assert!(matches!(err, DataError::Unreadable { kind: DataSource::Ratings, .. }));
    }
}
