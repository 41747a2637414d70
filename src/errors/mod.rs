use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which input file a data error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Movies,
    Ratings,
}

impl DataSource {
    pub fn as_str(&self) -> &str {
        match self {
            DataSource::Movies => "movies",
            DataSource::Ratings => "ratings",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input data could not be obtained; the pipeline does not run
#[derive(Debug, Error)]
pub enum DataError {
    #[error("{kind} file not found at '{}'", .path.display())]
    Missing { kind: DataSource, path: PathBuf },

    #[error("failed to read {kind} file '{}'", .path.display())]
    Unreadable {
        kind: DataSource,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl DataError {
    pub fn kind(&self) -> DataSource {
        match self {
            DataError::Missing { kind, .. } | DataError::Unreadable { kind, .. } => *kind,
        }
    }
}

/// Rejected answer in the interactive prompt
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid choice. Please enter 1 or 2.")]
    UnknownChoice,

    #[error("Please enter a positive number.")]
    NotPositive,

    #[error("Invalid genre. Please select from the list.")]
    UnknownGenre,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_source_and_path() {
        let err = DataError::Missing {
            kind: DataSource::Ratings,
            path: PathBuf::from("data/ratings.csv"),
        };

        assert_eq!(err.to_string(), "ratings file not found at 'data/ratings.csv'");
        assert_eq!(err.kind(), DataSource::Ratings);
    }
}
