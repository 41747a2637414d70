use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "movie popularity rankings from rating data")]
pub struct Cli {
    /// Movies CSV (movieId,title,genres); defaults to $MOVIES_CSV or movies.csv
    #[arg(long, global = true)]
    pub movies: Option<PathBuf>,

    /// Ratings CSV (userId,movieId,rating,timestamp); defaults to $RATINGS_CSV or ratings.csv
    #[arg(long, global = true)]
    pub ratings: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Most popular movies overall
    Top {
        /// Number of movies to list
        #[arg(short = 'n', long, default_value = "10")]
        count: NonZeroUsize,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Most popular movies whose genres contain GENRE (case-insensitive)
    Genre {
        genre: String,
        /// Number of movies to list
        #[arg(short = 'n', long, default_value = "10")]
        count: NonZeroUsize,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the genres found in the movie data
    Genres,
    /// Menu-driven session
    Interactive,
    /// Walk through a fixed set of example rankings
    Showcase,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Default)]
pub struct OutputArgs {
    /// Also draw a bar chart and save it as SVG
    #[arg(short, long)]
    pub chart: bool,

    /// Write the ranking as JSON to this file
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genre_command() {
        let cli = Cli::try_parse_from([
            "movie_popularity", "--movies", "m.csv", "genre", "Sci-Fi", "-n", "5", "--chart",
        ])
        .unwrap();

        assert_eq!(cli.movies, Some(PathBuf::from("m.csv")));
        assert_eq!(
            cli.command,
            Command::Genre {
                genre: "Sci-Fi".to_string(),
                count: NonZeroUsize::new(5).unwrap(),
                output: OutputArgs {
                    chart: true,
                    json: None,
                },
            }
        );
    }

    #[test]
    fn test_top_defaults_to_ten() {
        let cli = Cli::try_parse_from(["movie_popularity", "top"]).unwrap();

        assert!(matches!(cli.command, Command::Top { count, .. } if count.get() == 10));
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(Cli::try_parse_from(["movie_popularity", "top", "-n", "0"]).is_err());
    }
}
