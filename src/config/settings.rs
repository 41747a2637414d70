use std::path::PathBuf;

pub struct DataSettings {
    pub movies_path: PathBuf,
    pub ratings_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            movies_path: path_from_env("MOVIES_CSV", "movies.csv"),
            ratings_path: path_from_env("RATINGS_CSV", "ratings.csv"),
        }
    }
}

impl DataSettings {
    /// Override the configured paths with the ones given on the command line
    pub fn with_overrides(mut self, movies: Option<PathBuf>, ratings: Option<PathBuf>) -> Self {
        if let Some(path) = movies {
            self.movies_path = path;
        }
        if let Some(path) = ratings {
            self.ratings_path = path;
        }
        self
    }
}

fn path_from_env(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

pub struct ChartSettings {
    pub output_dir: PathBuf,
    pub top_n: usize,
    pub bar_width: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            output_dir: path_from_env("CHART_DIR", "."),
            top_n: 20,
            bar_width: 40,
        }
    }
}

pub struct AppConfig {
    pub data: DataSettings,
    pub chart: ChartSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            data: DataSettings::default(),
            chart: ChartSettings::default(),
        }
    }
}
