use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::domain::available_genres;
use crate::loader::{self, Dataset};
use crate::popularity::{self, PopularityEntry, Selection};
use crate::prompt::RecommendationRequest;
use crate::report::{self, BarChart, RankingReport};

/// What to produce besides the text listing
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub chart: bool,
    pub json: Option<PathBuf>,
}

/// Holds the scored popularity table and answers recommendation requests
pub struct RecommendationService {
    config: AppConfig,
    popularity: Vec<PopularityEntry>,
    genres: Vec<String>,
}

impl RecommendationService {
    pub fn load(config: AppConfig) -> Result<Self> {
        info!("=== Loading Movie Data ===");
        let dataset = loader::load_dataset(&config.data)?;
        Ok(Self::from_dataset(config, dataset))
    }

    pub fn from_dataset(config: AppConfig, dataset: Dataset) -> Self {
        info!(
            "  → Loaded {} movies and {} ratings",
            dataset.movies.len(),
            dataset.ratings.len()
        );

        let popularity = popularity::calculate_popularity(&dataset.ratings, &dataset.movies);
        info!("  → Calculated popularity for {} movies", popularity.len());

        let genres = available_genres(&dataset.movies);

        Self {
            config,
            popularity,
            genres,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Every scored movie, ranked
    pub fn popularity(&self) -> &[PopularityEntry] {
        &self.popularity
    }

    pub fn recommend(&self, request: &RecommendationRequest) -> Selection {
        popularity::recommend(&self.popularity, request.count(), request.genre())
    }

    /// Chart of the top `top_n` movies, `None` when the genre matches nothing
    pub fn chart(&self, top_n: usize, genre: Option<&str>) -> Option<BarChart> {
        match popularity::recommend(&self.popularity, top_n, genre) {
            Selection::Entries(entries) => Some(BarChart::from_entries(
                report::chart_title(top_n, genre),
                &entries,
            )),
            Selection::NoMatch { .. } => None,
        }
    }

    /// Print the chart to `out` and save it as SVG in the chart directory
    pub fn visualize(
        &self,
        top_n: usize,
        genre: Option<&str>,
        out: &mut impl Write,
    ) -> Result<Option<PathBuf>> {
        let Some(chart) = self.chart(top_n, genre) else {
            writeln!(out, "No movies found for genre: {}", genre.unwrap_or_default())?;
            return Ok(None);
        };

        writeln!(out, "\n{}", chart.render_colored(self.config.chart.bar_width))?;
        let path = chart.save_svg(&self.config.chart.output_dir, &report::chart_file_name(genre))?;
        writeln!(out, "Visualization saved as '{}'", path.display())?;
        Ok(Some(path))
    }

    /// Answer a request: listing on `out`, plus the chart and JSON export when asked
    pub fn present(
        &self,
        request: &RecommendationRequest,
        options: &OutputOptions,
        out: &mut impl Write,
    ) -> Result<Selection> {
        let selection = self.recommend(request);

        let heading = report::heading(request.count(), request.genre());
        writeln!(out, "\n{}", heading.bold())?;
        write!(out, "{}", report::format_selection(&selection))?;

        if let Selection::Entries(entries) = &selection {
            if options.chart {
                self.visualize(request.count(), request.genre(), out)?;
            }
            if let Some(path) = &options.json {
                report::write_report(path, &RankingReport::new(request.genre(), entries))?;
                writeln!(out, "Ranking saved as '{}'", path.display())?;
            }
        }

        Ok(selection)
    }
}
