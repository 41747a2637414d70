pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod popularity;
pub mod prompt;
pub mod report;
pub mod services;

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io::{self, Write};
use std::num::NonZeroUsize;

use crate::cli::{Cli, OutputArgs};
use crate::config::AppConfig;
use crate::prompt::{EditorReader, PromptSession, RecommendationRequest};
use crate::services::{OutputOptions, RecommendationService};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Settings from the environment, with the data paths given on the command line applied
pub fn build_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::new();
    config.data = config
        .data
        .with_overrides(cli.movies.clone(), cli.ratings.clone());
    config
}

pub fn handle_top(config: AppConfig, count: NonZeroUsize, output: &OutputArgs) -> Result<()> {
    let service = RecommendationService::load(config)?;
    let request = RecommendationRequest::Popularity { count };
    present(&service, &request, output)
}

pub fn handle_genre(
    config: AppConfig,
    genre: &str,
    count: NonZeroUsize,
    output: &OutputArgs,
) -> Result<()> {
    let service = RecommendationService::load(config)?;
    let request = RecommendationRequest::Genre {
        genre: genre.to_string(),
        count,
    };
    present(&service, &request, output)
}

pub fn handle_genres(config: AppConfig) -> Result<()> {
    let service = RecommendationService::load(config)?;
    let mut out = io::stdout().lock();

    writeln!(out, "Available genres:")?;
    for (idx, genre) in service.genres().iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, genre)?;
    }
    Ok(())
}

pub fn handle_interactive(config: AppConfig) -> Result<()> {
    let service = RecommendationService::load(config)?;
    let mut session = PromptSession::new(EditorReader::new()?, io::stdout());

    let request = session.build_request(service.genres())?;
    info!("Request: {:?}", request);

    let mut out = io::stdout();
    let _ = service.present(&request, &OutputOptions::default(), &mut out)?;

    if session.confirm("\nWould you like to visualize the results? (y/n): ")? {
        writeln!(out, "\nCreating visualization...")?;
        service.visualize(service.config().chart.top_n, request.genre(), &mut out)?;
    }

    writeln!(out, "\nMovie recommendation system completed!")?;
    Ok(())
}

/// Fixed walkthrough: overall and per-genre rankings, then a chart
pub fn handle_showcase(config: AppConfig) -> Result<()> {
    let service = RecommendationService::load(config)?;
    let mut out = io::stdout();

    for request in showcase_requests() {
        let _ = service.present(&request, &OutputOptions::default(), &mut out)?;
    }

    service.visualize(10, None, &mut out)?;
    writeln!(out, "\nExamples completed!")?;
    Ok(())
}

fn showcase_requests() -> Vec<RecommendationRequest> {
    [(15, None), (5, Some("Comedy")), (5, Some("Sci-Fi"))]
        .into_iter()
        .filter_map(|(count, genre)| {
            let count = NonZeroUsize::new(count)?;
            Some(match genre {
                Some(genre) => RecommendationRequest::Genre {
                    genre: genre.to_string(),
                    count,
                },
                None => RecommendationRequest::Popularity { count },
            })
        })
        .collect()
}

fn present(
    service: &RecommendationService,
    request: &RecommendationRequest,
    output: &OutputArgs,
) -> Result<()> {
    let options = OutputOptions {
        chart: output.chart,
        json: output.json.clone(),
    };
    let _ = service.present(request, &options, &mut io::stdout())?;
    Ok(())
}
