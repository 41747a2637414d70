use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::popularity::PopularityEntry;

/// JSON document written by `--json`
#[derive(Debug, Serialize)]
pub struct RankingReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub genre: Option<&'a str>,
    pub count: usize,
    pub entries: &'a [PopularityEntry],
}

impl<'a> RankingReport<'a> {
    pub fn new(genre: Option<&'a str>, entries: &'a [PopularityEntry]) -> Self {
        Self {
            generated_at: Utc::now(),
            genre,
            count: entries.len(),
            entries,
        }
    }
}

pub fn write_report(path: &Path, report: &RankingReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize ranking")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write ranking to {}", path.display()))?;

    info!("Saved ranking to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_report_shape() {
        let entries = vec![PopularityEntry {
            movie_id: 260,
            title: "Star Wars: Episode IV - A New Hope (1977)".to_string(),
            genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
            average_rating: 4.23,
            rating_count: 251,
            popularity_score: 0.91,
        }];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.json");

        write_report(&path, &RankingReport::new(Some("Sci-Fi"), &entries)).unwrap();

        let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["genre"], "Sci-Fi");
        assert_eq!(json["count"], 1);
        assert_eq!(json["entries"][0]["movie_id"], 260);
        assert_eq!(json["entries"][0]["genres"][1], "Sci-Fi");
        assert!(json["generated_at"].is_string());
    }
}
