use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::popularity::PopularityEntry;

const SVG_WIDTH: usize = 960;
const SVG_LABEL_WIDTH: usize = 380;
const SVG_BAR_AREA: usize = 500;
const SVG_ROW_HEIGHT: usize = 26;
const SVG_TOP_MARGIN: usize = 60;
const SVG_BOTTOM_MARGIN: usize = 50;
const BAR_GLYPH: char = '█';

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Horizontal bar chart of popularity scores
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

pub fn chart_title(top_n: usize, genre: Option<&str>) -> String {
    match genre {
        Some(genre) => format!("Top {top_n} Popular {genre} Movies"),
        None => format!("Top {top_n} Popular Movies"),
    }
}

pub fn chart_file_name(genre: Option<&str>) -> String {
    match genre {
        Some(genre) => format!("top_popular_{}_movies.svg", genre.to_lowercase()),
        None => "top_popular_movies.svg".to_string(),
    }
}

impl BarChart {
    pub fn from_entries(title: impl Into<String>, entries: &[PopularityEntry]) -> Self {
        Self {
            title: title.into(),
            bars: entries
                .iter()
                .map(|e| Bar {
                    label: e.title.clone(),
                    value: e.popularity_score,
                })
                .collect(),
        }
    }

    /// Plain-text rendition, bars scaled so the largest value spans `width` glyphs
    pub fn render_text(&self, width: usize) -> String {
        self.render_with(width, |bar| bar)
    }

    pub fn render_colored(&self, width: usize) -> String {
        self.render_with(width, |bar| bar.cyan().to_string())
    }

    fn render_with(&self, width: usize, paint: impl Fn(String) -> String) -> String {
        let label_width = self.label_width();
        let max = self.max_value();

        let mut out = format!("{}\n", self.title);
        for bar in &self.bars {
            let glyphs: String = std::iter::repeat_n(BAR_GLYPH, bar_length(bar.value, max, width)).collect();
            let _ = writeln!(
                out,
                "{:<label_width$} | {} {:.2}",
                bar.label,
                paint(glyphs),
                bar.value
            );
        }
        out
    }

    pub fn to_svg(&self) -> String {
        let height = SVG_TOP_MARGIN + self.bars.len() * SVG_ROW_HEIGHT + SVG_BOTTOM_MARGIN;
        let max = self.max_value();

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SVG_WIDTH}" height="{height}" font-family="sans-serif" font-size="12">"#
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="30" text-anchor="middle" font-size="16">{}</text>"#,
            SVG_WIDTH / 2,
            escape_xml(&self.title)
        );

        for (idx, bar) in self.bars.iter().enumerate() {
            let y = SVG_TOP_MARGIN + idx * SVG_ROW_HEIGHT;
            let length = bar_length(bar.value, max, SVG_BAR_AREA);
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}" text-anchor="end">{}</text>"#,
                SVG_LABEL_WIDTH - 8,
                y + SVG_ROW_HEIGHT / 2 + 4,
                escape_xml(&bar.label)
            );
            let _ = writeln!(
                svg,
                r##"  <rect x="{SVG_LABEL_WIDTH}" y="{}" width="{length}" height="{}" fill="#1f77b4"/>"##,
                y + 3,
                SVG_ROW_HEIGHT - 6
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{}">{:.2}</text>"#,
                SVG_LABEL_WIDTH + length + 6,
                y + SVG_ROW_HEIGHT / 2 + 4,
                bar.value
            );
        }

        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle">Popularity Score</text>"#,
            SVG_LABEL_WIDTH + SVG_BAR_AREA / 2,
            height - 15
        );
        let _ = writeln!(
            svg,
            r#"  <text x="15" y="{}" transform="rotate(-90 15 {})" text-anchor="middle">Movie Title</text>"#,
            height / 2,
            height / 2
        );
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the SVG into `dir` and return the file path
    pub fn save_svg(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir).context("Failed to create chart directory")?;

        let file_path = dir.join(file_name);
        fs::write(&file_path, self.to_svg())
            .with_context(|| format!("Failed to write chart: {}", file_path.display()))?;

        info!("Saved chart: {}", file_path.display());
        Ok(file_path)
    }

    fn label_width(&self) -> usize {
        self.bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round() as usize
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> BarChart {
        BarChart {
            title: "Top 2 Popular Movies".to_string(),
            bars: vec![
                Bar {
                    label: "Forrest Gump (1994)".to_string(),
                    value: 0.8,
                },
                Bar {
                    label: "Up".to_string(),
                    value: 0.4,
                },
            ],
        }
    }

    #[test]
    fn test_titles_and_file_names() {
        assert_eq!(chart_title(10, None), "Top 10 Popular Movies");
        assert_eq!(chart_title(20, Some("Sci-Fi")), "Top 20 Popular Sci-Fi Movies");
        assert_eq!(chart_file_name(None), "top_popular_movies.svg");
        assert_eq!(chart_file_name(Some("Sci-Fi")), "top_popular_sci-fi_movies.svg");
    }

    #[test]
    fn test_text_bars_scale_to_largest_value() {
        let text = chart().render_text(10);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Top 2 Popular Movies");
        assert_eq!(lines[1], format!("Forrest Gump (1994) | {} 0.80", "█".repeat(10)));
        assert_eq!(lines[2], format!("{:<19} | {} 0.40", "Up", "█".repeat(5)));
    }

    #[test]
    fn test_zero_scores_draw_no_bar() {
        let chart = BarChart {
            title: "t".to_string(),
            bars: vec![Bar {
                label: "Only".to_string(),
                value: 0.0,
            }],
        };

        assert_eq!(chart.render_text(10), "t\nOnly |  0.00\n");
    }

    #[test]
    fn test_svg_escapes_labels() {
        let mut chart = chart();
        chart.bars[1].label = "Love & <Death>".to_string();

        let svg = chart.to_svg();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Love &amp; &lt;Death&gt;"));
        assert!(svg.contains(r#"width="500""#));
        assert!(svg.contains(r#"width="250""#));
    }

    #[test]
    fn test_save_svg() {
        let dir = tempfile::tempdir().unwrap();

        let path = chart().save_svg(dir.path(), "top_popular_movies.svg").unwrap();

        assert_eq!(path, dir.path().join("top_popular_movies.svg"));
        assert!(fs::read_to_string(path).unwrap().contains("Top 2 Popular Movies"));
    }
}
