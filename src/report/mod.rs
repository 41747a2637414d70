pub mod chart;
pub mod export;
pub mod listing;

pub use chart::{chart_file_name, chart_title, Bar, BarChart};
pub use export::{write_report, RankingReport};
pub use listing::{format_entries, format_selection, heading};
