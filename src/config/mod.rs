pub mod settings;

pub use settings::{AppConfig, ChartSettings, DataSettings};
