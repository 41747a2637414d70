pub mod recommendation;

pub use recommendation::{OutputOptions, RecommendationService};
