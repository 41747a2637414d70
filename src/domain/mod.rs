pub mod genres;
pub mod models;

pub use genres::available_genres;
pub use models::*;
