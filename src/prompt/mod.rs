mod reader;
mod request;
mod session;

pub use reader::{EditorReader, LineReader};
pub use request::{
    parse_confirmation, parse_count, parse_genre, parse_menu_choice, MenuChoice,
    RecommendationRequest,
};
pub use session::PromptSession;
