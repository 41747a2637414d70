use std::num::NonZeroUsize;

use crate::errors::InputError;

/// A validated recommendation request, built before the core is invoked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendationRequest {
    Popularity { count: NonZeroUsize },
    Genre { genre: String, count: NonZeroUsize },
}

impl RecommendationRequest {
    pub fn count(&self) -> usize {
        match self {
            RecommendationRequest::Popularity { count }
            | RecommendationRequest::Genre { count, .. } => count.get(),
        }
    }

    pub fn genre(&self) -> Option<&str> {
        match self {
            RecommendationRequest::Popularity { .. } => None,
            RecommendationRequest::Genre { genre, .. } => Some(genre),
        }
    }
}

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Popularity,
    Genre,
}

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, InputError> {
    let choice: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    match choice {
        1 => Ok(MenuChoice::Popularity),
        2 => Ok(MenuChoice::Genre),
        _ => Err(InputError::UnknownChoice),
    }
}

pub fn parse_count(input: &str) -> Result<NonZeroUsize, InputError> {
    let count: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    usize::try_from(count)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(InputError::NotPositive)
}

/// Accept only a genre from the list, compared exactly
pub fn parse_genre(input: &str, available: &[String]) -> Result<String, InputError> {
    let genre = input.trim();
    available
        .iter()
        .find(|g| g.as_str() == genre)
        .cloned()
        .ok_or(InputError::UnknownGenre)
}

pub fn parse_confirmation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
