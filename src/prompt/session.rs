use anyhow::{anyhow, Result};
use std::io::Write;

use super::reader::LineReader;
use super::request::{
    parse_confirmation, parse_count, parse_genre, parse_menu_choice, MenuChoice,
    RecommendationRequest,
};
use crate::errors::InputError;

/// Interactive menu that turns user answers into a `RecommendationRequest`
pub struct PromptSession<R: LineReader, W: Write> {
    reader: R,
    out: W,
}

impl<R: LineReader, W: Write> PromptSession<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    pub fn build_request(&mut self, available_genres: &[String]) -> Result<RecommendationRequest> {
        self.show_menu()?;
        let choice = self.ask("\nEnter your choice (1 or 2): ", parse_menu_choice)?;

        match choice {
            MenuChoice::Popularity => {
                let count = self.ask_count()?;
                Ok(RecommendationRequest::Popularity { count })
            }
            MenuChoice::Genre => {
                self.show_genres(available_genres)?;
                let genre = self.ask("\nEnter a genre from the list: ", |input| {
                    parse_genre(input, available_genres)
                })?;
                let count = self.ask_count()?;
                Ok(RecommendationRequest::Genre { genre, count })
            }
        }
    }

    /// Yes/no question; anything but `y` counts as no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.read_answer(question)?;
        Ok(parse_confirmation(&answer))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.out)
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n=== Movie Recommendation System ===")?;
        writeln!(self.out, "1. Get recommendations by popularity")?;
        writeln!(self.out, "2. Get recommendations by genre")?;
        Ok(())
    }

    fn show_genres(&mut self, genres: &[String]) -> Result<()> {
        writeln!(self.out, "\nAvailable genres:")?;
        for (idx, genre) in genres.iter().enumerate() {
            writeln!(self.out, "{}. {}", idx + 1, genre)?;
        }
        Ok(())
    }

    fn ask_count(&mut self) -> Result<std::num::NonZeroUsize> {
        self.ask("How many recommendations would you like? ", parse_count)
    }

    /// Re-prompt until `parse` accepts the answer
    fn ask<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Result<T, InputError>) -> Result<T> {
        loop {
            let answer = self.read_answer(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.out, "{e}")?,
            }
        }
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        self.out.flush()?;
        self.reader
            .read_line(prompt)?
            .ok_or_else(|| anyhow!("Input closed before a choice was made"))
    }
}
