//! cli::app
//!
//! The interactive menu loop.
//!
//! # Lifecycle
//!
//! `MovieApp` shows the menu, reads a choice, runs exactly one storage
//! operation for it, prints the result, and loops. Bad choices and bad
//! ratings are reported and the user is asked again. The loop ends on the
//! exit command or when input runs out.
//!
//! Storage failures are reported on stderr and the loop keeps going; only a failure to
//! talk to the console itself ends `run` with an error.

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use super::menu::MenuCommand;
use crate::core::query::{self, Stats};
use crate::core::types::Year;
use crate::storage::{MovieStorage, StorageError};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{self, PromptError};

const BANNER: &str = "********** My Movies Database **********";

/// Errors that can end a single command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The movie catalog application.
pub struct MovieApp<R, W> {
    storage: Box<dyn MovieStorage>,
    input: R,
    output: W,
    verbosity: Verbosity,
    rng: StdRng,
}

impl<R: BufRead, W: Write> MovieApp<R, W> {
    /// Create an app over `storage`, reading choices from `input` and
    /// writing results to `output`.
    pub fn new(storage: Box<dyn MovieStorage>, input: R, output: W, verbosity: Verbosity) -> Self {
        Self {
            storage,
            input,
            output,
            verbosity,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Use a fixed seed for the random pick.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Give back the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        if self.verbosity != Verbosity::Quiet {
            writeln!(self.output, "{}", BANNER)?;
        }

        loop {
            self.show_menu()?;

            let prompt = format!("\nEnter choice (0-{}): ", MenuCommand::max_token());
            let choice = match prompts::input(&mut self.input, &mut self.output, &prompt) {
                Ok(choice) => choice,
                Err(PromptError::Cancelled) => break,
                Err(e) => return Err(e.into()),
            };

            let Some(command) = MenuCommand::from_token(&choice) else {
                writeln!(
                    self.output,
                    "Invalid choice! Please enter a number between 0 and {}.",
                    MenuCommand::max_token()
                )?;
                continue;
            };

            output::debug(format!("dispatching {:?}", command), self.verbosity);

            match self.execute(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(AppError::Prompt(PromptError::Cancelled)) => break,
                Err(AppError::Storage(e)) => output::error(e),
                Err(e) => return Err(e),
            }
        }

        if self.verbosity != Verbosity::Quiet {
            writeln!(self.output, "Bye!")?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\nMenu:")?;
        for command in MenuCommand::all() {
            writeln!(self.output, "{}", command)?;
        }
        Ok(())
    }

    /// Run one command.
    fn execute(&mut self, command: MenuCommand) -> Result<Flow, AppError> {
        match command {
            MenuCommand::Exit => return Ok(Flow::Exit),
            MenuCommand::List => self.list_movies()?,
            MenuCommand::Add => self.add_movie()?,
            MenuCommand::Delete => self.delete_movie()?,
            MenuCommand::Update => self.update_movie()?,
            MenuCommand::Stats => self.stats()?,
            MenuCommand::Random => self.random_movie()?,
            MenuCommand::Search => self.search_movie()?,
            MenuCommand::SortedByRating => self.movies_sorted_by_rating()?,
            MenuCommand::GenerateWebsite => self.generate_website()?,
        }
        Ok(Flow::Continue)
    }

    fn list_movies(&mut self) -> Result<(), AppError> {
        let movies = self.storage.list_movies()?;
        if movies.is_empty() {
            writeln!(self.output, "No movies in the database.")?;
            return Ok(());
        }

        writeln!(self.output, "\n{} movies in total", movies.len())?;
        for (title, movie) in &movies {
            writeln!(self.output, "{}", output::format_movie(title, movie))?;
        }
        Ok(())
    }

    fn add_movie(&mut self) -> Result<(), AppError> {
        let title = self.ask_title("Enter movie title: ")?;
        // Duplicates are rejected before the remaining fields are asked for.
        if self.storage.contains(&title)? {
            writeln!(self.output, "Movie '{}' already exists!", title)?;
            return Ok(());
        }

        let year = prompts::input(&mut self.input, &mut self.output, "Enter movie year: ")?;
        let rating = prompts::rating(
            &mut self.input,
            &mut self.output,
            "Enter movie rating (0-10): ",
        )?;
        let poster = prompts::optional(
            &mut self.input,
            &mut self.output,
            "Enter movie poster URL (optional): ",
        )?;

        if self
            .storage
            .add_movie(&title, Year::from(year.as_str()), rating, poster)?
        {
            writeln!(self.output, "Movie '{}' successfully added.", title)?;
        } else {
            writeln!(self.output, "Movie '{}' already exists!", title)?;
        }
        Ok(())
    }

    fn delete_movie(&mut self) -> Result<(), AppError> {
        let title = self.ask_title("Enter movie title to delete: ")?;
        if self.storage.delete_movie(&title)? {
            writeln!(self.output, "Movie '{}' successfully deleted.", title)?;
        } else {
            writeln!(self.output, "Movie '{}' not found.", title)?;
        }
        Ok(())
    }

    fn update_movie(&mut self) -> Result<(), AppError> {
        let title = self.ask_title("Enter movie title to update: ")?;
        if !self.storage.contains(&title)? {
            writeln!(self.output, "Movie '{}' not found.", title)?;
            return Ok(());
        }

        let rating = prompts::rating(
            &mut self.input,
            &mut self.output,
            "Enter new rating (0-10): ",
        )?;

        if self.storage.update_movie(&title, rating)? {
            writeln!(
                self.output,
                "Movie '{}' rating updated to {}.",
                title,
                output::format_rating(rating)
            )?;
        } else {
            writeln!(self.output, "Movie '{}' not found.", title)?;
        }
        Ok(())
    }

    fn stats(&mut self) -> Result<(), AppError> {
        let movies = self.storage.list_movies()?;
        let Some(stats) = Stats::compute(&movies) else {
            writeln!(self.output, "No movies available for statistics.")?;
            return Ok(());
        };

        writeln!(self.output, "\nStatistics:")?;
        writeln!(self.output, "- Average rating: {:.2}", stats.average)?;
        writeln!(self.output, "- Median rating: {:.2}", stats.median)?;
        writeln!(
            self.output,
            "- Best movie(s): {} with rating {}",
            stats.best.join(", "),
            output::format_rating(stats.best_rating)
        )?;
        writeln!(
            self.output,
            "- Worst movie(s): {} with rating {}",
            stats.worst.join(", "),
            output::format_rating(stats.worst_rating)
        )?;
        Ok(())
    }

    fn random_movie(&mut self) -> Result<(), AppError> {
        let movies = self.storage.list_movies()?;
        match query::pick_random(&movies, &mut self.rng) {
            Some((title, movie)) => writeln!(
                self.output,
                "Random movie: {}",
                output::format_movie(title, movie)
            )?,
            None => writeln!(self.output, "No movies in the database to choose from.")?,
        }
        Ok(())
    }

    fn search_movie(&mut self) -> Result<(), AppError> {
        let needle = prompts::input(
            &mut self.input,
            &mut self.output,
            "Enter part of movie name: ",
        )?;
        let needle = needle.trim();

        let movies = self.storage.list_movies()?;
        let found = query::search(&movies, needle);
        if found.is_empty() {
            writeln!(self.output, "No movies found matching '{}'.", needle)?;
            return Ok(());
        }

        let lines: Vec<String> = found
            .into_iter()
            .map(|(title, movie)| output::format_movie(title, movie))
            .collect();
        writeln!(self.output, "{}", output::format_list(&lines, ""))?;
        Ok(())
    }

    fn movies_sorted_by_rating(&mut self) -> Result<(), AppError> {
        let movies = self.storage.list_movies()?;
        if movies.is_empty() {
            writeln!(self.output, "No movies in the database.")?;
            return Ok(());
        }

        writeln!(self.output, "\nMovies sorted by rating:")?;
        for (title, movie) in query::sorted_by_rating(&movies) {
            writeln!(self.output, "{}", output::format_movie(title, movie))?;
        }
        Ok(())
    }

    fn generate_website(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "Website generation is not implemented yet.")?;
        Ok(())
    }

    fn ask_title(&mut self, message: &str) -> Result<String, AppError> {
        Ok(prompts::required(
            &mut self.input,
            &mut self.output,
            message,
            "Title cannot be empty.",
        )?)
    }
}
