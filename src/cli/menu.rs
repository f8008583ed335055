//! cli::menu
//!
//! The menu table: input tokens mapped to commands.

use std::fmt;

/// A command the user can pick from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit,
    List,
    Add,
    Delete,
    Update,
    Stats,
    Random,
    Search,
    SortedByRating,
    GenerateWebsite,
}

/// Menu entries in display order.
const MENU: &[(&str, MenuCommand)] = &[
    ("0", MenuCommand::Exit),
    ("1", MenuCommand::List),
    ("2", MenuCommand::Add),
    ("3", MenuCommand::Delete),
    ("4", MenuCommand::Update),
    ("5", MenuCommand::Stats),
    ("6", MenuCommand::Random),
    ("7", MenuCommand::Search),
    ("8", MenuCommand::SortedByRating),
    ("9", MenuCommand::GenerateWebsite),
];

impl MenuCommand {
    /// Look up the command for an input token.
    ///
    /// Surrounding whitespace is ignored. Returns `None` for anything that
    /// is not a menu number.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        MENU.iter()
            .find(|(key, _)| *key == token)
            .map(|(_, command)| *command)
    }

    /// The token that selects this command.
    pub fn token(self) -> &'static str {
        MENU.iter()
            .find(|(_, command)| *command == self)
            .map(|(key, _)| *key)
            .unwrap_or_default()
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Exit => "Exit",
            MenuCommand::List => "List movies",
            MenuCommand::Add => "Add movie",
            MenuCommand::Delete => "Delete movie",
            MenuCommand::Update => "Update movie",
            MenuCommand::Stats => "Stats",
            MenuCommand::Random => "Random movie",
            MenuCommand::Search => "Search movie",
            MenuCommand::SortedByRating => "Movies sorted by rating",
            MenuCommand::GenerateWebsite => "Generate website",
        }
    }

    /// Every command, in menu order.
    pub fn all() -> impl Iterator<Item = MenuCommand> {
        MENU.iter().map(|(_, command)| *command)
    }

    /// Highest menu number, for "enter a number between 0 and N" messages.
    pub fn max_token() -> usize {
        MENU.len() - 1
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.token(), self.label())
    }
}
