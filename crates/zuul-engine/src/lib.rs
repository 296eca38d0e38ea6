//! Command parsing and game session for World of Zuul.
//!
//! A [`Parser`] turns lines of player input into [`Command`]s; a [`Game`]
//! owns the world and the player's position and executes those commands,
//! returning the text to show.

/// Session configuration.
pub mod config;
/// Error types for the game engine.
pub mod error;
/// Command parsing and the command vocabulary.
pub mod parser;
/// Game session and command dispatch.
pub mod session;

pub use config::GameConfig;
pub use error::{PlayError, PlayResult};
pub use parser::{Command, CommandWord, Direction, Parser, Vocabulary, parse_command};
pub use session::{FAREWELL, Game, GameState, Outcome};
