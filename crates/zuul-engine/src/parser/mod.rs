//! Command parsing and the command vocabulary.

mod command;
mod input;

pub use command::{Command, CommandWord, Direction, Vocabulary, parse_command};
pub use input::Parser;
