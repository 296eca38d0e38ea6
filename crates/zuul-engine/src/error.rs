//! Error types for the game engine.

use thiserror::Error;
use zuul_core::WorldError;

/// Result type for game operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur while playing.
///
/// Apart from [`PlayError::World`], these are all invalid player input. Their
/// display text is the message shown to the player; the game carries on.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The command word is not in the vocabulary.
    #[error("I don't know what you mean...")]
    UnknownCommand,

    /// `go` without a direction.
    #[error("Go where?")]
    GoWhere,

    /// No exit in the requested direction.
    #[error("There is no door!")]
    NoDoor,

    /// `quit` followed by another word.
    #[error("Quit what?")]
    QuitWhat,

    /// The world could not be set up.
    #[error(transparent)]
    World(#[from] WorldError),
}

impl PlayError {
    /// Whether this error came from player input rather than game setup.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::World(_))
    }
}
