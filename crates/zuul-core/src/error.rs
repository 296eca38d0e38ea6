use crate::room::RoomId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or querying a world.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The requested room ID does not exist in the world.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateName(String),

    /// A room name could not be resolved to an existing room.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),
}
