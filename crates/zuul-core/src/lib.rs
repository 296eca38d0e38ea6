//! Core types for World of Zuul: rooms, items, and the world graph.
//!
//! This crate defines the static map the game is played on. It knows nothing
//! about commands or players; you can construct a [`World`] programmatically
//! or take the stock campus map from [`build_world`].

/// The stock campus map the game ships with.
pub mod campus;
/// Error types used throughout the crate.
pub mod error;
/// Rooms, items, and room identifiers.
pub mod room;
/// The arena that owns every room.
pub mod world;

/// Re-export the stock map builder.
pub use campus::{START_ROOM, build_world};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export room types.
pub use room::{Item, Room, RoomId};
/// Re-export the world model.
pub use world::World;
