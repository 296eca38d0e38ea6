use std::collections::HashMap;

use serde::Serialize;

use crate::error::{WorldError, WorldResult};
use crate::room::{Item, Room, RoomId};

/// The world model. Owns every room; rooms refer to each other by [`RoomId`].
///
/// Construction is two-phase: add all rooms first, then wire exits between
/// them with [`World::set_exit`]. Rooms are never removed, so an id stays
/// valid for the lifetime of the world.
#[derive(Debug, Clone, Default, Serialize)]
pub struct World {
    rooms: Vec<Room>,

    // Index
    #[serde(skip)]
    by_name: HashMap<String, RoomId>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room to the world. Returns the room's ID.
    pub fn add_room(&mut self, room: Room) -> WorldResult<RoomId> {
        if self.by_name.contains_key(room.name()) {
            return Err(WorldError::DuplicateName(room.name().to_string()));
        }

        let id = RoomId(self.rooms.len());
        log::trace!("adding room {id} \"{}\"", room.name());
        self.by_name.insert(room.name().to_string(), id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Get a reference to a room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Get a mutable reference to a room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.0)
    }

    /// Find a room by its exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.by_name.get(name).and_then(|id| self.room(*id))
    }

    /// Find a room ID by its exact name.
    pub fn find_id_by_name(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    /// Like [`World::find_id_by_name`], but an unknown name is an error.
    pub fn resolve(&self, name: &str) -> WorldResult<RoomId> {
        self.find_id_by_name(name)
            .ok_or_else(|| WorldError::UnknownRoom(name.to_string()))
    }

    /// Iterate over all rooms in the order they were added.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, room)| (RoomId(index), room))
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the world has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // -----------------------------------------------------------------------
    // Wiring
    // -----------------------------------------------------------------------

    /// Link `from` to `to` through `direction`. Exits are one-way; wire the
    /// reverse direction separately if the rooms should connect both ways.
    pub fn set_exit(
        &mut self,
        from: RoomId,
        direction: impl Into<String>,
        to: RoomId,
    ) -> WorldResult<()> {
        if self.room(to).is_none() {
            return Err(WorldError::RoomNotFound(to));
        }
        let direction = direction.into();
        log::trace!("exit {from} --{direction}--> {to}");
        self.room_mut(from)
            .ok_or(WorldError::RoomNotFound(from))?
            .set_exit(direction, to);
        Ok(())
    }

    /// Place an item in a room.
    pub fn add_item(&mut self, room: RoomId, item: Item) -> WorldResult<()> {
        self.room_mut(room)
            .ok_or(WorldError::RoomNotFound(room))?
            .add_item(item);
        Ok(())
    }

    /// Follow the exit in `direction` from `from`, if both exist.
    pub fn neighbour(&self, from: RoomId, direction: &str) -> Option<RoomId> {
        self.room(from).and_then(|room| room.exit(direction))
    }
}
