use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Stable identifier for a room inside a [`World`](crate::World).
///
/// Ids are handed out by [`World::add_room`](crate::World::add_room) and are
/// only meaningful for the world that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something lying around in a room. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    description: String,
}

impl Item {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The item's short name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The item's longer description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// A node in the world graph.
///
/// Exits map a direction name to the id of the neighbouring room. They are
/// kept in registration order, which is also the order they are listed in
/// [`Room::long_description`].
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    name: String,
    description: String,
    exits: IndexMap<String, RoomId>,
    items: Vec<Item>,
}

impl Room {
    /// Creates a room with no exits and no items.
    ///
    /// `description` should read naturally after "You are", e.g.
    /// `"in a lecture theater"`.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exits: IndexMap::new(),
            items: Vec::new(),
        }
    }

    /// The room's unique key within its world.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The short description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Register an exit, replacing any previous exit in that direction.
    ///
    /// The direction name is not validated.
    pub fn set_exit(&mut self, direction: impl Into<String>, room: RoomId) {
        self.exits.insert(direction.into(), room);
    }

    /// The room reached by leaving in `direction`, if there is one.
    pub fn exit(&self, direction: &str) -> Option<RoomId> {
        self.exits.get(direction).copied()
    }

    /// All exits in registration order.
    pub fn exits(&self) -> impl Iterator<Item = (&str, RoomId)> {
        self.exits.iter().map(|(dir, id)| (dir.as_str(), *id))
    }

    /// Put an item in the room. Items keep the order they were added in.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// The items in this room, possibly none.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// "You are <description>." followed by the list of exits.
    pub fn long_description(&self) -> String {
        let mut output = format!("You are {}.\nExits:", self.description);
        for direction in self.exits.keys() {
            output.push(' ');
            output.push_str(direction);
        }
        output
    }
}
