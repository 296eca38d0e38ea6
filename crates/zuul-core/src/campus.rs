use crate::error::WorldResult;
use crate::room::{Item, Room, RoomId};
use crate::world::World;

/// Name of the room a new game starts in.
pub const START_ROOM: &str = "courtyard";

/// Build the university campus and return it with the starting room.
///
/// Most links are two-way, but not all: the entrance hall only leads back
/// south, its northern exit is locked.
pub fn build_world() -> WorldResult<(World, RoomId)> {
    let mut world = World::new();

    let courtyard = world.add_room(Room::new("courtyard", "standing in the courtyard"))?;
    let theater = world.add_room(Room::new("theater", "in a lecture theater"))?;
    let pub_ = world.add_room(Room::new("pub", "in the campus pub"))?;
    let lab = world.add_room(Room::new("lab", "in a computing lab"))?;
    let office = world.add_room(Room::new("office", "in the computing admin office"))?;
    let entrance_hall = world.add_room(Room::new(
        "entrance-hall",
        "in the Entrance Hall the Exit is to the north but it seems locked! How do you get out?",
    ))?;
    let cellar = world.add_room(Room::new("cellar", "in the dark dank cellar"))?;

    world.add_item(
        cellar,
        Item::new("A silver key", "Shiny! Could this be useful?"),
    )?;
    world.add_item(
        cellar,
        // Description trimmed to its first sentence.
        Item::new(
            "A pile of garbage",
            "Im not poor enough to pay any attention to that.",
        ),
    )?;

    world.set_exit(courtyard, "north", entrance_hall)?;
    world.set_exit(courtyard, "east", theater)?;
    world.set_exit(courtyard, "west", pub_)?;
    world.set_exit(courtyard, "south", lab)?;

    world.set_exit(theater, "west", courtyard)?;

    world.set_exit(pub_, "east", courtyard)?;

    world.set_exit(lab, "north", courtyard)?;
    world.set_exit(lab, "east", office)?;

    world.set_exit(cellar, "up", office)?;

    world.set_exit(office, "west", lab)?;
    world.set_exit(office, "down", cellar)?;

    world.set_exit(entrance_hall, "south", courtyard)?;

    log::debug!("built campus with {} rooms", world.len());
    Ok((world, courtyard))
}
