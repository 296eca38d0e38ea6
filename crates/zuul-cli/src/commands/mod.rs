pub mod map;
pub mod play;

use zuul_core::{RoomId, World};

/// Build the campus map, turning setup errors into CLI errors.
fn load_world() -> Result<(World, RoomId), String> {
    zuul_core::build_world().map_err(|e| format!("failed to build world: {e}"))
}
