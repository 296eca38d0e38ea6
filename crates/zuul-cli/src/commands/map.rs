use comfy_table::{ContentArrangement, Table};
use zuul_core::{Item, RoomId, World};

pub fn run(format: &str) -> Result<(), String> {
    let (world, start) = super::load_world()?;

    match format {
        "table" => {
            println!("{}", render_table(&world));
            println!();
            println!("  {} rooms, starting in {}", world.len(), room_label(&world, start));
            Ok(())
        }
        "json" => {
            let json = serde_json::to_string_pretty(&world)
                .map_err(|e| format!("failed to serialize world: {e}"))?;
            println!("{json}");
            Ok(())
        }
        other => Err(format!("unknown format '{other}'. Use: table, json")),
    }
}

fn room_label(world: &World, id: RoomId) -> String {
    world
        .room(id)
        .map(|room| room.name().to_string())
        .unwrap_or_else(|| id.to_string())
}

fn render_table(world: &World) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Exits", "Items"]);

    for (_, room) in world.rooms() {
        let exits: Vec<String> = room
            .exits()
            .map(|(dir, target)| format!("{dir} → {}", room_label(world, target)))
            .collect();
        let items: Vec<&str> = room.items().iter().map(Item::name).collect();

        table.add_row(vec![
            room.name().to_string(),
            if exits.is_empty() {
                "—".to_string()
            } else {
                exits.join("\n")
            },
            if items.is_empty() {
                "—".to_string()
            } else {
                items.join("\n")
            },
        ]);
    }

    table
}
