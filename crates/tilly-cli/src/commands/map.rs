use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tilly_core::WorldMap;

pub fn run(format: &str) -> Result<(), String> {
    let world = WorldMap::standard();

    match format.to_lowercase().as_str() {
        "table" => {
            print_table(&world);
            Ok(())
        }
        "json" => {
            let json = serde_json::to_string_pretty(&world).map_err(|e| e.to_string())?;
            println!("{json}");
            Ok(())
        }
        other => Err(format!("unknown format: {other} (expected table or json)")),
    }
}

fn print_table(world: &WorldMap) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Location", "Description", "Connections", "Items"]);

    for loc in world.locations() {
        let items = if loc.items.is_empty() {
            "—".to_string()
        } else {
            loc.items.join(", ")
        };
        table.add_row(vec![
            &loc.id,
            &loc.description,
            &loc.connections.join(", "),
            &items,
        ]);
    }

    println!("  {}", "Finding Tilly".bold());
    println!("{table}");
    println!();
    println!("  {} locations", world.len());
}
