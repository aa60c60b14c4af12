use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::model::World;

/// Write an iterator of serializable items to a JSONL file (one JSON object
/// per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Dump a generated world to JSONL files in the given output directory, one
/// file per entity table plus `world.json` for the header. Useful for
/// inspecting a run without a database.
pub fn flush_to_jsonl(world: &World, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;

    serde_json::to_writer_pretty(
        BufWriter::new(File::create(output_dir.join("world.json"))?),
        &world.meta,
    )?;

    write_jsonl(&output_dir.join("locations.jsonl"), world.locations.values())?;
    write_jsonl(&output_dir.join("connections.jsonl"), world.connections.iter())?;
    write_jsonl(&output_dir.join("buildings.jsonl"), world.buildings.values())?;
    write_jsonl(&output_dir.join("rooms.jsonl"), world.rooms.values())?;
    write_jsonl(&output_dir.join("networks.jsonl"), world.networks.values())?;
    write_jsonl(&output_dir.join("characters.jsonl"), world.characters.values())?;
    write_jsonl(&output_dir.join("devices.jsonl"), world.devices.values())?;
    write_jsonl(&output_dir.join("hacking_puzzles.jsonl"), world.puzzles.values())?;
    write_jsonl(&output_dir.join("missions.jsonl"), world.missions.values())?;
    write_jsonl(&output_dir.join("objectives.jsonl"), world.objectives.iter())?;
    write_jsonl(&output_dir.join("story_elements.jsonl"), world.stories.values())?;
    write_jsonl(&output_dir.join("items.jsonl"), world.items.values())?;
    write_jsonl(&output_dir.join("shops.jsonl"), world.shops.values())?;
    write_jsonl(&output_dir.join("shop_inventory.jsonl"), world.shop_inventory.iter())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::worldgen::{WorldGenConfig, generate_world};

    #[test]
    fn flush_writes_all_files() {
        let config = WorldGenConfig {
            complexity: 1,
            seed: Some(42),
            ..WorldGenConfig::default()
        };
        let world = generate_world(&config).unwrap();

        let dir = tempfile::tempdir().unwrap();
        flush_to_jsonl(&world, dir.path()).unwrap();

        for file in [
            "world.json",
            "locations.jsonl",
            "connections.jsonl",
            "buildings.jsonl",
            "rooms.jsonl",
            "networks.jsonl",
            "characters.jsonl",
            "devices.jsonl",
            "hacking_puzzles.jsonl",
            "missions.jsonl",
            "objectives.jsonl",
            "story_elements.jsonl",
            "items.jsonl",
            "shops.jsonl",
            "shop_inventory.jsonl",
        ] {
            assert!(dir.path().join(file).exists(), "missing {file}");
        }
    }

    #[test]
    fn locations_jsonl_lines_parse_back() {
        let config = WorldGenConfig {
            complexity: 1,
            seed: Some(7),
            ..WorldGenConfig::default()
        };
        let world = generate_world(&config).unwrap();

        let dir = tempfile::tempdir().unwrap();
        flush_to_jsonl(&world, dir.path()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("locations.jsonl")).unwrap();
        let mut count = 0;
        for line in contents.lines() {
            let parsed: crate::model::Location = serde_json::from_str(line).unwrap();
            assert!(world.locations.contains_key(&parsed.id));
            count += 1;
        }
        assert_eq!(count, world.locations.len());
    }
}
