pub mod characters;
pub mod config;
pub mod connections;
pub mod devices;
pub mod hacking;
pub mod items;
pub mod locations;
pub mod missions;
pub mod names;
pub mod networks;
pub mod rarity;
pub mod seed;
pub mod shops;
pub mod stories;
pub mod structures;
pub mod tables;

use crate::error::GenError;
use crate::model::{World, WorldMeta};

pub use config::{MapConfig, WorldGenConfig};

/// Generate a complete world: locations, transport graph, buildings, rooms,
/// networks, characters, devices, hacking puzzles, missions, stories, loot,
/// and stocked shops.
///
/// Deterministic: two runs with the same complexity and seed produce an
/// identical entity set, value for value. All randomness flows through one
/// stream created here; no phase owns its own.
pub fn generate_world(config: &WorldGenConfig) -> Result<World, GenError> {
    config.validate()?;
    rarity::validate_tables()?;

    let seed = seed::resolve_seed(config.seed);
    let mut rng = seed::make_rng(seed);

    let name = match &config.name {
        Some(name) => name.clone(),
        None => names::generate_world_name(&mut rng),
    };
    let mut world = World::new(WorldMeta {
        name,
        seed,
        complexity: config.complexity,
        author: config.author.clone(),
    });

    tracing::debug!(seed, complexity = config.complexity, "generating world");

    locations::generate_locations(&mut world, config, &mut rng);
    connections::weave_connections(&mut world, config, &mut rng);
    structures::generate_structures(&mut world, &mut rng);
    networks::generate_networks(&mut world, &mut rng);
    characters::generate_characters(&mut world, &mut rng);
    devices::generate_devices(&mut world, &mut rng);
    hacking::generate_puzzles(&mut world, &mut rng);
    missions::generate_missions(&mut world, &mut rng);
    stories::generate_story_elements(&mut world, &mut rng);
    items::generate_world_loot(&mut world, &mut rng);
    shops::generate_shops(&mut world, &mut rng);

    tracing::debug!(
        locations = world.locations.len(),
        connections = world.connections.len(),
        buildings = world.buildings.len(),
        items = world.items.len(),
        shops = world.shops.len(),
        "world generated"
    );

    Ok(world)
}
