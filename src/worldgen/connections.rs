use std::collections::{HashSet, VecDeque};

use rand::Rng;
use rand::RngCore;

use crate::model::{Connection, TransportType, World};

use super::config::WorldGenConfig;

/// Distance band boundaries (map units) selecting the transport mode.
const SHORT_BAND: f64 = 250.0;
const MEDIUM_BAND: f64 = 600.0;

struct Band {
    transport: TransportType,
    cost: (u32, u32),
    time: (u32, u32),
}

fn band_for(distance: f64) -> Band {
    if distance < SHORT_BAND {
        Band {
            transport: TransportType::Metro,
            cost: (5, 30),
            time: (10, 45),
        }
    } else if distance < MEDIUM_BAND {
        Band {
            transport: TransportType::Maglev,
            cost: (40, 150),
            time: (30, 120),
        }
    } else {
        Band {
            transport: TransportType::Suborbital,
            cost: (200, 900),
            time: (45, 180),
        }
    }
}

/// Weave the transport graph: cities first, then each city's districts,
/// then the fixed parent↔child links and special-location feeders.
///
/// Guarantee: afterwards the city subgraph is connected, and so is each
/// city's district subgraph.
pub fn weave_connections(world: &mut World, _config: &WorldGenConfig, rng: &mut dyn RngCore) {
    let cities = world.city_ids();
    weave_set(world, &cities, rng);

    for &city_id in &cities {
        let districts = world.district_ids_of(city_id);
        weave_set(world, &districts, rng);

        // City↔district links are always short, cheap metro rides and are
        // not part of the spanning-tree pass.
        for district_id in districts {
            link_pair_fixed(world, city_id, district_id, rng);
        }
    }

    attach_special_locations(world, &cities, rng);
}

/// Spanning tree plus a few redundant shortcut edges over one node set.
fn weave_set(world: &mut World, nodes: &[u64], rng: &mut dyn RngCore) {
    if nodes.len() < 2 {
        return;
    }

    let mut unconnected: Vec<u64> = nodes.to_vec();
    let start = unconnected.swap_remove(rng.random_range(0..unconnected.len()));
    let mut connected: Vec<u64> = vec![start];

    while !unconnected.is_empty() {
        let from = connected[rng.random_range(0..connected.len())];
        let to = unconnected.swap_remove(rng.random_range(0..unconnected.len()));
        link_pair(world, from, to, rng);
        connected.push(to);
    }

    // Shortcuts create alternate routes between already-reachable nodes
    let shortcuts = (nodes.len() / 2).min(5);
    let mut added = 0;
    let mut attempts = 0;
    while added < shortcuts && attempts < shortcuts * 10 {
        attempts += 1;
        let a = connected[rng.random_range(0..connected.len())];
        let b = connected[rng.random_range(0..connected.len())];
        if a == b || world.has_connection(a, b) {
            continue;
        }
        link_pair(world, a, b, rng);
        added += 1;
    }
}

/// Create the two symmetric rows for one bidirectional link, with transport
/// and cost/time drawn from the distance band between the endpoints.
fn link_pair(world: &mut World, a: u64, b: u64, rng: &mut dyn RngCore) {
    let (loc_a, loc_b) = (&world.locations[&a], &world.locations[&b]);
    let distance = ((loc_a.x - loc_b.x).powi(2) + (loc_a.y - loc_b.y).powi(2)).sqrt();
    let any_virtual = loc_a.is_virtual || loc_b.is_virtual;
    let any_special = loc_a.is_special || loc_b.is_special;

    let band = band_for(distance);
    let transport = if any_virtual {
        TransportType::NetLink
    } else {
        band.transport
    };
    let travel_cost = rng.random_range(band.cost.0..=band.cost.1);
    let travel_time = if any_virtual {
        1
    } else {
        rng.random_range(band.time.0..=band.time.1)
    };
    let requires_hacking = any_virtual;
    let requires_special_access = any_special && rng.random_bool(0.6);

    for (source_id, destination_id) in [(a, b), (b, a)] {
        world.add_connection(Connection {
            source_id,
            destination_id,
            transport,
            travel_time,
            travel_cost,
            requires_hacking,
            requires_special_access,
        });
    }
}

/// Short, low-cost local link between a city and one of its districts.
fn link_pair_fixed(world: &mut World, city_id: u64, district_id: u64, rng: &mut dyn RngCore) {
    let travel_cost = rng.random_range(2..=10);
    let travel_time = rng.random_range(5..=20);
    for (source_id, destination_id) in [(city_id, district_id), (district_id, city_id)] {
        world.add_connection(Connection {
            source_id,
            destination_id,
            transport: TransportType::Metro,
            travel_time,
            travel_cost,
            requires_hacking: false,
            requires_special_access: false,
        });
    }
}

/// Every special location gets 1–2 feeder links into the city graph.
fn attach_special_locations(world: &mut World, cities: &[u64], rng: &mut dyn RngCore) {
    if cities.is_empty() {
        return;
    }
    let specials: Vec<u64> = world
        .locations
        .values()
        .filter(|l| l.is_special)
        .map(|l| l.id)
        .collect();

    for special_id in specials {
        let links = rng.random_range(1..=2usize).min(cities.len());
        let mut pool: Vec<u64> = cities.to_vec();
        for _ in 0..links {
            let city_id = pool.swap_remove(rng.random_range(0..pool.len()));
            link_pair(world, special_id, city_id, rng);
        }
    }
}

/// BFS reachability over an edge list restricted to the given node set.
pub fn is_connected(nodes: &[u64], connections: &[Connection]) -> bool {
    if nodes.len() < 2 {
        return true;
    }
    let node_set: HashSet<u64> = nodes.iter().copied().collect();
    let mut visited: HashSet<u64> = HashSet::new();
    let mut queue = VecDeque::from([nodes[0]]);
    visited.insert(nodes[0]);

    while let Some(current) = queue.pop_front() {
        for conn in connections {
            if conn.source_id == current
                && node_set.contains(&conn.destination_id)
                && visited.insert(conn.destination_id)
            {
                queue.push_back(conn.destination_id);
            }
        }
    }

    visited.len() == nodes.len()
}
