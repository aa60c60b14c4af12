use rand::Rng;
use rand::RngCore;

use crate::model::{EncryptionType, Network, World};

use super::tables::{NETWORK_TYPES, NetworkTypeDef, building_def};

/// Generate networks for every building. Count follows the building type
/// (3–6 for data-center/corporate class, 1–3 otherwise); security level and
/// encryption are paired so stronger tiers always carry stronger ciphers.
pub fn generate_networks(world: &mut World, rng: &mut dyn RngCore) {
    let buildings: Vec<(u64, crate::model::BuildingType, u8)> = world
        .buildings
        .values()
        .map(|b| (b.id, b.building_type, b.security_level))
        .collect();

    for (building_id, building_type, building_security) in buildings {
        let def = building_def(building_type);
        let count = rng.random_range(def.network_count.0..=def.network_count.1);

        for _ in 0..count {
            let type_def = pick_network_def(rng);
            // Network security orbits the building's posture
            let security_level =
                (building_security as i8 + rng.random_range(-1..=1)).clamp(1, 5) as u8;

            world.add_network(Network {
                id: 0,
                building_id,
                network_type: type_def.network_type,
                security_level,
                encryption: EncryptionType::for_security(security_level),
                is_hidden: rng.random_bool(type_def.hidden_chance),
                requires_hacking: rng.random_bool(type_def.hacking_chance),
            });
        }
    }
}

fn pick_network_def(rng: &mut dyn RngCore) -> &'static NetworkTypeDef {
    let total: u32 = NETWORK_TYPES.iter().map(|d| d.weight).sum();
    let mut roll = rng.random_range(0..total);
    for def in NETWORK_TYPES {
        if roll < def.weight {
            return def;
        }
        roll -= def.weight;
    }
    &NETWORK_TYPES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::model::{World, WorldMeta};
    use crate::worldgen::WorldGenConfig;
    use crate::worldgen::locations::generate_locations;
    use crate::worldgen::structures::generate_structures;

    fn make_networked_world(seed: u64) -> World {
        let config = WorldGenConfig {
            complexity: 2,
            seed: Some(seed),
            ..WorldGenConfig::default()
        };
        let mut world = World::new(WorldMeta {
            name: "test".to_string(),
            seed,
            complexity: 2,
            author: None,
        });
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_locations(&mut world, &config, &mut rng);
        generate_structures(&mut world, &mut rng);
        generate_networks(&mut world, &mut rng);
        world
    }

    #[test]
    fn every_building_gets_networks() {
        let world = make_networked_world(42);
        for building in world.buildings.values() {
            let count = world
                .networks
                .values()
                .filter(|n| n.building_id == building.id)
                .count();
            let def = building_def(building.building_type);
            assert!(
                count as u32 >= def.network_count.0 && count as u32 <= def.network_count.1,
                "building {} has {count} networks, expected {:?}",
                building.id,
                def.network_count
            );
        }
    }

    #[test]
    fn encryption_matches_security_tier() {
        let world = make_networked_world(7);
        for network in world.networks.values() {
            assert_eq!(
                network.encryption,
                EncryptionType::for_security(network.security_level)
            );
        }
    }

    #[test]
    fn network_security_bounded() {
        let world = make_networked_world(11);
        for network in world.networks.values() {
            assert!((1..=5).contains(&network.security_level));
        }
    }
}
