use rand::Rng;
use rand::RngCore;

use crate::model::{Building, Room, World};

use super::names;
use super::tables::{BUILDING_TYPES, BuildingTypeDef, population_tier};

/// Generate buildings and their rooms for every non-virtual location.
/// Building count follows the location's population tier; every non-virtual
/// location gets at least one building.
pub fn generate_structures(world: &mut World, rng: &mut dyn RngCore) {
    let locations: Vec<(u64, u64, u8)> = world
        .locations
        .values()
        .filter(|l| !l.is_virtual)
        .map(|l| (l.id, l.population, l.security_level))
        .collect();

    for (location_id, population, location_security) in locations {
        let tier = population_tier(population);
        let count = rng.random_range(tier.buildings.0..=tier.buildings.1).max(1);

        for _ in 0..count {
            let def = pick_building_def(rng);
            let floors = rng.random_range(def.floors.0..=def.floors.1);
            let security_level =
                (location_security as i8 + def.security_offset).clamp(1, 5) as u8;

            let building_id = world.add_building(Building {
                id: 0,
                location_id,
                building_type: def.building_type,
                floors,
                security_level,
                owner: names::generate_corp_name(rng),
                services: def.services.iter().map(|s| s.to_string()).collect(),
                requires_special_access: rng.random_bool(def.special_access_chance),
                requires_hacking: rng.random_bool(def.hacking_chance),
            });

            generate_rooms(world, building_id, def, floors, security_level, rng);
        }
    }
}

fn pick_building_def(rng: &mut dyn RngCore) -> &'static BuildingTypeDef {
    let total: u32 = BUILDING_TYPES.iter().map(|d| d.weight).sum();
    let mut roll = rng.random_range(0..total);
    for def in BUILDING_TYPES {
        if roll < def.weight {
            return def;
        }
        roll -= def.weight;
    }
    &BUILDING_TYPES[0]
}

fn generate_rooms(
    world: &mut World,
    building_id: u64,
    def: &BuildingTypeDef,
    floors: u32,
    security_level: u8,
    rng: &mut dyn RngCore,
) {
    for floor in 1..=floors {
        let rooms = rng.random_range(def.rooms_per_floor.0..=def.rooms_per_floor.1);
        for _ in 0..rooms {
            let room_type = def.room_types[rng.random_range(0..def.room_types.len())];
            let sensitive = def.sensitive_rooms.contains(&room_type);

            // Sensitive rooms lock up fast as building security rises
            let lock_chance = if sensitive {
                0.2 + 0.15 * security_level as f64
            } else {
                0.05 + 0.03 * security_level as f64
            };
            let is_locked = rng.random_bool(lock_chance.min(0.95));
            let is_hackable = is_locked && rng.random_bool(0.4);

            world.add_room(Room {
                id: 0,
                building_id,
                floor,
                room_type: room_type.to_string(),
                is_locked,
                is_hackable,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::model::{World, WorldMeta};
    use crate::worldgen::WorldGenConfig;
    use crate::worldgen::locations::generate_locations;

    fn make_structured_world(seed: u64) -> World {
        let config = WorldGenConfig {
            complexity: 3,
            seed: Some(seed),
            ..WorldGenConfig::default()
        };
        let mut world = World::new(WorldMeta {
            name: "test".to_string(),
            seed,
            complexity: 3,
            author: None,
        });
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_locations(&mut world, &config, &mut rng);
        generate_structures(&mut world, &mut rng);
        world
    }

    #[test]
    fn every_non_virtual_location_has_a_building() {
        let world = make_structured_world(42);
        for loc in world.locations.values().filter(|l| !l.is_virtual) {
            assert!(
                !world.buildings_in(loc.id).is_empty(),
                "{} has no buildings",
                loc.name
            );
        }
    }

    #[test]
    fn virtual_locations_have_no_buildings() {
        // Seed range wide enough to hit virtual specials
        for seed in 1..30u64 {
            let world = make_structured_world(seed);
            for loc in world.locations.values().filter(|l| l.is_virtual) {
                assert!(world.buildings_in(loc.id).is_empty());
            }
        }
    }

    #[test]
    fn building_security_within_bounds() {
        let world = make_structured_world(7);
        for building in world.buildings.values() {
            assert!((1..=5).contains(&building.security_level));
            assert!(building.floors >= 1);
        }
    }

    #[test]
    fn rooms_reference_valid_floors() {
        let world = make_structured_world(11);
        assert!(!world.rooms.is_empty());
        for room in world.rooms.values() {
            let building = &world.buildings[&room.building_id];
            assert!(room.floor >= 1 && room.floor <= building.floors);
        }
    }

    #[test]
    fn rooms_come_from_building_catalogue() {
        let world = make_structured_world(13);
        for room in world.rooms.values() {
            let building = &world.buildings[&room.building_id];
            let def = crate::worldgen::tables::building_def(building.building_type);
            assert!(
                def.room_types.contains(&room.room_type.as_str()),
                "{} not in {:?} catalogue",
                room.room_type,
                building.building_type
            );
        }
    }

    #[test]
    fn hackable_rooms_are_locked() {
        let world = make_structured_world(17);
        for room in world.rooms.values() {
            if room.is_hackable {
                assert!(room.is_locked, "hackable room must be locked");
            }
        }
    }
}
