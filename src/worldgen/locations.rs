use rand::Rng;
use rand::RngCore;

use crate::model::{DistrictArchetype, Location, World};

use super::config::WorldGenConfig;
use super::names;
use super::tables::{OPTIONAL_SERVICES, SPECIAL_LOCATIONS};

/// City population band.
const CITY_POPULATION: (u64, u64) = (100_000, 20_000_000);

/// Fraction of the parent city's population a district inherits.
const DISTRICT_POPULATION_FRACTION: (f64, f64) = (0.10, 0.30);

/// Generate cities, their districts, and any special locations.
pub fn generate_locations(world: &mut World, config: &WorldGenConfig, rng: &mut dyn RngCore) {
    let num_cities = (config.complexity as usize + 1).clamp(1, 8);
    let districts_per_city = (config.complexity as usize + 1).clamp(1, 6);

    let mut name_pool = names::shuffled_city_pool(rng);
    let mut synthetic_index = 0;

    for _ in 0..num_cities {
        let name = match name_pool.pop() {
            Some(n) => n.to_string(),
            None => {
                let n = names::synthetic_city_name(synthetic_index);
                synthetic_index += 1;
                n
            }
        };

        let security_level = rng.random_range(1..=5u8);
        let population = rng.random_range(CITY_POPULATION.0..=CITY_POPULATION.1);

        let mut services = vec!["commerce".to_string(), "transport".to_string()];
        for &service in OPTIONAL_SERVICES {
            if rng.random_bool(0.4) {
                services.push(service.to_string());
            }
        }

        let city_id = world.add_location(Location {
            id: 0,
            name,
            x: rng.random_range(0.0..config.map.width),
            y: rng.random_range(0.0..config.map.height),
            security_level,
            population,
            services,
            tags: vec!["city".to_string()],
            archetype: None,
            parent_location_id: None,
            is_virtual: false,
            is_special: false,
            is_dangerous: false,
        });

        generate_districts(world, config, city_id, districts_per_city, rng);
    }

    generate_special_locations(world, config, rng);
}

fn generate_districts(
    world: &mut World,
    config: &WorldGenConfig,
    city_id: u64,
    count: usize,
    rng: &mut dyn RngCore,
) {
    let city = world.locations[&city_id].clone();

    for _ in 0..count {
        let archetype: DistrictArchetype = rng.random();
        let fraction =
            rng.random_range(DISTRICT_POPULATION_FRACTION.0..DISTRICT_POPULATION_FRACTION.1);
        let population = ((city.population as f64) * fraction) as u64;
        let security_level = (city.security_level as i8 + archetype.security_offset()).clamp(1, 5) as u8;

        // Districts sit near their city on the map
        let x = (city.x + rng.random_range(-40.0..40.0)).clamp(0.0, config.map.width);
        let y = (city.y + rng.random_range(-40.0..40.0)).clamp(0.0, config.map.height);

        let is_dangerous = rng.random_bool(archetype.danger_chance());

        world.add_location(Location {
            id: 0,
            name: names::generate_district_name(archetype, rng),
            x,
            y,
            security_level,
            population,
            services: vec!["commerce".to_string()],
            tags: vec!["district".to_string(), archetype.as_str().to_string()],
            archetype: Some(archetype),
            parent_location_id: Some(city_id),
            is_virtual: false,
            is_special: false,
            is_dangerous,
        });
    }
}

fn generate_special_locations(world: &mut World, config: &WorldGenConfig, rng: &mut dyn RngCore) {
    // 0..=complexity-1 specials, drawn from the catalogue without replacement
    let count = rng.random_range(0..config.complexity as usize);
    let mut available: Vec<usize> = (0..SPECIAL_LOCATIONS.len()).collect();

    for _ in 0..count.min(SPECIAL_LOCATIONS.len()) {
        let pick = rng.random_range(0..available.len());
        let def = &SPECIAL_LOCATIONS[available.swap_remove(pick)];

        let population = if def.population.1 == 0 {
            0
        } else {
            rng.random_range(def.population.0..=def.population.1)
        };

        world.add_location(Location {
            id: 0,
            name: def.name.to_string(),
            x: rng.random_range(0.0..config.map.width),
            y: rng.random_range(0.0..config.map.height),
            security_level: rng.random_range(def.security.0..=def.security.1),
            population,
            services: vec![],
            tags: def.tags.iter().map(|t| t.to_string()).collect(),
            archetype: None,
            parent_location_id: None,
            is_virtual: def.is_virtual,
            is_special: true,
            is_dangerous: def.is_dangerous,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::model::{World, WorldMeta};

    fn make_world(complexity: u8, seed: u64) -> World {
        let config = WorldGenConfig {
            complexity,
            seed: Some(seed),
            ..WorldGenConfig::default()
        };
        let mut world = World::new(WorldMeta {
            name: "test".to_string(),
            seed,
            complexity,
            author: None,
        });
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_locations(&mut world, &config, &mut rng);
        world
    }

    #[test]
    fn city_count_follows_complexity() {
        for complexity in 1..=5u8 {
            let world = make_world(complexity, 42);
            assert_eq!(
                world.city_ids().len(),
                (complexity as usize + 1).clamp(1, 8),
                "complexity {complexity}"
            );
        }
    }

    #[test]
    fn each_city_gets_districts() {
        let world = make_world(2, 7);
        for city_id in world.city_ids() {
            assert_eq!(world.district_ids_of(city_id).len(), 3);
        }
    }

    #[test]
    fn district_parents_resolve_to_cities() {
        let world = make_world(4, 11);
        for loc in world.locations.values() {
            if let Some(parent_id) = loc.parent_location_id {
                let parent = world.locations.get(&parent_id).expect("parent exists");
                assert!(parent.is_city());
                assert!(!parent.is_virtual);
            }
        }
    }

    #[test]
    fn district_population_is_fraction_of_parent() {
        let world = make_world(3, 13);
        for loc in world.locations.values().filter(|l| l.is_district()) {
            let parent = &world.locations[&loc.parent_location_id.unwrap()];
            let fraction = loc.population as f64 / parent.population as f64;
            assert!(
                (0.09..=0.31).contains(&fraction),
                "district {} inherits {fraction:.2} of parent population",
                loc.name
            );
        }
    }

    #[test]
    fn cities_always_offer_commerce_and_transport() {
        let world = make_world(3, 17);
        for city_id in world.city_ids() {
            let city = &world.locations[&city_id];
            assert!(city.services.iter().any(|s| s == "commerce"));
            assert!(city.services.iter().any(|s| s == "transport"));
        }
    }

    #[test]
    fn city_names_unique() {
        let world = make_world(5, 19);
        let mut names: Vec<&str> = world
            .locations
            .values()
            .filter(|l| l.is_city())
            .map(|l| l.name.as_str())
            .collect();
        names.sort();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn complexity_one_generates_no_specials() {
        let world = make_world(1, 23);
        assert_eq!(
            world.locations.values().filter(|l| l.is_special).count(),
            0
        );
    }

    #[test]
    fn security_levels_bounded() {
        let world = make_world(5, 29);
        for loc in world.locations.values() {
            assert!((1..=5).contains(&loc.security_level), "{}", loc.name);
        }
    }

    #[test]
    fn deterministic() {
        let a = make_world(3, 99);
        let b = make_world(3, 99);
        let names_a: Vec<&String> = a.locations.values().map(|l| &l.name).collect();
        let names_b: Vec<&String> = b.locations.values().map(|l| &l.name).collect();
        assert_eq!(names_a, names_b);
    }
}
