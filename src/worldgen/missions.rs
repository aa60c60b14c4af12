use rand::Rng;
use rand::RngCore;

use crate::model::{Mission, Objective, RewardBundle, World};

use super::tables::{MISSION_TYPES, MissionTypeDef};

/// Generate 1–3 missions per city, each with 1–5 ordered objectives. Givers
/// are characters living in the city or one of its districts.
pub fn generate_missions(world: &mut World, rng: &mut dyn RngCore) {
    let cities = world.city_ids();

    for city_id in cities {
        // Candidate givers: anyone in the city or its districts
        let mut givers = world.characters_in(city_id);
        for district_id in world.district_ids_of(city_id) {
            givers.extend(world.characters_in(district_id));
        }
        if givers.is_empty() {
            tracing::warn!(city_id, "no characters to give missions, skipping city");
            continue;
        }

        let count = rng.random_range(1..=3);
        for _ in 0..count {
            let def = &MISSION_TYPES[rng.random_range(0..MISSION_TYPES.len())];
            let giver_id = givers[rng.random_range(0..givers.len())];
            let difficulty = rng.random_range(1..=5u8);

            let mission_id = world.add_mission(Mission {
                id: 0,
                mission_type: def.mission_type,
                difficulty,
                giver_id,
                location_id: city_id,
                reward: RewardBundle {
                    credits: difficulty as u32 * rng.random_range(300..=800),
                    street_cred: rng.random_range(1..=difficulty),
                    includes_item: rng.random_bool(0.25),
                },
                is_main_quest: rng.random_bool(0.1),
                is_repeatable: rng.random_bool(0.2),
                is_hidden: rng.random_bool(0.15),
            });

            generate_objectives(world, mission_id, def, rng);
        }
    }
}

fn generate_objectives(
    world: &mut World,
    mission_id: u64,
    def: &MissionTypeDef,
    rng: &mut dyn RngCore,
) {
    let count = rng.random_range(1..=5u8);

    for order_index in 0..count {
        let objective_type = if order_index == 0 {
            def.opening
        } else {
            def.follow_ups[rng.random_range(0..def.follow_ups.len())]
        };
        let target = def.targets[rng.random_range(0..def.targets.len())];
        // The lead objective is never optional
        let optional = order_index > 0 && rng.random_bool(0.2);

        world.add_objective(Objective {
            id: 0,
            mission_id,
            order_index,
            objective_type,
            target: target.to_string(),
            optional,
        });
    }
}
