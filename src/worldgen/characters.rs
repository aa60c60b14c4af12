use rand::Rng;
use rand::RngCore;

use crate::model::{Character, TraitBlock, World};

use super::names;
use super::tables::{FACTIONS, PROFESSIONS, ProfessionDef, population_tier};

/// Populate every non-virtual location with characters. Trait scores are
/// sampled independently, each biased by the character's profession.
pub fn generate_characters(world: &mut World, rng: &mut dyn RngCore) {
    let locations: Vec<(u64, u64)> = world
        .locations
        .values()
        .filter(|l| !l.is_virtual)
        .map(|l| (l.id, l.population))
        .collect();

    for (location_id, population) in locations {
        let tier = population_tier(population);
        let count = rng.random_range(tier.characters.0..=tier.characters.1);

        for _ in 0..count {
            let profession = pick_profession(rng);
            let faction = FACTIONS[rng.random_range(0..FACTIONS.len())];

            world.add_character(Character {
                id: 0,
                location_id,
                name: names::generate_character_name(rng),
                profession: profession.name.to_string(),
                faction: faction.to_string(),
                traits: roll_traits(profession, rng),
            });
        }
    }
}

fn pick_profession(rng: &mut dyn RngCore) -> &'static ProfessionDef {
    let total: u32 = PROFESSIONS.iter().map(|d| d.weight).sum();
    let mut roll = rng.random_range(0..total);
    for def in PROFESSIONS {
        if roll < def.weight {
            return def;
        }
        roll -= def.weight;
    }
    &PROFESSIONS[0]
}

fn roll_trait(bias: i8, rng: &mut dyn RngCore) -> u8 {
    (rng.random_range(1..=6i8) + bias).clamp(1, 10) as u8
}

fn roll_traits(profession: &ProfessionDef, rng: &mut dyn RngCore) -> TraitBlock {
    TraitBlock {
        importance: roll_trait(profession.importance, rng),
        hacking: roll_trait(profession.hacking, rng),
        combat: roll_trait(profession.combat, rng),
        charisma: roll_trait(profession.charisma, rng),
        wealth: roll_trait(profession.wealth, rng),
    }
}
