use rand::Rng;
use rand::RngCore;

use crate::model::{StoryElement, World};

const LOCATION_TEMPLATES: &[&str] = &[
    "They say {location} was built on the bones of an older city nobody names anymore.",
    "Power flickers across {location} every night at third shift, and nobody asks why.",
    "The fixers avoid {location} since the blackout riots.",
    "Half the feeds in {location} loop footage from a decade back.",
];

const CHARACTER_TEMPLATES: &[&str] = &[
    "{character} owes the wrong people money, and everyone in the bar knows it.",
    "Word is {character} used to run courier jobs for a corp that no longer exists.",
    "{character} keeps a locked case under the counter and never opens it in company.",
    "Nobody has seen {character}'s face outside a holo-mask in years.",
];

const MISSION_TEMPLATES: &[&str] = &[
    "The job smells like a setup, but the pay is too good to walk away from.",
    "Three crews turned this contract down before it reached you.",
    "The client wiped their own records before posting the job. Draw your own conclusions.",
];

/// Generate narrative fragments tied to locations, characters, and missions.
/// Fragments not shown by default are gated behind a reveal condition.
pub fn generate_story_elements(world: &mut World, rng: &mut dyn RngCore) {
    let location_picks: Vec<(u64, String)> = world
        .locations
        .values()
        .filter(|l| !l.is_virtual)
        .map(|l| (l.id, l.name.clone()))
        .collect();

    for (location_id, name) in location_picks {
        if !rng.random_bool(0.5) {
            continue;
        }
        let template = LOCATION_TEMPLATES[rng.random_range(0..LOCATION_TEMPLATES.len())];
        let revealed = rng.random_bool(0.7);
        world.add_story(StoryElement {
            id: 0,
            text: template.replace("{location}", &name),
            location_id: Some(location_id),
            character_id: None,
            mission_id: None,
            revealed_by_default: revealed,
            reveal_condition: (!revealed).then(|| format!("visited:{location_id}")),
        });
    }

    let character_picks: Vec<(u64, String)> = world
        .characters
        .values()
        .filter(|c| c.traits.importance >= 5)
        .map(|c| (c.id, c.name.clone()))
        .collect();

    for (character_id, name) in character_picks {
        if !rng.random_bool(0.4) {
            continue;
        }
        let template = CHARACTER_TEMPLATES[rng.random_range(0..CHARACTER_TEMPLATES.len())];
        let revealed = rng.random_bool(0.6);
        world.add_story(StoryElement {
            id: 0,
            text: template.replace("{character}", &name),
            location_id: None,
            character_id: Some(character_id),
            mission_id: None,
            revealed_by_default: revealed,
            reveal_condition: (!revealed).then(|| format!("met:{character_id}")),
        });
    }

    let mission_picks: Vec<u64> = world.missions.keys().copied().collect();
    for mission_id in mission_picks {
        let template = MISSION_TEMPLATES[rng.random_range(0..MISSION_TEMPLATES.len())];
        world.add_story(StoryElement {
            id: 0,
            text: template.to_string(),
            location_id: None,
            character_id: None,
            mission_id: Some(mission_id),
            revealed_by_default: true,
            reveal_condition: None,
        });
    }
}
