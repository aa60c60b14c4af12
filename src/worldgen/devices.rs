use rand::Rng;
use rand::RngCore;

use crate::model::{Device, World};

use super::names;
use super::tables::{DEVICE_TYPES, DeviceTypeDef, OS_TYPES, population_tier};

/// Share of devices installed in buildings; the rest are carried by
/// characters when the location has any.
const BUILDING_PLACEMENT_SHARE: f64 = 0.7;

/// Generate devices for every non-virtual location. A device either sits in
/// one of the location's buildings or is carried by a resident character.
pub fn generate_devices(world: &mut World, rng: &mut dyn RngCore) {
    let locations: Vec<(u64, u64)> = world
        .locations
        .values()
        .filter(|l| !l.is_virtual)
        .map(|l| (l.id, l.population))
        .collect();

    for (location_id, population) in locations {
        let tier = population_tier(population);
        let count = rng.random_range(tier.devices.0..=tier.devices.1);

        let buildings = world.buildings_in(location_id);
        let characters = world.characters_in(location_id);

        for _ in 0..count {
            let in_building = characters.is_empty() || rng.random_bool(BUILDING_PLACEMENT_SHARE);

            // Carried devices draw from the portable part of the catalogue
            let def = if in_building {
                pick_device_def(rng, false)
            } else {
                pick_device_def(rng, true)
            };

            let (building_id, owner_id) = if in_building {
                if buildings.is_empty() {
                    tracing::warn!(location_id, "no buildings to install device in, skipping");
                    continue;
                }
                (Some(buildings[rng.random_range(0..buildings.len())]), None)
            } else {
                (
                    None,
                    Some(characters[rng.random_range(0..characters.len())]),
                )
            };

            let mut security_level = rng.random_range(def.security.0..=def.security.1);
            // Installed gear inherits some of the host building's posture
            if let Some(building_id) = building_id
                && world.buildings[&building_id].security_level >= 4
            {
                security_level = (security_level + 1).min(5);
            }

            world.add_device(Device {
                id: 0,
                location_id,
                building_id,
                owner_id,
                device_type: def.device_type,
                os: OS_TYPES[rng.random_range(0..OS_TYPES.len())].to_string(),
                security_level,
                ip_address: names::generate_ip_address(rng),
            });
        }
    }
}

fn pick_device_def(rng: &mut dyn RngCore, portable_only: bool) -> &'static DeviceTypeDef {
    let candidates: Vec<&'static DeviceTypeDef> = DEVICE_TYPES
        .iter()
        .filter(|d| !portable_only || d.portable)
        .collect();
    let total: u32 = candidates.iter().map(|d| d.weight).sum();
    let mut roll = rng.random_range(0..total);
    for &def in &candidates {
        if roll < def.weight {
            return def;
        }
        roll -= def.weight;
    }
    candidates[0]
}
