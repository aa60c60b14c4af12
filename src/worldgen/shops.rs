use rand::Rng;
use rand::RngCore;

use crate::error::GenError;
use crate::model::{
    DistrictArchetype, ItemFamily, ItemPlacement, Shop, ShopInventoryEntry, World,
};

use super::items;
use super::rarity::jitter;
use super::tables::{GENERIC_DISTRIBUTION, GENERIC_ITEM_COUNT, SHOP_TYPES, shop_type_def};

const FEATURED_CHANCE: f64 = 0.1;
const LIMITED_TIME_CHANCE: f64 = 0.15;

/// Generate shops for every non-virtual location and stock each one.
/// Cities always get at least one shop; district counts follow archetype.
pub fn generate_shops(world: &mut World, rng: &mut dyn RngCore) {
    let locations: Vec<(u64, Option<DistrictArchetype>, bool)> = world
        .locations
        .values()
        .filter(|l| !l.is_virtual)
        .map(|l| (l.id, l.archetype, l.is_city()))
        .collect();

    for (location_id, archetype, is_city) in locations {
        let count = if is_city {
            rng.random_range(1..=2)
        } else {
            match archetype {
                Some(DistrictArchetype::Commercial) => rng.random_range(1..=3),
                Some(DistrictArchetype::Slum) | Some(DistrictArchetype::Undercity) => {
                    rng.random_range(1..=2)
                }
                _ => rng.random_range(0..=2),
            }
        };

        for _ in 0..count {
            let shop_id = create_shop(world, location_id, archetype, rng);
            if let Err(err) = stock_shop(world, shop_id, rng) {
                tracing::warn!(%err, shop_id, "inventory generation failed");
            }
        }
    }
}

fn create_shop(
    world: &mut World,
    location_id: u64,
    archetype: Option<DistrictArchetype>,
    rng: &mut dyn RngCore,
) -> u64 {
    let def = &SHOP_TYPES[rng.random_range(0..SHOP_TYPES.len())];

    // Prefer a building whose type suits the shop, then any building,
    // then operate without one.
    let buildings = world.buildings_in(location_id);
    let compatible: Vec<u64> = buildings
        .iter()
        .copied()
        .filter(|id| {
            def.compatible_buildings
                .contains(&world.buildings[id].building_type)
        })
        .collect();
    let building_id = if !compatible.is_empty() {
        Some(compatible[rng.random_range(0..compatible.len())])
    } else if !buildings.is_empty() {
        Some(buildings[rng.random_range(0..buildings.len())])
    } else {
        None
    };

    let district_bias = archetype.map(|a| a.illegal_shop_bias()).unwrap_or(0.0);
    let is_legal = !rng.random_bool((def.illegal_chance + district_bias).min(0.95));

    let reputation = rng.random_range(1..=10u8);
    let wealth = archetype.map(|a| a.wealth_factor()).unwrap_or(1.0);
    let legality_factor = if is_legal { 1.0 } else { 1.25 };
    let price_modifier = legality_factor * (0.85 + reputation as f64 * 0.03) * wealth;

    world.add_shop(Shop {
        id: 0,
        location_id,
        building_id,
        shop_type: def.shop_type.to_string(),
        is_legal,
        reputation,
        price_modifier,
    })
}

/// Fill a shop's inventory from its type distribution. One failed slot is
/// logged and replaced with a minimal fallback item; it never aborts the
/// rest of the inventory.
pub fn stock_shop(world: &mut World, shop_id: u64, rng: &mut dyn RngCore) -> Result<(), GenError> {
    let shop = world
        .shops
        .get(&shop_id)
        .ok_or(GenError::MissingReference {
            entity: "shop",
            id: shop_id,
        })?
        .clone();

    let (distribution, item_count) = match shop_type_def(&shop.shop_type) {
        Some(def) => (def.distribution, def.item_count),
        None => (GENERIC_DISTRIBUTION, GENERIC_ITEM_COUNT),
    };

    let slots = rng.random_range(item_count.0..=item_count.1);
    for _ in 0..slots {
        let family = sample_family(distribution, rng);
        let illegal = !shop.is_legal;
        let placement = ItemPlacement::Shop(shop_id);

        let item_id = match items::generate_for_family(world, rng, family, illegal, placement) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(%err, shop_id, ?family, "slot failed, stocking fallback item");
                items::fallback_item(world, family, illegal, placement)
            }
        };

        let is_limited_time = rng.random_bool(LIMITED_TIME_CHANCE);
        world.add_shop_entry(ShopInventoryEntry {
            shop_id,
            item_id,
            family,
            quantity: quantity_for(family, rng),
            price_modifier: shop.price_modifier * jitter(rng),
            is_featured: rng.random_bool(FEATURED_CHANCE),
            is_limited_time,
            expires_in_hours: is_limited_time.then(|| rng.random_range(12..=96)),
        });
    }

    Ok(())
}

/// Drop a shop's existing inventory and stock it fresh. The cleared item
/// rows stay behind as orphaned stock; only the inventory is replaced.
pub fn restock_shop(world: &mut World, shop_id: u64, rng: &mut dyn RngCore) -> Result<(), GenError> {
    if !world.shops.contains_key(&shop_id) {
        return Err(GenError::MissingReference {
            entity: "shop",
            id: shop_id,
        });
    }
    world.shop_inventory.retain(|e| e.shop_id != shop_id);
    stock_shop(world, shop_id, rng)
}

/// Sample an item family from a weighted distribution.
pub fn sample_family(distribution: &[(ItemFamily, f64)], rng: &mut dyn RngCore) -> ItemFamily {
    let total: f64 = distribution.iter().map(|(_, w)| w).sum();
    let mut roll = rng.random_range(0.0..total);
    for &(family, weight) in distribution {
        if roll < weight {
            return family;
        }
        roll -= weight;
    }
    distribution[distribution.len() - 1].0
}

/// Weapons and implants move one at a time; consumables and software stack.
fn quantity_for(family: ItemFamily, rng: &mut dyn RngCore) -> u32 {
    match family {
        ItemFamily::Weapon | ItemFamily::Implant => 1,
        ItemFamily::Hardware | ItemFamily::Clothing => rng.random_range(1..=3),
        ItemFamily::Consumable => rng.random_range(1..=10),
        ItemFamily::Software => rng.random_range(1..=5),
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
    use crate::worldgen::structures::generate_structures;

    fn make_shop_world(seed: u64) -> World {
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
        generate_shops(&mut world, &mut rng);
        world
    }

    #[test]
    fn cities_always_have_shops() {
        let world = make_shop_world(42);
        for city_id in world.city_ids() {
            let count = world
                .shops
                .values()
                .filter(|s| s.location_id == city_id)
                .count();
            assert!(count >= 1, "city {city_id} has no shops");
        }
    }

    #[test]
    fn inventories_reference_items_from_this_run() {
        let world = make_shop_world(7);
        assert!(!world.shop_inventory.is_empty());
        for entry in &world.shop_inventory {
            let item = world.items.get(&entry.item_id).expect("item exists");
            assert_eq!(item.placement, ItemPlacement::Shop(entry.shop_id));
        }
    }

    #[test]
    fn illegal_shops_stock_illegal_items() {
        // Collect enough illegal shops across seeds
        let mut checked = 0;
        for seed in 1..30u64 {
            let world = make_shop_world(seed);
            for shop in world.shops.values().filter(|s| !s.is_legal) {
                for entry in world.shop_inventory.iter().filter(|e| e.shop_id == shop.id) {
                    assert!(
                        world.items[&entry.item_id].is_illegal,
                        "legal item in illegal shop"
                    );
                    checked += 1;
                }
            }
        }
        assert!(checked > 0, "no illegal shop inventory found across seeds");
    }

    #[test]
    fn weapon_shop_distribution_fidelity() {
        let def = shop_type_def("weapons").unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let n = 5000;
        let mut weapon_count = 0;
        let allowed: Vec<ItemFamily> = def.distribution.iter().map(|(f, _)| *f).collect();
        for _ in 0..n {
            let family = sample_family(def.distribution, &mut rng);
            assert!(allowed.contains(&family), "{family:?} outside configured set");
            if family == ItemFamily::Weapon {
                weapon_count += 1;
            }
        }
        let share = weapon_count as f64 / n as f64;
        assert!(
            (share - 0.8).abs() < 0.03,
            "weapon share {share:.3} deviates from 0.8"
        );
    }

    #[test]
    fn limited_time_entries_have_expiry() {
        let world = make_shop_world(11);
        for entry in &world.shop_inventory {
            assert_eq!(entry.is_limited_time, entry.expires_in_hours.is_some());
        }
    }

    #[test]
    fn weapons_and_implants_stock_singly() {
        let world = make_shop_world(13);
        for entry in &world.shop_inventory {
            match entry.family {
                ItemFamily::Weapon | ItemFamily::Implant => assert_eq!(entry.quantity, 1),
                _ => assert!(entry.quantity >= 1),
            }
        }
    }

    #[test]
    fn restock_replaces_inventory() {
        let mut world = make_shop_world(17);
        let shop_id = *world.shops.keys().next().unwrap();
        let before: Vec<u64> = world
            .shop_inventory
            .iter()
            .filter(|e| e.shop_id == shop_id)
            .map(|e| e.item_id)
            .collect();

        let mut rng = SmallRng::seed_from_u64(12345);
        restock_shop(&mut world, shop_id, &mut rng).unwrap();

        let after: Vec<u64> = world
            .shop_inventory
            .iter()
            .filter(|e| e.shop_id == shop_id)
            .map(|e| e.item_id)
            .collect();
        assert!(!after.is_empty());
        for item_id in &after {
            assert!(
                !before.contains(item_id),
                "restock must create fresh item rows"
            );
        }
        // Other shops' inventories are untouched
        for entry in &world.shop_inventory {
            if entry.shop_id != shop_id {
                assert!(world.items.contains_key(&entry.item_id));
            }
        }
    }

    #[test]
    fn restock_unknown_shop_errors() {
        let mut world = make_shop_world(19);
        let mut rng = SmallRng::seed_from_u64(1);
        let result = restock_shop(&mut world, 999_999, &mut rng);
        assert!(matches!(
            result,
            Err(GenError::MissingReference { entity: "shop", .. })
        ));
    }

    #[test]
    fn unknown_shop_type_falls_back_to_generic() {
        let mut world = make_shop_world(23);
        // Rewrite one shop to an uncatalogued type, then restock it
        let shop_id = *world.shops.keys().next().unwrap();
        world.shops.get_mut(&shop_id).unwrap().shop_type = "bait_shop".to_string();

        let mut rng = SmallRng::seed_from_u64(5);
        restock_shop(&mut world, shop_id, &mut rng).unwrap();

        let allowed: Vec<ItemFamily> = GENERIC_DISTRIBUTION.iter().map(|(f, _)| *f).collect();
        let entries: Vec<_> = world
            .shop_inventory
            .iter()
            .filter(|e| e.shop_id == shop_id)
            .collect();
        assert!(!entries.is_empty());
        for entry in entries {
            assert!(allowed.contains(&entry.family));
        }
    }
}
