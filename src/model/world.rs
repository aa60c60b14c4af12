use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::building::{Building, Room};
use super::character::Character;
use super::connection::Connection;
use super::device::{Device, HackingPuzzle, Network, PuzzleTarget};
use super::item::Item;
use super::location::Location;
use super::mission::{Mission, Objective};
use super::shop::{Shop, ShopInventoryEntry};
use super::story::StoryElement;
use crate::id::IdGenerator;

/// World header. Immutable once generation starts; the seed recorded here is
/// always the resolved one, even when the caller left it unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldMeta {
    pub name: String,
    pub seed: u64,
    pub complexity: u8,
    pub author: Option<String>,
}

/// In-memory store for one generated world. All child entities are owned by
/// this struct and die with it; nothing is shared across worlds.
///
/// `add_*` methods allocate the entity's id (any id on the passed record is
/// overwritten) and assert the referential invariants that only a programming
/// error could violate.
#[derive(Debug)]
pub struct World {
    pub meta: WorldMeta,
    pub locations: BTreeMap<u64, Location>,
    pub connections: Vec<Connection>,
    pub buildings: BTreeMap<u64, Building>,
    pub rooms: BTreeMap<u64, Room>,
    pub devices: BTreeMap<u64, Device>,
    pub networks: BTreeMap<u64, Network>,
    pub puzzles: BTreeMap<u64, HackingPuzzle>,
    pub characters: BTreeMap<u64, Character>,
    pub missions: BTreeMap<u64, Mission>,
    pub objectives: Vec<Objective>,
    pub stories: BTreeMap<u64, StoryElement>,
    pub items: BTreeMap<u64, Item>,
    pub shops: BTreeMap<u64, Shop>,
    pub shop_inventory: Vec<ShopInventoryEntry>,
    pub id_gen: IdGenerator,
}

impl World {
    pub fn new(meta: WorldMeta) -> Self {
        Self {
            meta,
            locations: BTreeMap::new(),
            connections: Vec::new(),
            buildings: BTreeMap::new(),
            rooms: BTreeMap::new(),
            devices: BTreeMap::new(),
            networks: BTreeMap::new(),
            puzzles: BTreeMap::new(),
            characters: BTreeMap::new(),
            missions: BTreeMap::new(),
            objectives: Vec::new(),
            stories: BTreeMap::new(),
            items: BTreeMap::new(),
            shops: BTreeMap::new(),
            shop_inventory: Vec::new(),
            id_gen: IdGenerator::new(),
        }
    }

    /// Add a location. A district's parent must already exist, be a city,
    /// and be non-virtual.
    ///
    /// # Panics
    /// Panics if the parent reference violates those invariants.
    pub fn add_location(&mut self, loc: Location) -> u64 {
        if let Some(parent_id) = loc.parent_location_id {
            let parent = self
                .locations
                .get(&parent_id)
                .unwrap_or_else(|| panic!("add_location: parent {parent_id} not found"));
            assert!(
                parent.is_city(),
                "add_location: parent {parent_id} is not a city"
            );
            assert!(
                !parent.is_virtual,
                "add_location: parent {parent_id} is virtual"
            );
        }
        let id = self.id_gen.next_id();
        self.locations.insert(id, Location { id, ..loc });
        id
    }

    /// Add a directed connection row. Both endpoints must exist.
    ///
    /// # Panics
    /// Panics if either endpoint is missing.
    pub fn add_connection(&mut self, conn: Connection) {
        assert!(
            self.locations.contains_key(&conn.source_id),
            "add_connection: source {} not found",
            conn.source_id
        );
        assert!(
            self.locations.contains_key(&conn.destination_id),
            "add_connection: destination {} not found",
            conn.destination_id
        );
        assert!(
            conn.source_id != conn.destination_id,
            "add_connection: self-loop on {}",
            conn.source_id
        );
        self.connections.push(conn);
    }

    /// # Panics
    /// Panics if the owning location is missing or `floors` is zero.
    pub fn add_building(&mut self, building: Building) -> u64 {
        assert!(
            self.locations.contains_key(&building.location_id),
            "add_building: location {} not found",
            building.location_id
        );
        assert!(building.floors >= 1, "add_building: zero floors");
        let id = self.id_gen.next_id();
        self.buildings.insert(id, Building { id, ..building });
        id
    }

    /// # Panics
    /// Panics if the building is missing or the floor is out of range.
    pub fn add_room(&mut self, room: Room) -> u64 {
        let building = self
            .buildings
            .get(&room.building_id)
            .unwrap_or_else(|| panic!("add_room: building {} not found", room.building_id));
        assert!(
            room.floor >= 1 && room.floor <= building.floors,
            "add_room: floor {} outside 1..={}",
            room.floor,
            building.floors
        );
        let id = self.id_gen.next_id();
        self.rooms.insert(id, Room { id, ..room });
        id
    }

    /// # Panics
    /// Panics if the location, building, or owner reference is missing.
    pub fn add_device(&mut self, device: Device) -> u64 {
        assert!(
            self.locations.contains_key(&device.location_id),
            "add_device: location {} not found",
            device.location_id
        );
        if let Some(building_id) = device.building_id {
            assert!(
                self.buildings.contains_key(&building_id),
                "add_device: building {building_id} not found"
            );
        }
        if let Some(owner_id) = device.owner_id {
            assert!(
                self.characters.contains_key(&owner_id),
                "add_device: owner {owner_id} not found"
            );
        }
        let id = self.id_gen.next_id();
        self.devices.insert(id, Device { id, ..device });
        id
    }

    /// # Panics
    /// Panics if the owning building is missing.
    pub fn add_network(&mut self, network: Network) -> u64 {
        assert!(
            self.buildings.contains_key(&network.building_id),
            "add_network: building {} not found",
            network.building_id
        );
        let id = self.id_gen.next_id();
        self.networks.insert(id, Network { id, ..network });
        id
    }

    /// # Panics
    /// Panics if the puzzle target is missing or difficulty is out of range.
    pub fn add_puzzle(&mut self, puzzle: HackingPuzzle) -> u64 {
        match puzzle.target {
            PuzzleTarget::Device(target) => assert!(
                self.devices.contains_key(&target),
                "add_puzzle: device {target} not found"
            ),
            PuzzleTarget::Network(target) => assert!(
                self.networks.contains_key(&target),
                "add_puzzle: network {target} not found"
            ),
        }
        assert!(
            (1..=5).contains(&puzzle.difficulty),
            "add_puzzle: difficulty {} outside 1..=5",
            puzzle.difficulty
        );
        let id = self.id_gen.next_id();
        self.puzzles.insert(id, HackingPuzzle { id, ..puzzle });
        id
    }

    /// # Panics
    /// Panics if the home location is missing.
    pub fn add_character(&mut self, character: Character) -> u64 {
        assert!(
            self.locations.contains_key(&character.location_id),
            "add_character: location {} not found",
            character.location_id
        );
        let id = self.id_gen.next_id();
        self.characters.insert(id, Character { id, ..character });
        id
    }

    /// # Panics
    /// Panics if the giver or location is missing.
    pub fn add_mission(&mut self, mission: Mission) -> u64 {
        assert!(
            self.characters.contains_key(&mission.giver_id),
            "add_mission: giver {} not found",
            mission.giver_id
        );
        assert!(
            self.locations.contains_key(&mission.location_id),
            "add_mission: location {} not found",
            mission.location_id
        );
        let id = self.id_gen.next_id();
        self.missions.insert(id, Mission { id, ..mission });
        id
    }

    /// # Panics
    /// Panics if the owning mission is missing.
    pub fn add_objective(&mut self, objective: Objective) -> u64 {
        assert!(
            self.missions.contains_key(&objective.mission_id),
            "add_objective: mission {} not found",
            objective.mission_id
        );
        let id = self.id_gen.next_id();
        self.objectives.push(Objective { id, ..objective });
        id
    }

    /// # Panics
    /// Panics if an anchor reference (location/character/mission) is missing.
    pub fn add_story(&mut self, story: StoryElement) -> u64 {
        if let Some(location_id) = story.location_id {
            assert!(
                self.locations.contains_key(&location_id),
                "add_story: location {location_id} not found"
            );
        }
        if let Some(character_id) = story.character_id {
            assert!(
                self.characters.contains_key(&character_id),
                "add_story: character {character_id} not found"
            );
        }
        if let Some(mission_id) = story.mission_id {
            assert!(
                self.missions.contains_key(&mission_id),
                "add_story: mission {mission_id} not found"
            );
        }
        let id = self.id_gen.next_id();
        self.stories.insert(id, StoryElement { id, ..story });
        id
    }

    pub fn add_item(&mut self, item: Item) -> u64 {
        let id = self.id_gen.next_id();
        self.items.insert(id, Item { id, ..item });
        id
    }

    /// # Panics
    /// Panics if the location or building reference is missing.
    pub fn add_shop(&mut self, shop: Shop) -> u64 {
        assert!(
            self.locations.contains_key(&shop.location_id),
            "add_shop: location {} not found",
            shop.location_id
        );
        if let Some(building_id) = shop.building_id {
            assert!(
                self.buildings.contains_key(&building_id),
                "add_shop: building {building_id} not found"
            );
        }
        let id = self.id_gen.next_id();
        self.shops.insert(id, Shop { id, ..shop });
        id
    }

    /// # Panics
    /// Panics if the shop or item reference is missing. Inventory rows may
    /// only point at items created in the same run.
    pub fn add_shop_entry(&mut self, entry: ShopInventoryEntry) {
        assert!(
            self.shops.contains_key(&entry.shop_id),
            "add_shop_entry: shop {} not found",
            entry.shop_id
        );
        assert!(
            self.items.contains_key(&entry.item_id),
            "add_shop_entry: item {} not found",
            entry.item_id
        );
        self.shop_inventory.push(entry);
    }

    // ---------------------------------------------------------------------
    // Query helpers used by later phases
    // ---------------------------------------------------------------------

    pub fn city_ids(&self) -> Vec<u64> {
        self.locations
            .values()
            .filter(|l| l.is_city())
            .map(|l| l.id)
            .collect()
    }

    pub fn district_ids_of(&self, city_id: u64) -> Vec<u64> {
        self.locations
            .values()
            .filter(|l| l.parent_location_id == Some(city_id))
            .map(|l| l.id)
            .collect()
    }

    pub fn buildings_in(&self, location_id: u64) -> Vec<u64> {
        self.buildings
            .values()
            .filter(|b| b.location_id == location_id)
            .map(|b| b.id)
            .collect()
    }

    pub fn characters_in(&self, location_id: u64) -> Vec<u64> {
        self.characters
            .values()
            .filter(|c| c.location_id == location_id)
            .map(|c| c.id)
            .collect()
    }

    pub fn has_connection(&self, a: u64, b: u64) -> bool {
        self.connections
            .iter()
            .any(|c| c.source_id == a && c.destination_id == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::location::Location;

    pub(crate) fn test_meta() -> WorldMeta {
        WorldMeta {
            name: "Testgrid".to_string(),
            seed: 42,
            complexity: 1,
            author: None,
        }
    }

    fn bare_location() -> Location {
        Location {
            id: 0,
            name: "Neo Avalon".to_string(),
            x: 10.0,
            y: 20.0,
            security_level: 3,
            population: 1_000_000,
            services: vec!["commerce".to_string(), "transport".to_string()],
            tags: vec![],
            archetype: None,
            parent_location_id: None,
            is_virtual: false,
            is_special: false,
            is_dangerous: false,
        }
    }

    #[test]
    fn add_location_assigns_unique_ids() {
        let mut world = World::new(test_meta());
        let a = world.add_location(bare_location());
        let b = world.add_location(bare_location());
        assert_ne!(a, b);
        assert_eq!(world.locations[&a].id, a);
    }

    #[test]
    fn district_parent_must_be_city() {
        let mut world = World::new(test_meta());
        let city = world.add_location(bare_location());
        let district = world.add_location(Location {
            parent_location_id: Some(city),
            ..bare_location()
        });
        assert_eq!(world.locations[&district].parent_location_id, Some(city));
    }

    #[test]
    #[should_panic(expected = "parent 999 not found")]
    fn district_with_missing_parent_panics() {
        let mut world = World::new(test_meta());
        world.add_location(Location {
            parent_location_id: Some(999),
            ..bare_location()
        });
    }

    #[test]
    #[should_panic(expected = "is not a city")]
    fn district_parented_to_district_panics() {
        let mut world = World::new(test_meta());
        let city = world.add_location(bare_location());
        let district = world.add_location(Location {
            parent_location_id: Some(city),
            ..bare_location()
        });
        world.add_location(Location {
            parent_location_id: Some(district),
            ..bare_location()
        });
    }

    #[test]
    #[should_panic(expected = "self-loop")]
    fn self_connection_panics() {
        let mut world = World::new(test_meta());
        let a = world.add_location(bare_location());
        world.add_connection(crate::model::Connection {
            source_id: a,
            destination_id: a,
            transport: crate::model::TransportType::Metro,
            travel_time: 5,
            travel_cost: 5,
            requires_hacking: false,
            requires_special_access: false,
        });
    }

    #[test]
    fn city_and_district_queries() {
        let mut world = World::new(test_meta());
        let a = world.add_location(bare_location());
        let b = world.add_location(bare_location());
        let d = world.add_location(Location {
            parent_location_id: Some(a),
            ..bare_location()
        });
        assert_eq!(world.city_ids(), vec![a, b]);
        assert_eq!(world.district_ids_of(a), vec![d]);
        assert!(world.district_ids_of(b).is_empty());
    }

    #[test]
    #[should_panic(expected = "floor 3 outside")]
    fn room_floor_out_of_range_panics() {
        let mut world = World::new(test_meta());
        let loc = world.add_location(bare_location());
        let building = world.add_building(crate::model::Building {
            id: 0,
            location_id: loc,
            building_type: crate::model::BuildingType::Office,
            floors: 2,
            security_level: 3,
            owner: "Kiroshi Group".to_string(),
            services: vec![],
            requires_special_access: false,
            requires_hacking: false,
        });
        world.add_room(crate::model::Room {
            id: 0,
            building_id: building,
            floor: 3,
            room_type: "office".to_string(),
            is_locked: false,
            is_hackable: false,
        });
    }
}
