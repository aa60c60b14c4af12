//! Catalogue tables driving per-type behavior. Each entry owns its own
//! ranges and probabilities so the generators stay data-driven instead of
//! branching on type.

use crate::model::{BuildingType, DeviceType, ItemFamily, MissionType, NetworkType, ObjectiveType};

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Optional city services on top of the always-present "commerce"+"transport".
pub const OPTIONAL_SERVICES: &[&str] = &[
    "medical",
    "finance",
    "entertainment",
    "education",
    "security",
    "fabrication",
    "data_haven",
];

/// Fixed catalogue of special locations, up to complexity−1 per world.
pub struct SpecialLocationDef {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub population: (u64, u64),
    pub security: (u8, u8),
    pub is_virtual: bool,
    pub is_dangerous: bool,
}

pub const SPECIAL_LOCATIONS: &[SpecialLocationDef] = &[
    SpecialLocationDef { name: "Halcyon Orbital Platform", tags: &["orbital", "restricted"], population: (2_000, 20_000), security: (4, 5), is_virtual: false, is_dangerous: false },
    SpecialLocationDef { name: "The Grey Exchange", tags: &["darknet", "market"], population: (0, 0), security: (2, 4), is_virtual: true, is_dangerous: true },
    SpecialLocationDef { name: "Meridian Freeport", tags: &["freeport", "smuggling"], population: (30_000, 120_000), security: (1, 3), is_virtual: false, is_dangerous: true },
    SpecialLocationDef { name: "Reclamation Zone 9", tags: &["derelict", "quarantine"], population: (500, 8_000), security: (1, 2), is_virtual: false, is_dangerous: true },
    SpecialLocationDef { name: "The Lattice", tags: &["construct", "ai"], population: (0, 0), security: (3, 5), is_virtual: true, is_dangerous: false },
];

/// Population bucket controlling how much a location gets of everything.
pub struct PopulationTier {
    pub max_population: u64,
    pub buildings: (u32, u32),
    pub characters: (u32, u32),
    pub devices: (u32, u32),
    pub loot_items: (u32, u32),
}

pub const POPULATION_TIERS: &[PopulationTier] = &[
    PopulationTier { max_population: 50_000, buildings: (1, 3), characters: (2, 4), devices: (2, 4), loot_items: (1, 2) },
    PopulationTier { max_population: 500_000, buildings: (2, 5), characters: (3, 6), devices: (3, 6), loot_items: (1, 3) },
    PopulationTier { max_population: 2_000_000, buildings: (4, 8), characters: (4, 8), devices: (4, 8), loot_items: (2, 4) },
    PopulationTier { max_population: u64::MAX, buildings: (6, 12), characters: (6, 10), devices: (6, 10), loot_items: (2, 5) },
];

pub fn population_tier(population: u64) -> &'static PopulationTier {
    POPULATION_TIERS
        .iter()
        .find(|t| population <= t.max_population)
        .unwrap_or(&POPULATION_TIERS[POPULATION_TIERS.len() - 1])
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

pub struct BuildingTypeDef {
    pub building_type: BuildingType,
    pub weight: u32,
    pub floors: (u32, u32),
    /// Signed offset on the owning location's security level.
    pub security_offset: i8,
    pub special_access_chance: f64,
    pub hacking_chance: f64,
    pub rooms_per_floor: (u32, u32),
    pub room_types: &'static [&'static str],
    /// Room types locked (and sometimes hackable) more often as security rises.
    pub sensitive_rooms: &'static [&'static str],
    pub network_count: (u32, u32),
    pub services: &'static [&'static str],
}

pub const BUILDING_TYPES: &[BuildingTypeDef] = &[
    BuildingTypeDef {
        building_type: BuildingType::CorporateHq,
        weight: 5,
        floors: (20, 120),
        security_offset: 2,
        special_access_chance: 0.7,
        hacking_chance: 0.5,
        rooms_per_floor: (2, 6),
        room_types: &["lobby", "open_office", "boardroom", "executive_suite", "server_room", "archive"],
        sensitive_rooms: &["executive_suite", "server_room", "archive"],
        network_count: (3, 6),
        services: &["corporate"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Office,
        weight: 12,
        floors: (4, 30),
        security_offset: 0,
        special_access_chance: 0.2,
        hacking_chance: 0.2,
        rooms_per_floor: (2, 5),
        room_types: &["lobby", "open_office", "meeting_room", "break_room", "server_room"],
        sensitive_rooms: &["server_room"],
        network_count: (1, 3),
        services: &["office_space"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Apartment,
        weight: 14,
        floors: (3, 25),
        security_offset: -1,
        special_access_chance: 0.05,
        hacking_chance: 0.1,
        rooms_per_floor: (3, 6),
        room_types: &["hallway", "apartment", "laundry", "storage", "rooftop_access"],
        sensitive_rooms: &["storage"],
        network_count: (1, 2),
        services: &["housing"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Megablock,
        weight: 8,
        floors: (40, 200),
        security_offset: -1,
        special_access_chance: 0.1,
        hacking_chance: 0.25,
        rooms_per_floor: (3, 6),
        room_types: &["atrium", "habitation_pod", "market_stall", "clinic_bay", "maintenance_shaft"],
        sensitive_rooms: &["maintenance_shaft"],
        network_count: (1, 3),
        services: &["housing", "commerce"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Mall,
        weight: 9,
        floors: (2, 6),
        security_offset: 0,
        special_access_chance: 0.05,
        hacking_chance: 0.1,
        rooms_per_floor: (3, 6),
        room_types: &["concourse", "storefront", "food_court", "loading_dock", "security_office"],
        sensitive_rooms: &["security_office", "loading_dock"],
        network_count: (1, 3),
        services: &["commerce"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Clinic,
        weight: 8,
        floors: (1, 4),
        security_offset: 0,
        special_access_chance: 0.15,
        hacking_chance: 0.15,
        rooms_per_floor: (2, 5),
        room_types: &["waiting_room", "exam_room", "surgery_bay", "pharma_storage"],
        sensitive_rooms: &["surgery_bay", "pharma_storage"],
        network_count: (1, 3),
        services: &["medical"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Hospital,
        weight: 5,
        floors: (5, 15),
        security_offset: 1,
        special_access_chance: 0.25,
        hacking_chance: 0.2,
        rooms_per_floor: (3, 6),
        room_types: &["reception", "ward", "icu", "operating_theater", "records_room", "morgue"],
        sensitive_rooms: &["operating_theater", "records_room", "morgue"],
        network_count: (1, 3),
        services: &["medical"],
    },
    BuildingTypeDef {
        building_type: BuildingType::DataCenter,
        weight: 5,
        floors: (1, 5),
        security_offset: 2,
        special_access_chance: 0.8,
        hacking_chance: 0.6,
        rooms_per_floor: (2, 4),
        room_types: &["control_room", "server_hall", "cooling_plant", "cage_row", "vault"],
        sensitive_rooms: &["server_hall", "cage_row", "vault"],
        network_count: (3, 6),
        services: &["data_haven"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Factory,
        weight: 8,
        floors: (1, 4),
        security_offset: 0,
        special_access_chance: 0.2,
        hacking_chance: 0.2,
        rooms_per_floor: (2, 4),
        room_types: &["assembly_line", "control_booth", "parts_storage", "chem_store"],
        sensitive_rooms: &["control_booth", "chem_store"],
        network_count: (1, 3),
        services: &["fabrication"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Warehouse,
        weight: 9,
        floors: (1, 3),
        security_offset: -1,
        special_access_chance: 0.1,
        hacking_chance: 0.15,
        rooms_per_floor: (1, 3),
        room_types: &["cargo_bay", "office_mezzanine", "cold_storage"],
        sensitive_rooms: &["cold_storage"],
        network_count: (1, 2),
        services: &["storage"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Nightclub,
        weight: 7,
        floors: (1, 4),
        security_offset: -1,
        special_access_chance: 0.3,
        hacking_chance: 0.1,
        rooms_per_floor: (2, 5),
        room_types: &["dance_floor", "bar", "vip_lounge", "back_office", "cellar"],
        sensitive_rooms: &["vip_lounge", "back_office"],
        network_count: (1, 2),
        services: &["entertainment"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Hotel,
        weight: 7,
        floors: (5, 40),
        security_offset: 0,
        special_access_chance: 0.1,
        hacking_chance: 0.1,
        rooms_per_floor: (4, 6),
        room_types: &["lobby", "guest_room", "penthouse", "service_corridor", "conference_hall"],
        sensitive_rooms: &["penthouse"],
        network_count: (1, 3),
        services: &["lodging"],
    },
    BuildingTypeDef {
        building_type: BuildingType::PoliceStation,
        weight: 4,
        floors: (2, 8),
        security_offset: 2,
        special_access_chance: 0.85,
        hacking_chance: 0.4,
        rooms_per_floor: (2, 5),
        room_types: &["front_desk", "holding_cell", "evidence_locker", "armory", "dispatch_center"],
        sensitive_rooms: &["evidence_locker", "armory", "dispatch_center"],
        network_count: (1, 3),
        services: &["security"],
    },
    BuildingTypeDef {
        building_type: BuildingType::ResearchLab,
        weight: 4,
        floors: (2, 10),
        security_offset: 2,
        special_access_chance: 0.7,
        hacking_chance: 0.5,
        rooms_per_floor: (2, 5),
        room_types: &["clean_room", "wet_lab", "specimen_storage", "observation_deck", "vault"],
        sensitive_rooms: &["specimen_storage", "vault", "clean_room"],
        network_count: (3, 6),
        services: &["research"],
    },
    BuildingTypeDef {
        building_type: BuildingType::Safehouse,
        weight: 3,
        floors: (1, 3),
        security_offset: 1,
        special_access_chance: 0.9,
        hacking_chance: 0.3,
        rooms_per_floor: (1, 3),
        room_types: &["common_room", "bunk_room", "stash_room", "escape_tunnel"],
        sensitive_rooms: &["stash_room", "escape_tunnel"],
        network_count: (1, 2),
        services: &[],
    },
];

pub fn building_def(building_type: BuildingType) -> &'static BuildingTypeDef {
    BUILDING_TYPES
        .iter()
        .find(|d| d.building_type == building_type)
        .expect("every building type has a catalogue entry")
}

// ---------------------------------------------------------------------------
// Devices and networks
// ---------------------------------------------------------------------------

pub struct DeviceTypeDef {
    pub device_type: DeviceType,
    pub weight: u32,
    pub security: (u8, u8),
    /// Device types that make sense in a pocket rather than a rack.
    pub portable: bool,
}

pub const DEVICE_TYPES: &[DeviceTypeDef] = &[
    DeviceTypeDef { device_type: DeviceType::Terminal, weight: 18, security: (1, 3), portable: false },
    DeviceTypeDef { device_type: DeviceType::Server, weight: 10, security: (2, 5), portable: false },
    DeviceTypeDef { device_type: DeviceType::SecurityCamera, weight: 14, security: (2, 4), portable: false },
    DeviceTypeDef { device_type: DeviceType::DoorController, weight: 12, security: (2, 4), portable: false },
    DeviceTypeDef { device_type: DeviceType::Drone, weight: 8, security: (2, 4), portable: true },
    DeviceTypeDef { device_type: DeviceType::PersonalDeck, weight: 14, security: (1, 4), portable: true },
    DeviceTypeDef { device_type: DeviceType::MedicalScanner, weight: 6, security: (1, 3), portable: true },
    DeviceTypeDef { device_type: DeviceType::VendingUnit, weight: 10, security: (1, 2), portable: false },
];

pub const OS_TYPES: &[&str] = &["HelixOS", "KiruLinux", "OrbitalWare", "NetraCore", "GhostShell"];

pub struct NetworkTypeDef {
    pub network_type: NetworkType,
    pub weight: u32,
    pub hidden_chance: f64,
    pub hacking_chance: f64,
}

pub const NETWORK_TYPES: &[NetworkTypeDef] = &[
    NetworkTypeDef { network_type: NetworkType::PublicWifi, weight: 10, hidden_chance: 0.0, hacking_chance: 0.05 },
    NetworkTypeDef { network_type: NetworkType::IotMesh, weight: 9, hidden_chance: 0.2, hacking_chance: 0.3 },
    NetworkTypeDef { network_type: NetworkType::CorporateLan, weight: 8, hidden_chance: 0.3, hacking_chance: 0.5 },
    NetworkTypeDef { network_type: NetworkType::SecurityGrid, weight: 5, hidden_chance: 0.5, hacking_chance: 0.7 },
    NetworkTypeDef { network_type: NetworkType::DarknetNode, weight: 3, hidden_chance: 0.9, hacking_chance: 0.8 },
];

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// Trait biases are added to a base 1..=6 roll and clamped to [1, 10].
pub struct ProfessionDef {
    pub name: &'static str,
    pub weight: u32,
    pub importance: i8,
    pub hacking: i8,
    pub combat: i8,
    pub charisma: i8,
    pub wealth: i8,
}

pub const PROFESSIONS: &[ProfessionDef] = &[
    ProfessionDef { name: "netrunner", weight: 8, importance: 1, hacking: 4, combat: 0, charisma: 0, wealth: 1 },
    ProfessionDef { name: "fixer", weight: 8, importance: 2, hacking: 1, combat: 1, charisma: 3, wealth: 2 },
    ProfessionDef { name: "corp_exec", weight: 6, importance: 3, hacking: 0, combat: 0, charisma: 2, wealth: 4 },
    ProfessionDef { name: "street_samurai", weight: 7, importance: 1, hacking: 0, combat: 4, charisma: 0, wealth: 1 },
    ProfessionDef { name: "medtech", weight: 7, importance: 0, hacking: 1, combat: 0, charisma: 1, wealth: 1 },
    ProfessionDef { name: "journalist", weight: 5, importance: 1, hacking: 1, combat: 0, charisma: 3, wealth: 0 },
    ProfessionDef { name: "smuggler", weight: 6, importance: 0, hacking: 0, combat: 2, charisma: 1, wealth: 2 },
    ProfessionDef { name: "bartender", weight: 8, importance: 0, hacking: 0, combat: 1, charisma: 3, wealth: 0 },
    ProfessionDef { name: "beat_cop", weight: 6, importance: 0, hacking: 0, combat: 3, charisma: 1, wealth: 0 },
    ProfessionDef { name: "courier", weight: 8, importance: 0, hacking: 1, combat: 1, charisma: 1, wealth: 0 },
    ProfessionDef { name: "ripperdoc", weight: 4, importance: 1, hacking: 2, combat: 0, charisma: 0, wealth: 2 },
    ProfessionDef { name: "drifter", weight: 8, importance: 0, hacking: 0, combat: 1, charisma: 0, wealth: 0 },
];

pub const FACTIONS: &[&str] = &[
    "Independents",
    "Kiroshi Group",
    "The Aldecaldo Caravans",
    "Steel Covenant",
    "Harbor Authority",
    "The Grey Market",
    "Civic Defense Force",
    "Lantern Collective",
];

// ---------------------------------------------------------------------------
// Missions
// ---------------------------------------------------------------------------

pub struct MissionTypeDef {
    pub mission_type: MissionType,
    /// Lead objective; later objectives draw from `follow_ups`.
    pub opening: ObjectiveType,
    pub follow_ups: &'static [ObjectiveType],
    pub targets: &'static [&'static str],
}

pub const MISSION_TYPES: &[MissionTypeDef] = &[
    MissionTypeDef {
        mission_type: MissionType::Retrieval,
        opening: ObjectiveType::GoTo,
        follow_ups: &[ObjectiveType::Acquire, ObjectiveType::Breach, ObjectiveType::Contact],
        targets: &["the prototype chip", "a sealed briefcase", "the stolen shipment", "an heirloom blade"],
    },
    MissionTypeDef {
        mission_type: MissionType::DataHeist,
        opening: ObjectiveType::Breach,
        follow_ups: &[ObjectiveType::Acquire, ObjectiveType::Plant, ObjectiveType::GoTo],
        targets: &["the payroll ledger", "a research archive", "the blackmail cache", "an encrypted manifest"],
    },
    MissionTypeDef {
        mission_type: MissionType::Sabotage,
        opening: ObjectiveType::GoTo,
        follow_ups: &[ObjectiveType::Plant, ObjectiveType::Breach, ObjectiveType::Neutralize],
        targets: &["the cooling plant", "a fabricator line", "the uplink mast", "a patrol depot"],
    },
    MissionTypeDef {
        mission_type: MissionType::Escort,
        opening: ObjectiveType::Contact,
        follow_ups: &[ObjectiveType::GoTo, ObjectiveType::Neutralize],
        targets: &["a defecting chemist", "the witness", "a courier convoy", "the union delegate"],
    },
    MissionTypeDef {
        mission_type: MissionType::Surveillance,
        opening: ObjectiveType::GoTo,
        follow_ups: &[ObjectiveType::Plant, ObjectiveType::Contact, ObjectiveType::Acquire],
        targets: &["a warehouse meeting", "the penthouse line", "a dead-drop site", "the dock manifest"],
    },
    MissionTypeDef {
        mission_type: MissionType::Takedown,
        opening: ObjectiveType::Contact,
        follow_ups: &[ObjectiveType::GoTo, ObjectiveType::Neutralize, ObjectiveType::Breach],
        targets: &["a rogue enforcer", "the cell leader", "a corrupt inspector", "the rival crew"],
    },
];

// ---------------------------------------------------------------------------
// Shops
// ---------------------------------------------------------------------------

pub struct ShopTypeDef {
    pub shop_type: &'static str,
    pub item_count: (u32, u32),
    /// Weighted distribution over the item families this shop stocks.
    pub distribution: &'static [(ItemFamily, f64)],
    pub compatible_buildings: &'static [BuildingType],
    /// Base chance of operating illegally, before district bias.
    pub illegal_chance: f64,
}

pub const SHOP_TYPES: &[ShopTypeDef] = &[
    ShopTypeDef {
        shop_type: "weapons",
        item_count: (5, 15),
        distribution: &[(ItemFamily::Weapon, 0.8), (ItemFamily::Hardware, 0.1), (ItemFamily::Consumable, 0.1)],
        compatible_buildings: &[BuildingType::Mall, BuildingType::Warehouse, BuildingType::Safehouse],
        illegal_chance: 0.25,
    },
    ShopTypeDef {
        shop_type: "hardware",
        item_count: (8, 25),
        distribution: &[(ItemFamily::Hardware, 0.7), (ItemFamily::Software, 0.2), (ItemFamily::Consumable, 0.1)],
        compatible_buildings: &[BuildingType::Mall, BuildingType::Office, BuildingType::Factory, BuildingType::Warehouse],
        illegal_chance: 0.1,
    },
    ShopTypeDef {
        shop_type: "software",
        item_count: (10, 30),
        distribution: &[(ItemFamily::Software, 0.8), (ItemFamily::Hardware, 0.2)],
        compatible_buildings: &[BuildingType::Mall, BuildingType::Office, BuildingType::DataCenter],
        illegal_chance: 0.15,
    },
    ShopTypeDef {
        shop_type: "pharma",
        item_count: (10, 40),
        distribution: &[(ItemFamily::Consumable, 0.9), (ItemFamily::Implant, 0.1)],
        compatible_buildings: &[BuildingType::Clinic, BuildingType::Hospital, BuildingType::Mall],
        illegal_chance: 0.1,
    },
    ShopTypeDef {
        shop_type: "chrome_clinic",
        item_count: (5, 15),
        distribution: &[(ItemFamily::Implant, 0.7), (ItemFamily::Consumable, 0.2), (ItemFamily::Hardware, 0.1)],
        compatible_buildings: &[BuildingType::Clinic, BuildingType::Hospital],
        illegal_chance: 0.2,
    },
    ShopTypeDef {
        shop_type: "clothier",
        item_count: (10, 30),
        distribution: &[(ItemFamily::Clothing, 0.9), (ItemFamily::Consumable, 0.1)],
        compatible_buildings: &[BuildingType::Mall, BuildingType::Hotel],
        illegal_chance: 0.02,
    },
    ShopTypeDef {
        shop_type: "general",
        item_count: (10, 35),
        distribution: &[
            (ItemFamily::Consumable, 0.4),
            (ItemFamily::Hardware, 0.25),
            (ItemFamily::Clothing, 0.2),
            (ItemFamily::Software, 0.15),
        ],
        compatible_buildings: &[BuildingType::Mall, BuildingType::Megablock, BuildingType::Apartment],
        illegal_chance: 0.05,
    },
    ShopTypeDef {
        shop_type: "black_market",
        item_count: (5, 20),
        distribution: &[
            (ItemFamily::Weapon, 0.35),
            (ItemFamily::Implant, 0.2),
            (ItemFamily::Software, 0.2),
            (ItemFamily::Hardware, 0.15),
            (ItemFamily::Consumable, 0.1),
        ],
        compatible_buildings: &[BuildingType::Warehouse, BuildingType::Nightclub, BuildingType::Safehouse],
        illegal_chance: 0.9,
    },
];

/// Fallback distribution for a shop type outside the catalogue.
pub const GENERIC_DISTRIBUTION: &[(ItemFamily, f64)] = &[
    (ItemFamily::Hardware, 0.4),
    (ItemFamily::Consumable, 0.3),
    (ItemFamily::Software, 0.3),
];

/// Item count band used together with [`GENERIC_DISTRIBUTION`].
pub const GENERIC_ITEM_COUNT: (u32, u32) = (5, 15);

pub fn shop_type_def(shop_type: &str) -> Option<&'static ShopTypeDef> {
    SHOP_TYPES.iter().find(|d| d.shop_type == shop_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BuildingType;

    #[test]
    fn every_building_type_has_a_def() {
        for building_type in BuildingType::ALL {
            let def = building_def(building_type);
            assert_eq!(def.building_type, building_type);
        }
    }

    #[test]
    fn building_floor_ranges_sane() {
        for def in BUILDING_TYPES {
            assert!(def.floors.0 >= 1, "{:?} floor minimum", def.building_type);
            assert!(def.floors.0 <= def.floors.1);
            assert!(def.rooms_per_floor.0 >= 1 && def.rooms_per_floor.1 <= 6);
        }
    }

    #[test]
    fn sensitive_rooms_are_subset_of_room_types() {
        for def in BUILDING_TYPES {
            for sensitive in def.sensitive_rooms {
                assert!(
                    def.room_types.contains(sensitive),
                    "{:?}: {sensitive} not in room catalogue",
                    def.building_type
                );
            }
        }
    }

    #[test]
    fn population_tier_lookup() {
        assert_eq!(population_tier(10_000).buildings, (1, 3));
        assert_eq!(population_tier(19_000_000).buildings, (6, 12));
    }

    #[test]
    fn shop_distributions_sum_to_one() {
        for def in SHOP_TYPES {
            let sum: f64 = def.distribution.iter().map(|(_, w)| w).sum();
            assert!(
                (sum - 1.0).abs() < 1e-9,
                "{} distribution sums to {sum}",
                def.shop_type
            );
        }
        let sum: f64 = GENERIC_DISTRIBUTION.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn shop_type_lookup_and_fallback() {
        assert!(shop_type_def("weapons").is_some());
        assert!(shop_type_def("bait_shop").is_none());
    }

    #[test]
    fn special_location_security_ranges_valid() {
        for def in SPECIAL_LOCATIONS {
            assert!(def.security.0 >= 1 && def.security.1 <= 5);
            assert!(def.security.0 <= def.security.1);
            assert!(def.population.0 <= def.population.1);
        }
    }

    #[test]
    fn profession_weights_positive() {
        for def in PROFESSIONS {
            assert!(def.weight > 0, "{} has zero weight", def.name);
        }
    }

    #[test]
    fn mission_defs_have_targets() {
        for def in MISSION_TYPES {
            assert!(!def.targets.is_empty());
            assert!(!def.follow_ups.is_empty());
        }
    }
}
