use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingType {
    CorporateHq,
    Office,
    Apartment,
    Megablock,
    Mall,
    Clinic,
    Hospital,
    DataCenter,
    Factory,
    Warehouse,
    Nightclub,
    Hotel,
    PoliceStation,
    ResearchLab,
    Safehouse,
}

impl BuildingType {
    pub const ALL: [BuildingType; 15] = [
        BuildingType::CorporateHq,
        BuildingType::Office,
        BuildingType::Apartment,
        BuildingType::Megablock,
        BuildingType::Mall,
        BuildingType::Clinic,
        BuildingType::Hospital,
        BuildingType::DataCenter,
        BuildingType::Factory,
        BuildingType::Warehouse,
        BuildingType::Nightclub,
        BuildingType::Hotel,
        BuildingType::PoliceStation,
        BuildingType::ResearchLab,
        BuildingType::Safehouse,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BuildingType::CorporateHq => "corporate_hq",
            BuildingType::Office => "office",
            BuildingType::Apartment => "apartment",
            BuildingType::Megablock => "megablock",
            BuildingType::Mall => "mall",
            BuildingType::Clinic => "clinic",
            BuildingType::Hospital => "hospital",
            BuildingType::DataCenter => "data_center",
            BuildingType::Factory => "factory",
            BuildingType::Warehouse => "warehouse",
            BuildingType::Nightclub => "nightclub",
            BuildingType::Hotel => "hotel",
            BuildingType::PoliceStation => "police_station",
            BuildingType::ResearchLab => "research_lab",
            BuildingType::Safehouse => "safehouse",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Building {
    pub id: u64,
    pub location_id: u64,
    pub building_type: BuildingType,
    /// Always ≥ 1.
    pub floors: u32,
    /// Location security plus a type-dependent offset, clamped to [1, 5].
    pub security_level: u8,
    pub owner: String,
    pub services: Vec<String>,
    pub requires_special_access: bool,
    pub requires_hacking: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: u64,
    pub building_id: u64,
    /// 1..=building.floors.
    pub floor: u32,
    pub room_type: String,
    pub is_locked: bool,
    pub is_hackable: bool,
}
