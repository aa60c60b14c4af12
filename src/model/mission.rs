use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    Retrieval,
    DataHeist,
    Sabotage,
    Escort,
    Surveillance,
    Takedown,
}

impl MissionType {
    pub fn as_str(self) -> &'static str {
        match self {
            MissionType::Retrieval => "retrieval",
            MissionType::DataHeist => "data_heist",
            MissionType::Sabotage => "sabotage",
            MissionType::Escort => "escort",
            MissionType::Surveillance => "surveillance",
            MissionType::Takedown => "takedown",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardBundle {
    pub credits: u32,
    pub street_cred: u8,
    pub includes_item: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mission {
    pub id: u64,
    pub mission_type: MissionType,
    pub difficulty: u8,
    pub giver_id: u64,
    pub location_id: u64,
    pub reward: RewardBundle,
    pub is_main_quest: bool,
    pub is_repeatable: bool,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    GoTo,
    Acquire,
    Breach,
    Neutralize,
    Contact,
    Plant,
}

impl ObjectiveType {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectiveType::GoTo => "go_to",
            ObjectiveType::Acquire => "acquire",
            ObjectiveType::Breach => "breach",
            ObjectiveType::Neutralize => "neutralize",
            ObjectiveType::Contact => "contact",
            ObjectiveType::Plant => "plant",
        }
    }
}

/// One step of a mission. Each mission owns 1–5 of these, ordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Objective {
    pub id: u64,
    pub mission_id: u64,
    pub order_index: u8,
    pub objective_type: ObjectiveType,
    pub target: String,
    pub optional: bool,
}
