use rand::Rng;
use rand::distr::Distribution;
use serde::{Deserialize, Serialize};

/// District flavor. Drives security bias, wealth signals, and how likely
/// shops in the district are to deal in illegal goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistrictArchetype {
    Corporate,
    Financial,
    Industrial,
    Commercial,
    Residential,
    Entertainment,
    Slum,
    Undercity,
}

impl DistrictArchetype {
    pub const ALL: [DistrictArchetype; 8] = [
        DistrictArchetype::Corporate,
        DistrictArchetype::Financial,
        DistrictArchetype::Industrial,
        DistrictArchetype::Commercial,
        DistrictArchetype::Residential,
        DistrictArchetype::Entertainment,
        DistrictArchetype::Slum,
        DistrictArchetype::Undercity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DistrictArchetype::Corporate => "corporate",
            DistrictArchetype::Financial => "financial",
            DistrictArchetype::Industrial => "industrial",
            DistrictArchetype::Commercial => "commercial",
            DistrictArchetype::Residential => "residential",
            DistrictArchetype::Entertainment => "entertainment",
            DistrictArchetype::Slum => "slum",
            DistrictArchetype::Undercity => "undercity",
        }
    }

    /// Signed offset applied to the parent city's security level.
    pub fn security_offset(self) -> i8 {
        match self {
            DistrictArchetype::Corporate => 2,
            DistrictArchetype::Financial => 1,
            DistrictArchetype::Industrial => 0,
            DistrictArchetype::Commercial => 0,
            DistrictArchetype::Residential => 0,
            DistrictArchetype::Entertainment => -1,
            DistrictArchetype::Slum => -2,
            DistrictArchetype::Undercity => -2,
        }
    }

    /// Wealth signal folded into shop price modifiers (1.0 = baseline).
    pub fn wealth_factor(self) -> f64 {
        match self {
            DistrictArchetype::Corporate => 1.3,
            DistrictArchetype::Financial => 1.4,
            DistrictArchetype::Industrial => 0.9,
            DistrictArchetype::Commercial => 1.1,
            DistrictArchetype::Residential => 1.0,
            DistrictArchetype::Entertainment => 1.1,
            DistrictArchetype::Slum => 0.7,
            DistrictArchetype::Undercity => 0.8,
        }
    }

    /// Additional probability that a shop here operates outside the law.
    pub fn illegal_shop_bias(self) -> f64 {
        match self {
            DistrictArchetype::Slum => 0.35,
            DistrictArchetype::Undercity => 0.5,
            DistrictArchetype::Entertainment => 0.15,
            DistrictArchetype::Industrial => 0.1,
            _ => 0.0,
        }
    }

    /// Chance the district is flagged dangerous at generation time.
    pub fn danger_chance(self) -> f64 {
        match self {
            DistrictArchetype::Slum => 0.6,
            DistrictArchetype::Undercity => 0.8,
            DistrictArchetype::Industrial => 0.2,
            _ => 0.05,
        }
    }
}

impl Distribution<DistrictArchetype> for rand::distr::StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DistrictArchetype {
        DistrictArchetype::ALL[rng.random_range(0..DistrictArchetype::ALL.len())]
    }
}

/// A city, district, or special location. Districts carry a parent city id;
/// cities and special locations have no parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: u64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub security_level: u8,
    pub population: u64,
    pub services: Vec<String>,
    pub tags: Vec<String>,
    pub archetype: Option<DistrictArchetype>,
    pub parent_location_id: Option<u64>,
    pub is_virtual: bool,
    pub is_special: bool,
    pub is_dangerous: bool,
}

impl Location {
    pub fn is_city(&self) -> bool {
        self.parent_location_id.is_none() && !self.is_special
    }

    pub fn is_district(&self) -> bool {
        self.parent_location_id.is_some()
    }
}
