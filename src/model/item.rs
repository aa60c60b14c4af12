use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rarity tier. Drives the multiplier applied to every derived stat and price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    /// Strictly increasing stat/price multiplier, Common 1.0× up to
    /// Legendary 10×.
    pub fn multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.6,
            Rarity::Rare => 2.8,
            Rarity::Epic => 5.0,
            Rarity::Legendary => 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFamily {
    Hardware,
    Consumable,
    Weapon,
    Implant,
    Software,
    Clothing,
}

impl ItemFamily {
    pub const ALL: [ItemFamily; 6] = [
        ItemFamily::Hardware,
        ItemFamily::Consumable,
        ItemFamily::Weapon,
        ItemFamily::Implant,
        ItemFamily::Software,
        ItemFamily::Clothing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemFamily::Hardware => "hardware",
            ItemFamily::Consumable => "consumable",
            ItemFamily::Weapon => "weapon",
            ItemFamily::Implant => "implant",
            ItemFamily::Software => "software",
            ItemFamily::Clothing => "clothing",
        }
    }
}

/// Where a generated item ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemPlacement {
    Building(u64),
    Character(u64),
    Shop(u64),
    Device(u64),
    WorldLoot,
}

impl ItemPlacement {
    pub fn kind_str(self) -> &'static str {
        match self {
            ItemPlacement::Building(_) => "building",
            ItemPlacement::Character(_) => "character",
            ItemPlacement::Shop(_) => "shop",
            ItemPlacement::Device(_) => "device",
            ItemPlacement::WorldLoot => "world_loot",
        }
    }

    pub fn ref_id(self) -> Option<u64> {
        match self {
            ItemPlacement::Building(id)
            | ItemPlacement::Character(id)
            | ItemPlacement::Shop(id)
            | ItemPlacement::Device(id) => Some(id),
            ItemPlacement::WorldLoot => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: u64,
    pub family: ItemFamily,
    pub item_type: String,
    pub name: String,
    pub rarity: Rarity,
    /// 1..=10.
    pub level: u8,
    /// Family- and type-specific numeric stats.
    pub stats: BTreeMap<String, f64>,
    pub price: u32,
    pub is_illegal: bool,
    pub placement: ItemPlacement,
}
