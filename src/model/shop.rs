use serde::{Deserialize, Serialize};

use super::item::ItemFamily;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shop {
    pub id: u64,
    pub location_id: u64,
    /// Building the shop operates from; `None` when the location has no
    /// suitable building at all.
    pub building_id: Option<u64>,
    pub shop_type: String,
    pub is_legal: bool,
    /// 1..=10.
    pub reputation: u8,
    /// Composite of legality, reputation, and district wealth signals.
    pub price_modifier: f64,
}

/// One stocked slot of a shop. `item_id` always references an item row
/// created in the same run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopInventoryEntry {
    pub shop_id: u64,
    pub item_id: u64,
    pub family: ItemFamily,
    pub quantity: u32,
    /// Shop modifier × per-item jitter.
    pub price_modifier: f64,
    pub is_featured: bool,
    pub is_limited_time: bool,
    /// Hours until the offer rotates out; set only for limited-time entries.
    pub expires_in_hours: Option<u32>,
}
