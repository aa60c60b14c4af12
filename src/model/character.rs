use serde::{Deserialize, Serialize};

/// The five character trait scores, each 1–10, sampled independently with a
/// profession-dependent bias.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraitBlock {
    pub importance: u8,
    pub hacking: u8,
    pub combat: u8,
    pub charisma: u8,
    pub wealth: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: u64,
    pub location_id: u64,
    pub name: String,
    pub profession: String,
    pub faction: String,
    pub traits: TraitBlock,
}
