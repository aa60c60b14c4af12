pub mod db;
pub mod error;
pub mod flush;
pub mod id;
pub mod model;
pub mod worldgen;

pub use error::GenError;
pub use id::IdGenerator;
pub use model::{
    Building, Character, Connection, Device, HackingPuzzle, Item, ItemFamily, Location, Mission,
    Network, Objective, Rarity, Shop, ShopInventoryEntry, StoryElement, World, WorldMeta,
};
pub use worldgen::{WorldGenConfig, generate_world};
