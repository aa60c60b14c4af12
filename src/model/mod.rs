pub mod building;
pub mod character;
pub mod connection;
pub mod device;
pub mod item;
pub mod location;
pub mod mission;
pub mod shop;
pub mod story;
pub mod world;

pub use building::{Building, BuildingType, Room};
pub use character::{Character, TraitBlock};
pub use connection::{Connection, TransportType};
pub use device::{
    Device, DeviceType, EncryptionType, HackingPuzzle, Network, NetworkType, PuzzleTarget,
    PuzzleType,
};
pub use item::{Item, ItemFamily, ItemPlacement, Rarity};
pub use location::{DistrictArchetype, Location};
pub use mission::{Mission, MissionType, Objective, ObjectiveType, RewardBundle};
pub use shop::{Shop, ShopInventoryEntry};
pub use story::StoryElement;
pub use world::{World, WorldMeta};
