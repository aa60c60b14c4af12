use rand::Rng;
use rand::RngCore;

use crate::error::GenError;
use crate::model::{ItemFamily, Rarity};

/// Discrete weight table over the five rarity tiers, in tier order.
/// Weights must be positive and strictly decreasing so rarer tiers are
/// always less likely.
#[derive(Debug, Clone)]
pub struct RarityTable {
    pub weights: [u32; 5],
}

impl RarityTable {
    pub const fn new(weights: [u32; 5]) -> Self {
        Self { weights }
    }

    /// A malformed weight table is a fatal configuration error.
    pub fn validate(&self) -> Result<(), GenError> {
        for (i, &w) in self.weights.iter().enumerate() {
            if w == 0 {
                return Err(GenError::Config(format!(
                    "rarity weight for {:?} is zero",
                    Rarity::ALL[i]
                )));
            }
        }
        for pair in self.weights.windows(2) {
            if pair[1] >= pair[0] {
                return Err(GenError::Config(format!(
                    "rarity weights {:?} are not strictly decreasing",
                    self.weights
                )));
            }
        }
        Ok(())
    }

    pub fn roll(&self, rng: &mut dyn RngCore) -> Rarity {
        let total: u32 = self.weights.iter().sum();
        let roll = rng.random_range(0..total);
        let mut cumulative = 0;
        for (i, &w) in self.weights.iter().enumerate() {
            cumulative += w;
            if roll < cumulative {
                return Rarity::ALL[i];
            }
        }
        Rarity::Common
    }
}

// Per-family tables. All keep Common in the 50–60% band and Legendary at 1%.
const HARDWARE_RARITY: RarityTable = RarityTable::new([58, 26, 11, 4, 1]);
const CONSUMABLE_RARITY: RarityTable = RarityTable::new([60, 25, 10, 4, 1]);
const WEAPON_RARITY: RarityTable = RarityTable::new([52, 29, 13, 5, 1]);
const IMPLANT_RARITY: RarityTable = RarityTable::new([54, 28, 12, 5, 1]);
const SOFTWARE_RARITY: RarityTable = RarityTable::new([56, 26, 12, 5, 1]);
const CLOTHING_RARITY: RarityTable = RarityTable::new([60, 26, 9, 4, 1]);

pub fn family_table(family: ItemFamily) -> &'static RarityTable {
    match family {
        ItemFamily::Hardware => &HARDWARE_RARITY,
        ItemFamily::Consumable => &CONSUMABLE_RARITY,
        ItemFamily::Weapon => &WEAPON_RARITY,
        ItemFamily::Implant => &IMPLANT_RARITY,
        ItemFamily::Software => &SOFTWARE_RARITY,
        ItemFamily::Clothing => &CLOTHING_RARITY,
    }
}

/// Validate every family table up front, before any entity exists.
pub fn validate_tables() -> Result<(), GenError> {
    for family in ItemFamily::ALL {
        family_table(family).validate()?;
    }
    Ok(())
}

/// Bounded uniform factor applied once per item so values within a tier do
/// not cluster on identical numbers.
pub fn jitter(rng: &mut dyn RngCore) -> f64 {
    rng.random_range(0.8..1.2)
}

/// Growth of base values with item level (1..=10).
pub fn level_factor(level: u8) -> f64 {
    1.0 + 0.15 * (level.saturating_sub(1)) as f64
}

/// The stat/price formula shared by every item family:
/// base(level) × rarity multiplier × type modifier × jitter.
pub fn scaled_value(
    base: f64,
    level: u8,
    rarity: Rarity,
    type_modifier: f64,
    rng: &mut dyn RngCore,
) -> f64 {
    base * level_factor(level) * rarity.multiplier() * type_modifier * jitter(rng)
}
