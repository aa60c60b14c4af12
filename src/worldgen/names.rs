use rand::Rng;
use rand::RngCore;
use rand::seq::SliceRandom;

use crate::model::DistrictArchetype;

const WORLD_NAMES: &[&str] = &[
    "The Meridian Sprawl",
    "Kessler Arc",
    "The Vantage Belt",
    "Nocturne Reach",
    "The Ashline Corridor",
    "Zenith Span",
];

/// City name pool, drawn without replacement per run.
pub const CITY_NAMES: &[&str] = &[
    "Neo Avalon",
    "Kowloon Verge",
    "Port Meridian",
    "Sancta Ruin",
    "New Harbin",
    "Vesper City",
    "Calder Bay",
    "Okuda Heights",
    "Tessellate",
    "Mirrenhold",
    "Arcadia Terminal",
    "Junction Prime",
];

const DISTRICT_SUFFIXES: &[&str] = &[
    "District", "Quarter", "Ward", "Row", "Sector", "Blocks", "Strip", "Reach",
];

const CORP_PREFIXES: &[&str] = &[
    "Kiroshi", "Dyncorp", "Helix", "Tessier", "Ono-Sendai", "Maas", "Zhirang", "Aldecaldo",
    "Virek", "Sandoval",
];

const CORP_SUFFIXES: &[&str] = &[
    "Group", "Industries", "Biotech", "Dynamics", "Holdings", "Systems", "Logistics", "Syndicate",
];

const FIRST_PREFIXES: &[&str] = &[
    "Ad", "An", "Ash", "Cal", "Dez", "Dra", "Eli", "Fen", "Hak", "Iva", "Jax", "Kai", "Kei",
    "Lena", "Mar", "Nia", "Oru", "Rei", "Sable", "Tam", "Ves", "Yuri", "Zan", "Zho",
];

const FIRST_SUFFIXES: &[&str] = &[
    "a", "dra", "el", "en", "ik", "ira", "ka", "ko", "ma", "n", "o", "ra", "ris", "to", "ya", "zu",
];

const SURNAMES: &[&str] = &[
    "Abalos", "Brandt", "Calloway", "Dorsett", "Ferro", "Grieves", "Halloran", "Ishida",
    "Juniper", "Kovacs", "Lindqvist", "Moreau", "Nakano", "Okonkwo", "Pallas", "Quade",
    "Reyes", "Santoro", "Takeda", "Voss", "Wexley", "Yuen", "Zhou",
];

const ITEM_PREFIXES: &[&str] = &[
    "Street", "Proto", "Mil-Spec", "Vortex", "Ghost", "Chrome", "Nexus", "Ronin", "Apex",
    "Shadow", "Pulse", "Onyx",
];

const ITEM_SUFFIXES: &[&str] = &[
    "Mk I", "Mk II", "Mk III", "X", "Zero", "Prime", "-7", "EX", "Nova", "SE",
];

/// Pick a world flavor name.
pub fn generate_world_name(rng: &mut dyn RngCore) -> String {
    WORLD_NAMES[rng.random_range(0..WORLD_NAMES.len())].to_string()
}

/// Shuffled copy of the city name pool; callers pop from it and fall back to
/// [`synthetic_city_name`] once exhausted.
pub fn shuffled_city_pool(rng: &mut dyn RngCore) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = CITY_NAMES.to_vec();
    pool.shuffle(rng);
    pool
}

/// Fallback once the city name pool runs dry.
pub fn synthetic_city_name(index: usize) -> String {
    format!("Annex {:02}", index + 1)
}

/// District name derived from its archetype, e.g. "Gilded Quarter".
pub fn generate_district_name(archetype: DistrictArchetype, rng: &mut dyn RngCore) -> String {
    let prefixes = match archetype {
        DistrictArchetype::Corporate => &["Spire", "Meridian", "Crown", "Apex", "Beacon"][..],
        DistrictArchetype::Financial => &["Gilded", "Ledger", "Sterling", "Vault", "Exchange"][..],
        DistrictArchetype::Industrial => &["Forge", "Rust", "Cinder", "Gantry", "Smelter"][..],
        DistrictArchetype::Commercial => &["Market", "Neon", "Arcade", "Bazaar", "Lantern"][..],
        DistrictArchetype::Residential => &["Garden", "Harbor", "Willow", "Terrace", "Mercy"][..],
        DistrictArchetype::Entertainment => &["Velvet", "Mirage", "Cabaret", "Strobe", "Jade"][..],
        DistrictArchetype::Slum => &["Ashpit", "Broken", "Scrap", "Hollow", "Grit"][..],
        DistrictArchetype::Undercity => &["Drain", "Tunnel", "Sump", "Echo", "Blackout"][..],
    };
    let prefix = prefixes[rng.random_range(0..prefixes.len())];
    let suffix = DISTRICT_SUFFIXES[rng.random_range(0..DISTRICT_SUFFIXES.len())];
    format!("{prefix} {suffix}")
}

/// Corporation name used for building owners and manufacturers.
pub fn generate_corp_name(rng: &mut dyn RngCore) -> String {
    let prefix = CORP_PREFIXES[rng.random_range(0..CORP_PREFIXES.len())];
    let suffix = CORP_SUFFIXES[rng.random_range(0..CORP_SUFFIXES.len())];
    format!("{prefix} {suffix}")
}

/// Random character name (given + surname).
pub fn generate_character_name(rng: &mut dyn RngCore) -> String {
    let prefix = FIRST_PREFIXES[rng.random_range(0..FIRST_PREFIXES.len())];
    let suffix = FIRST_SUFFIXES[rng.random_range(0..FIRST_SUFFIXES.len())];
    let surname = SURNAMES[rng.random_range(0..SURNAMES.len())];
    format!("{prefix}{suffix} {surname}")
}

/// Manufacturer/flavor item name assembled from prefix/body/suffix pools,
/// e.g. "Mil-Spec Kiroshi Breach Kit Mk II".
pub fn generate_item_name(type_label: &str, rng: &mut dyn RngCore) -> String {
    let prefix = ITEM_PREFIXES[rng.random_range(0..ITEM_PREFIXES.len())];
    let body = CORP_PREFIXES[rng.random_range(0..CORP_PREFIXES.len())];
    let suffix = ITEM_SUFFIXES[rng.random_range(0..ITEM_SUFFIXES.len())];
    format!("{prefix} {body} {type_label} {suffix}")
}

/// Synthetic private-range address for generated devices.
pub fn generate_ip_address(rng: &mut dyn RngCore) -> String {
    format!(
        "10.{}.{}.{}",
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8),
        rng.random_range(1..=254u8)
    )
}
