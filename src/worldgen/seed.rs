use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Resolve the caller's optional seed: pass it through, or draw one from
/// entropy so it can be recorded on the world and the run reproduced later.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => s,
        None => rand::rng().random(),
    }
}

/// The single RNG stream for one generation run. Every phase draws from this
/// stream and nothing else.
pub fn make_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
