use rand::Rng;
use rand::RngCore;

use crate::model::{HackingPuzzle, PuzzleTarget, PuzzleType, World};

/// Share of devices that carry a puzzle.
const DEVICE_PUZZLE_CHANCE: f64 = 0.3;
/// Share of hacking-flagged networks that carry a puzzle.
const NETWORK_PUZZLE_CHANCE: f64 = 0.5;

/// Attach hacking puzzles to devices and hacking-flagged networks.
/// Difficulty follows the target's security posture, clamped to [1, 5].
pub fn generate_puzzles(world: &mut World, rng: &mut dyn RngCore) {
    let device_targets: Vec<(u64, u8)> = world
        .devices
        .values()
        .map(|d| (d.id, d.security_level))
        .collect();

    for (device_id, security_level) in device_targets {
        if rng.random_bool(DEVICE_PUZZLE_CHANCE) {
            add_puzzle(world, PuzzleTarget::Device(device_id), security_level, rng);
        }
    }

    let network_targets: Vec<(u64, u8)> = world
        .networks
        .values()
        .filter(|n| n.requires_hacking)
        .map(|n| (n.id, n.security_level))
        .collect();

    for (network_id, security_level) in network_targets {
        if rng.random_bool(NETWORK_PUZZLE_CHANCE) {
            add_puzzle(world, PuzzleTarget::Network(network_id), security_level, rng);
        }
    }
}

fn add_puzzle(world: &mut World, target: PuzzleTarget, security_level: u8, rng: &mut dyn RngCore) {
    let difficulty = security_level.clamp(1, 5);
    let puzzle_type = PuzzleType::ALL[rng.random_range(0..PuzzleType::ALL.len())];
    let reward_credits = difficulty as u32 * rng.random_range(50..=150);

    world.add_puzzle(HackingPuzzle {
        id: 0,
        target,
        puzzle_type,
        difficulty,
        reward_credits,
        reward_data: rng.random_bool(0.4),
    });
}
