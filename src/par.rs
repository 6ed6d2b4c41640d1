//! Move targets and ratings for authored levels.
//!
//! Shuffle levels scramble their unlocked tiles with a seed derived from the level id, so the
//! same level always starts from the same arrangement and its par can be computed offline.

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::cell::ROTATIONS;
use crate::level::{LevelDefinition, LevelError};
use crate::solver::{solve, Solution};

/// Minimum player moves to solve a level from its starting arrangement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Par {
    /// Exchanges needed to undo the starting shuffle.
    pub swaps: u32,
    /// Quarter turns needed once every tile is in place.
    pub rotations: u32,
}

impl Par {
    /// All moves together.
    pub fn total(&self) -> u32 {
        self.swaps + self.rotations
    }
}

/// djb2 over the level id.
pub fn level_seed(id: &str) -> u64 {
    id.bytes().fold(5381u64, |hash, byte| hash.wrapping_mul(33).wrapping_add(byte as u64))
}

/// Fisher-Yates shuffle of every unlocked cell (empty ones included), in row-major order.
///
/// Returns the number of swaps performed.
pub fn shuffle_unlocked(board: &mut Board, seed: u64) -> usize {
    let slots = board.positions()
        .filter(|location| !board.cell(*location).is_locked())
        .collect_vec();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut swaps = 0;
    for i in (1..slots.len()).rev() {
        let j = rng.gen_range(0..=i);
        if board.swap(UnorderedPair(slots[i], slots[j])) {
            swaps += 1;
        }
    }

    swaps
}

/// Exchanges that turn the unlocked cells of `shuffled` back into those of `authored`.
///
/// Cells are matched by content, so identical tiles are interchangeable. Cells that already
/// match where they are never move; the rest are matched greedily in row-major order.
fn swaps_to_restore(authored: &Board, shuffled: &Board) -> u32 {
    let slots = authored.positions()
        .filter(|location| !authored.cell(*location).is_locked())
        .collect_vec();

    // destination slot for the cell currently in each slot; cells already in place stay put
    let in_place = slots.iter()
        .map(|location| authored.cell(*location) == shuffled.cell(*location))
        .collect_vec();
    let mut matched = in_place.clone();
    let permutation = slots.iter().enumerate()
        .map(|(i, location)| {
            if in_place[i] {
                return i;
            }
            let cell = shuffled.cell(*location);
            let destination = (0..slots.len())
                .find(|j| !matched[*j] && authored.cell(slots[*j]) == cell)
                .unwrap_or(i);
            matched[destination] = true;
            destination
        })
        .collect_vec();

    let mut seen = vec![false; slots.len()];
    let mut cycles = 0;
    for start in 0..slots.len() {
        if seen[start] {
            continue;
        }
        cycles += 1;
        let mut current = start;
        while !seen[current] {
            seen[current] = true;
            current = permutation[current];
        }
    }

    (slots.len() - cycles) as u32
}

/// The par for `level`, or `Ok(None)` if the level has no solution.
///
/// Rotation moves are counted from the authored rotations to the solver's solution. Shuffle
/// levels add the swaps needed to undo the deterministic shuffle.
#[instrument(skip_all, fields(id = %level.id))]
pub fn calculate_par(level: &LevelDefinition) -> Result<Option<Par>, LevelError> {
    let mut board = level.to_board()?;
    let Some(solution) = solve(&mut board) else {
        debug!("no solution");
        return Ok(None);
    };

    Ok(Some(par_from_solution(level, &board, &solution)))
}

/// The par for `level` given a `solution` already found for its `authored` board.
pub fn par_from_solution(level: &LevelDefinition, authored: &Board, solution: &Solution) -> Par {
    let rotations: u32 = solution.iter()
        .map(|(location, solved)| ((solved + ROTATIONS - level.authored_rotation(*location)) % ROTATIONS) as u32)
        .sum();

    let swaps = if level.shuffle {
        let mut shuffled = authored.clone();
        shuffle_unlocked(&mut shuffled, level_seed(&level.id));
        swaps_to_restore(authored, &shuffled)
    } else {
        0
    };

    debug!(swaps, rotations, "par calculated");
    Par { swaps, rotations }
}

/// Three stars within par moves and par time, two within one and a half times par moves, otherwise one.
pub fn star_rating(moves: u32, elapsed_seconds: f32, par_moves: u32, par_time_seconds: f32) -> u8 {
    if moves <= par_moves && elapsed_seconds <= par_time_seconds {
        3
    } else if moves as f32 <= par_moves as f32 * 1.5 {
        2
    } else {
        1
    }
}
