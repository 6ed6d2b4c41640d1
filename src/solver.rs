use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::board::Board;
use crate::cell::{Rotation, ROTATIONS};
use crate::location::GridPosition;
use crate::tracer::{PropagationResult, Tracer};

/// The rotation every rotatable tile must be turned to. Iterates in a stable order.
pub type Solution = BTreeMap<GridPosition, Rotation>;

/// Above this many rotatable tiles the 4^N search gets slow enough to notice.
const COMFORTABLE_SEARCH_SIZE: usize = 10;

/// A single suggested move: turn the tile at `location` clockwise `rotations` times.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hint {
    /// The tile to turn.
    pub location: GridPosition,
    /// Clockwise quarter turns, in `1..4`.
    pub rotations: Rotation,
}

/// Exhaustive depth-first search over the rotations of every unlocked, non-empty tile.
///
/// Each tile tries its current rotation first and then each further clockwise turn, so the first
/// solution found favors few player moves. The board is mutated during the search and always
/// restored before [`solve`](Self::solve) returns.
///
/// This is a brute force search with `4^N` traces in the worst case. Levels keep `N` small.
#[derive(Debug, Default)]
pub struct Solver {
    tracer: Tracer,
    result: PropagationResult,
    rotatable: Vec<GridPosition>,
    original: Vec<Rotation>,
    evaluated: usize,
}

impl Solver {
    /// A solver with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Traces run by the last [`solve`](Self::solve).
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Find rotations that satisfy every target, or [`None`] if no combination does.
    ///
    /// A board with nothing to rotate has no search space and always returns [`None`], even if it is already satisfied.
    #[instrument(skip_all, fields(width = board.width(), height = board.height()))]
    pub fn solve(&mut self, board: &mut Board) -> Option<Solution> {
        self.evaluated = 0;
        self.rotatable = board.rotatable().collect_vec();
        self.original = self.rotatable.iter().map(|location| board.cell(*location).rotation()).collect_vec();

        if self.rotatable.is_empty() {
            debug!("nothing to rotate");
            return None;
        }
        if self.rotatable.len() > COMFORTABLE_SEARCH_SIZE {
            warn!(rotatable = self.rotatable.len(), "large rotation search space");
        }

        let mut chosen = vec![0; self.rotatable.len()];
        let found = self.search(board, 0, &mut chosen);

        for (location, rotation) in self.rotatable.iter().zip(&self.original) {
            board.set_rotation(*location, *rotation);
        }

        debug!(found, evaluated = self.evaluated, rotatable = self.rotatable.len(), "search finished");
        found.then(|| self.rotatable.iter().copied().zip(chosen).collect())
    }

    fn search(&mut self, board: &mut Board, index: usize, chosen: &mut [Rotation]) -> bool {
        if index == self.rotatable.len() {
            self.evaluated += 1;
            self.tracer.trace(board, &mut self.result);
            return self.result.all_targets_satisfied();
        }

        let location = self.rotatable[index];
        for offset in 0..ROTATIONS {
            let rotation = (self.original[index] + offset) % ROTATIONS;
            board.set_rotation(location, rotation);
            if self.search(board, index + 1, chosen) {
                chosen[index] = rotation;
                return true;
            }
        }

        false
    }
}

/// Shorthand for a one-off [`Solver::solve`].
pub fn solve(board: &mut Board) -> Option<Solution> {
    Solver::new().solve(board)
}

/// The first tile, in `solution` order, whose rotation differs from the solution, with the number of clockwise turns it needs.
///
/// [`None`] if there is no solution or the board already matches it.
pub fn next_hint(board: &Board, solution: Option<&Solution>) -> Option<Hint> {
    solution?.iter()
        .map(|(location, target)| (*location, board.cell(*location).rotation(), *target))
        .find(|(_, current, target)| current != target)
        .map(|(location, current, target)| Hint {
            location,
            rotations: (target + ROTATIONS - current) % ROTATIONS,
        })
}
