//! A player's attempt at a level.

use tracing::{debug, info};
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::level::{LevelDefinition, LevelError};
use crate::location::GridPosition;
use crate::par::{level_seed, shuffle_unlocked, star_rating};
use crate::solver::{next_hint, Hint, Solution, Solver};
use crate::tracer::{PropagationResult, Tracer};

/// One attempt at a level: owns the board, re-traces after every accepted move, and counts moves.
///
/// A win is only checked after an accepted move, so a level that happens to start out lit is
/// still playable. Once a move satisfies every target the session is solved and refuses further
/// moves until [`restart`](Self::restart).
pub struct Session {
    level: LevelDefinition,
    board: Board,
    tracer: Tracer,
    result: PropagationResult,
    solver: Solver,
    // rotation-only; stale after any swap
    solution: Option<Solution>,
    moves: u32,
    solved: bool,
}

impl Session {
    /// Build the level's board, shuffling it for shuffle levels, and trace it.
    pub fn start(level: LevelDefinition) -> Result<Self, LevelError> {
        let board = Self::initial_board(&level)?;
        let mut session = Self {
            level,
            board,
            tracer: Tracer::new(),
            result: PropagationResult::default(),
            solver: Solver::new(),
            solution: None,
            moves: 0,
            solved: false,
        };
        session.tracer.trace(&session.board, &mut session.result);
        info!(id = %session.level.id, name = %session.level.name, "level started");
        Ok(session)
    }

    fn initial_board(level: &LevelDefinition) -> Result<Board, LevelError> {
        let mut board = level.to_board()?;
        if level.shuffle {
            shuffle_unlocked(&mut board, level_seed(&level.id));
        }
        Ok(board)
    }

    /// Start the level over from its initial arrangement.
    pub fn restart(&mut self) -> Result<(), LevelError> {
        self.board = Self::initial_board(&self.level)?;
        self.solution = None;
        self.moves = 0;
        self.solved = false;
        self.tracer.trace(&self.board, &mut self.result);
        Ok(())
    }

    fn after_move(&mut self) {
        self.tracer.trace(&self.board, &mut self.result);
        if self.result.all_targets_satisfied() {
            self.solved = true;
            info!(id = %self.level.id, moves = self.moves, "level solved");
        }
    }

    /// Rotate the tile at `location`. Counts as a move only if the board accepts it.
    ///
    /// # Panics
    ///
    /// Panics if `location` is out of bounds.
    pub fn rotate(&mut self, location: GridPosition) -> bool {
        if self.solved || !self.board.rotate(location) {
            return false;
        }

        self.moves += 1;
        debug!(%location, moves = self.moves, "rotated");
        self.after_move();
        true
    }

    /// Swap the tiles at `a` and `b`. Counts as a move only if the board accepts it.
    ///
    /// # Panics
    ///
    /// Panics if either location is out of bounds.
    pub fn swap(&mut self, a: GridPosition, b: GridPosition) -> bool {
        if self.solved || !self.board.swap(UnorderedPair(a, b)) {
            return false;
        }

        self.moves += 1;
        self.solution = None;
        debug!(%a, %b, moves = self.moves, "swapped");
        self.after_move();
        true
    }

    /// The next rotation toward a solution, solving the current arrangement on first use.
    pub fn hint(&mut self) -> Option<Hint> {
        if self.solved {
            return None;
        }
        if self.solution.is_none() {
            self.solution = self.solver.solve(&mut self.board);
        }

        next_hint(&self.board, self.solution.as_ref())
    }

    /// Star rating for the moves made so far, finishing after `elapsed_seconds`.
    pub fn stars(&self, elapsed_seconds: f32) -> u8 {
        star_rating(self.moves, elapsed_seconds, self.level.par_moves, self.level.par_time_seconds)
    }

    /// The level being played.
    pub fn level(&self) -> &LevelDefinition {
        &self.level
    }

    /// The board as it stands.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The trace of the current board.
    pub fn result(&self) -> &PropagationResult {
        &self.result
    }

    /// Accepted moves since the start or the last restart.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether a move has satisfied every target.
    pub fn is_solved(&self) -> bool {
        self.solved
    }
}
