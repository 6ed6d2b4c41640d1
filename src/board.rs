use std::fmt::{Display, Formatter};
use std::ops::Index;

use ndarray::Array2;
use unordered_pair::UnorderedPair;

use crate::cell::{Cell, Rotation, TileKind, ROTATIONS};
use crate::location::{Dimension, GridPosition};

/// A rectangular grid of [`Cell`]s, stored row-major.
///
/// [`Board`]s are usually built with a [`BoardBuilder`](crate::builder::BoardBuilder) or from a
/// [`LevelDefinition`](crate::level::LevelDefinition), then mutated in place by rotations and swaps.
///
/// Direct cell access ([`Index`], [`cell`](Self::cell), [`set_cell`](Self::set_cell)) panics on an
/// out-of-bounds position; check with [`in_bounds`](Self::in_bounds) first.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    // width, height
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// An all-[`Empty`](TileKind::Empty) board with the specified dimensions, in `(width, height)` order.
    pub fn new(dims: (Dimension, Dimension)) -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            dims,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.dims.1.get()
    }

    /// Whether `location` is on the board.
    pub fn in_bounds(&self, location: GridPosition) -> bool {
        location.0 >= 0 && location.1 >= 0
            && (location.0 as usize) < self.width()
            && (location.1 as usize) < self.height()
    }

    #[track_caller]
    fn check(&self, location: GridPosition) {
        assert!(
            self.in_bounds(location),
            "{} is out of bounds ({}x{})", location, self.width(), self.height()
        );
    }

    /// The cell at `location`, or [`None`] if it is off the board.
    pub fn get(&self, location: GridPosition) -> Option<&Cell> {
        if self.in_bounds(location) {
            self.cells.get(location.as_index())
        } else {
            None
        }
    }

    /// The cell at `location`.
    ///
    /// # Panics
    ///
    /// Panics if `location` is out of bounds.
    #[track_caller]
    pub fn cell(&self, location: GridPosition) -> &Cell {
        self.check(location);
        &self.cells[location.as_index()]
    }

    /// Replace the cell at `location`, ignoring locks.
    ///
    /// # Panics
    ///
    /// Panics if `location` is out of bounds.
    #[track_caller]
    pub fn set_cell(&mut self, location: GridPosition, cell: Cell) {
        self.check(location);
        self.cells[location.as_index()] = cell;
    }

    /// Turn the tile at `location` a quarter turn clockwise.
    ///
    /// Returns `false`, leaving the board untouched, if the tile is locked or empty.
    #[track_caller]
    pub fn rotate(&mut self, location: GridPosition) -> bool {
        let rotation = self.cell(location).rotation;
        self.set_rotation(location, rotation + 1)
    }

    /// Set the rotation of the tile at `location`, modulo four.
    ///
    /// Returns `false`, leaving the board untouched, if the tile is locked or empty.
    #[track_caller]
    pub fn set_rotation(&mut self, location: GridPosition, rotation: Rotation) -> bool {
        self.check(location);
        let cell = &mut self.cells[location.as_index()];
        if !cell.is_rotatable() {
            return false;
        }

        cell.rotation = rotation % ROTATIONS;
        true
    }

    /// Exchange the tiles at both locations.
    ///
    /// Returns `false`, leaving the board untouched, if either tile is locked or both locations are the same.
    #[track_caller]
    pub fn swap(&mut self, locations: UnorderedPair<GridPosition>) -> bool {
        let UnorderedPair(a, b) = locations;
        if a == b || self.cell(a).locked || self.cell(b).locked {
            return false;
        }

        self.cells.swap(a.as_index(), b.as_index());
        true
    }

    /// Every location on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item=GridPosition> + '_ {
        self.cells.indexed_iter().map(|(index, _)| GridPosition::from(index))
    }

    fn positions_where(&self, predicate: fn(&Cell) -> bool) -> impl Iterator<Item=GridPosition> + '_ {
        self.cells.indexed_iter()
            .filter(move |(_, cell)| predicate(*cell))
            .map(|(index, _)| GridPosition::from(index))
    }

    /// Every source, in row-major order.
    pub fn sources(&self) -> impl Iterator<Item=GridPosition> + '_ {
        self.positions_where(|cell| cell.kind == TileKind::Source)
    }

    /// Every target, in row-major order.
    pub fn targets(&self) -> impl Iterator<Item=GridPosition> + '_ {
        self.positions_where(|cell| cell.kind == TileKind::Target)
    }

    /// Unlocked, non-empty tiles: the positions the solver searches over.
    pub fn rotatable(&self) -> impl Iterator<Item=GridPosition> + '_ {
        self.positions_where(Cell::is_rotatable)
    }

    /// Every cell's rotation, laid out like the board.
    pub fn rotation_snapshot(&self) -> Array2<Rotation> {
        self.cells.map(Cell::rotation)
    }
}

impl Index<GridPosition> for Board {
    type Output = Cell;

    #[track_caller]
    fn index(&self, location: GridPosition) -> &Self::Output {
        self.cell(location)
    }
}

/// Dump `board` one row per line.
fn print(board: Array2<char>) -> String {
    let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

    for row in board.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print(self.cells.map(Cell::glyph)))
    }
}
